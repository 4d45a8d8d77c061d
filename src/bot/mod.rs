// Chat transport boundary: Telegram long polling feeding the command handler

mod command;
mod handler;

pub use command::*;
pub use handler::*;

use std::sync::Arc;

use chrono::Utc;
use teloxide::Bot;
use teloxide::dispatching::{Dispatcher, UpdateFilterExt};
use teloxide::dptree;
use teloxide::requests::{Requester, ResponseResult};
use teloxide::types::{BotCommand, Message, Update};
use tracing::{info, warn};

use crate::application::ExpenseService;

/// This bot's username, used to skip commands addressed to other bots.
#[derive(Debug, Clone)]
pub struct BotUsername(pub Option<String>);

/// Poll Telegram for updates until Ctrl-C, answering commands from `service`.
pub async fn run(token: String, service: Arc<ExpenseService>) -> ResponseResult<()> {
    let bot = Bot::new(token);

    let me = bot.get_me().await?;
    let username = BotUsername(me.user.username.clone());
    info!(username = ?username.0, "authorized");

    if let Err(err) = register_commands(&bot).await {
        warn!(error = %err, "failed to register command menu");
    }

    let handler = Update::filter_message().endpoint(on_message);

    info!("bot started, polling for updates");
    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![service, username])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;
    info!("bot stopped");
    Ok(())
}

async fn register_commands(bot: &Bot) -> ResponseResult<()> {
    let commands: Vec<BotCommand> = Command::descriptions()
        .into_iter()
        .map(|(name, description)| BotCommand::new(name, description))
        .collect();
    bot.set_my_commands(commands).await?;
    Ok(())
}

async fn on_message(
    bot: Bot,
    msg: Message,
    service: Arc<ExpenseService>,
    username: BotUsername,
) -> ResponseResult<()> {
    let (Some(text), Some(user)) = (msg.text(), msg.from.as_ref()) else {
        return Ok(());
    };

    let bot_name = username.0.as_deref();
    if let Some(reply) = handle_text(&service, user.id.0, text, bot_name, Utc::now()).await {
        bot.send_message(msg.chat.id, reply).await?;
    }
    Ok(())
}
