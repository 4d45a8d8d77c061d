use chrono::{DateTime, Utc};
use tracing::{error, warn};

use crate::application::{AppError, ExpenseService, render_report};
use crate::domain::UserId;

use super::Command;

pub const GREETING: &str =
    "Привет! Я помогу вести учёт трат. Введите /payment, чтобы записать трату.";
pub const PAYMENT_USAGE: &str = "Формат: /payment <тип> <сумма> <валюта>";
pub const UNKNOWN_CATEGORY: &str = "Неизвестный тип траты.";
pub const UNKNOWN_CURRENCY: &str = "Неизвестная валюта. Допустимы: myr, thb, vnd.";
pub const PAYMENT_RECORDED: &str = "Трата записана!";
pub const PAYMENT_FAILED: &str = "Ошибка при записи траты.";
pub const NO_EXPENSES: &str = "Нет трат за указанный период.";
pub const UNKNOWN_COMMAND: &str = "Неизвестная команда.";

/// Map an error to the text shown to the user.
pub fn error_reply(err: &AppError) -> &'static str {
    match err {
        AppError::ArgumentCount { .. } => PAYMENT_USAGE,
        AppError::InvalidCategory(_) => UNKNOWN_CATEGORY,
        AppError::InvalidCurrency(_) => UNKNOWN_CURRENCY,
        AppError::InvalidAmount(_) => PAYMENT_FAILED,
        AppError::UnknownCommand(_) => UNKNOWN_COMMAND,
    }
}

/// Run one command for a user and produce the reply text.
pub async fn execute(
    service: &ExpenseService,
    user: UserId,
    command: Command,
    now: DateTime<Utc>,
) -> String {
    match command {
        Command::Start => GREETING.to_string(),
        Command::Payment(args) => {
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            match service.record_payment(user, &args, now).await {
                Ok(_) => PAYMENT_RECORDED.to_string(),
                Err(err @ AppError::InvalidAmount(_)) => {
                    error!(user, error = %err, "failed to record expense");
                    error_reply(&err).to_string()
                }
                Err(err) => {
                    warn!(user, error = %err, "payment rejected");
                    error_reply(&err).to_string()
                }
            }
        }
        Command::Payout(period) => match service.payout(user, period, now).await {
            Some(report) => render_report(&report),
            None => NO_EXPENSES.to_string(),
        },
    }
}

/// Parse raw message text and run it. `None` means the text gets no reply.
/// `bot_name` is the username commands must be addressed to, if known.
pub async fn handle_text(
    service: &ExpenseService,
    user: UserId,
    text: &str,
    bot_name: Option<&str>,
    now: DateTime<Utc>,
) -> Option<String> {
    match Command::parse(text, bot_name) {
        Ok(Some(command)) => Some(execute(service, user, command, now).await),
        Ok(None) => None,
        Err(err) => {
            warn!(user, error = %err, "command rejected");
            Some(error_reply(&err).to_string())
        }
    }
}
