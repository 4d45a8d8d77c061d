use crate::application::AppError;
use crate::domain::Period;

/// A chat command resolved from message text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// Raw positional arguments; validated by the service.
    Payment(Vec<String>),
    Payout(Period),
}

impl Command {
    /// Parse message text such as `/payment fd 50 myr` or `/payout_day@my_bot`.
    ///
    /// `bot_name` is this bot's username. A command addressed to a different
    /// bot is skipped; with `None` any mention is accepted.
    ///
    /// Returns `Ok(None)` for plain text, for commands without a handler and
    /// for commands meant for another bot.
    /// A `/payout_*` command with an unrecognized period is an error.
    pub fn parse(text: &str, bot_name: Option<&str>) -> Result<Option<Command>, AppError> {
        let mut parts = text.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let Some(name) = head.strip_prefix('/') else {
            return Ok(None);
        };

        // Group chats address commands as /name@bot_username
        let (name, mention) = match name.split_once('@') {
            Some((name, mention)) => (name, Some(mention)),
            None => (name, None),
        };
        if let (Some(mention), Some(bot_name)) = (mention, bot_name) {
            if !mention.eq_ignore_ascii_case(bot_name.trim_start_matches('@')) {
                return Ok(None);
            }
        }
        let name = name.to_lowercase();
        let args: Vec<String> = parts.map(str::to_string).collect();

        match name.as_str() {
            "start" => Ok(Some(Command::Start)),
            "payment" => Ok(Some(Command::Payment(args))),
            other if other.starts_with("payout_") => Period::from_command(other)
                .map(|period| Some(Command::Payout(period)))
                .ok_or_else(|| AppError::UnknownCommand(other.to_string())),
            _ => Ok(None),
        }
    }

    /// Names and descriptions for the client-side command menu.
    pub fn descriptions() -> Vec<(String, &'static str)> {
        let mut commands = vec![
            ("start".to_string(), "Начать работу с ботом"),
            ("payment".to_string(), "Записать трату: <тип> <сумма> <валюта>"),
        ];
        for period in Period::ALL {
            let description = match period {
                Period::Day => "Траты за день",
                Period::Week => "Траты за неделю",
                Period::Month => "Траты за 30 дней",
                Period::All => "Траты за год",
            };
            commands.push((period.command(), description));
        }
        commands
    }
}
