//! Command structs

use teloxide::utils::command::BotCommands;

/// What an inbound text message asks the bot to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Start,
    Wallet,
    History,
    /// 1-based position in the history; `None` when the argument is missing
    /// or not a number.
    Delete(Option<usize>),
    TransactionAttempt(String),
}

impl Command {
    pub(crate) fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Self::TransactionAttempt(trimmed.to_string());
        };

        let (word, arg) = match rest.split_once(char::is_whitespace) {
            Some((word, arg)) => (word, arg.trim()),
            None => (rest, ""),
        };
        // In groups Telegram appends the bot name: `/wallet@DeltaBot`.
        let name = word.split_once('@').map_or(word, |(name, _)| name);

        match name {
            "start" | "help" => Self::Start,
            "wallet" => Self::Wallet,
            "history" => Self::History,
            "delete" => Self::Delete(parse_index(arg)),
            _ => Self::TransactionAttempt(trimmed.to_string()),
        }
    }
}

fn parse_index(arg: &str) -> Option<usize> {
    let token = arg.split_whitespace().next()?;
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Too many digits still is a number, just one no history can reach.
    Some(token.parse().unwrap_or(usize::MAX))
}

/// Commands shown in the Telegram menu.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub(crate) enum MenuCommands {
    #[command(description = "Hiển thị hướng dẫn sử dụng")]
    Start,
    #[command(description = "Xem số dư tài khoản")]
    Wallet,
    #[command(description = "Xem lịch sử giao dịch")]
    History,
    #[command(description = "Xóa giao dịch")]
    Delete,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/help"), Command::Start);
        assert_eq!(Command::parse("/wallet"), Command::Wallet);
        assert_eq!(Command::parse("/history"), Command::History);
        assert_eq!(Command::parse("/delete 3"), Command::Delete(Some(3)));
    }

    #[test]
    fn ignores_bot_suffix_and_padding() {
        assert_eq!(Command::parse("  /wallet@DeltaBot  "), Command::Wallet);
        assert_eq!(
            Command::parse("/delete@DeltaBot   2"),
            Command::Delete(Some(2))
        );
    }

    #[test]
    fn delete_without_valid_index() {
        assert_eq!(Command::parse("/delete"), Command::Delete(None));
        assert_eq!(Command::parse("/delete abc"), Command::Delete(None));
        assert_eq!(Command::parse("/delete -1"), Command::Delete(None));
        assert_eq!(Command::parse("/delete 0"), Command::Delete(Some(0)));
    }

    #[test]
    fn huge_index_saturates() {
        assert_eq!(
            Command::parse("/delete 99999999999999999999999"),
            Command::Delete(Some(usize::MAX))
        );
    }

    #[test]
    fn everything_else_is_a_transaction_attempt() {
        assert_eq!(
            Command::parse(" 20k ăn sáng "),
            Command::TransactionAttempt("20k ăn sáng".to_string())
        );
        assert_eq!(
            Command::parse("/unknown 5"),
            Command::TransactionAttempt("/unknown 5".to_string())
        );
    }

    #[test]
    fn menu_lists_the_four_commands() {
        let names: Vec<String> = MenuCommands::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(names, vec!["start", "wallet", "history", "delete"]);
    }
}
