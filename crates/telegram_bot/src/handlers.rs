use engine::{EngineError, HISTORY_LIMIT, Ledger, TransactionStore};
use teloxide::{prelude::*, types::ParseMode};

use crate::{
    AppContext,
    commands::Command,
    parsing::{ParseError, parse_entry},
    ui::{self, Reply},
};

pub(crate) async fn handle_message(bot: Bot, msg: Message, ctx: AppContext) -> ResponseResult<()> {
    let Some(from) = msg.from.as_ref() else {
        return Ok(());
    };
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let Ok(user_id) = i64::try_from(from.id.0) else {
        tracing::warn!("telegram user id {} out of range", from.id.0);
        return Ok(());
    };

    let Some(reply) = respond(&ctx.ledger, user_id, Command::parse(text)).await else {
        return Ok(());
    };

    let request = bot.send_message(msg.chat.id, reply.text);
    if reply.html {
        request.parse_mode(ParseMode::Html).await?;
    } else {
        request.await?;
    }

    Ok(())
}

/// Runs `command` for `user_id` and returns what to answer, if anything.
pub(crate) async fn respond<S: TransactionStore>(
    ledger: &Ledger<S>,
    user_id: i64,
    command: Command,
) -> Option<Reply> {
    match command {
        Command::Start => Some(ui::render_start()),
        Command::Wallet => Some(match ledger.balance(user_id).await {
            Ok(balance) => ui::render_balance(balance),
            Err(err) => {
                tracing::error!("failed to compute balance for user {user_id}: {err}");
                Reply::plain(ui::GENERIC_ERROR)
            }
        }),
        Command::History => Some(match ledger.history(user_id, HISTORY_LIMIT).await {
            Ok(history) => ui::render_history(&history),
            Err(err) => {
                tracing::error!("failed to load history for user {user_id}: {err}");
                Reply::plain(ui::GENERIC_ERROR)
            }
        }),
        Command::Delete(None) => Some(Reply::plain(ui::DELETE_USAGE)),
        Command::Delete(Some(index)) => Some(match ledger.delete_at(user_id, index).await {
            Ok(deleted) => ui::render_deleted(&deleted),
            Err(EngineError::InvalidIndex { .. }) => Reply::plain(ui::INVALID_INDEX),
            Err(err) => {
                tracing::error!("failed to delete #{index} for user {user_id}: {err}");
                Reply::plain(ui::DELETE_FAILED)
            }
        }),
        Command::TransactionAttempt(text) => {
            let entry = match parse_entry(&text) {
                Ok(Some(entry)) => entry,
                Ok(None) => return None,
                Err(ParseError::InvalidAmount) => return Some(Reply::plain(ui::INVALID_AMOUNT)),
            };
            Some(
                match ledger
                    .record(user_id, entry.amount, entry.kind, &entry.note)
                    .await
                {
                    Ok(tx) => ui::render_recorded(&tx),
                    Err(err) => {
                        tracing::error!("failed to store transaction for user {user_id}: {err}");
                        Reply::plain(ui::SAVE_FAILED)
                    }
                },
            )
        }
    }
}
