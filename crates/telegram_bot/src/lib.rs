//! Telegram bot.
//!
//! Inbound text is parsed into a [`Command`](commands::Command) and answered
//! from the [`Ledger`]; everything that is not a command is tried as a quick
//! entry like `+5tr lương` or `20k ăn sáng`.

use std::sync::Arc;

use engine::{Engine, Ledger};
use teloxide::{prelude::*, utils::command::BotCommands};

mod commands;
mod handlers;
mod parsing;
mod ui;

use commands::MenuCommands;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppContext {
    ledger: Arc<Ledger<Engine>>,
}

impl AppContext {
    pub fn new(engine: Engine) -> Self {
        Self {
            ledger: Arc::new(Ledger::new(engine)),
        }
    }
}

pub struct Bot {
    token: String,
    context: AppContext,
}

impl Bot {
    pub fn new(token: &str, engine: Engine) -> Result<Self, String> {
        if token.trim().is_empty() {
            return Err("missing telegram bot token".to_string());
        }

        Ok(Self {
            token: token.to_string(),
            context: AppContext::new(engine),
        })
    }

    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);

        if let Err(err) = bot.set_my_commands(MenuCommands::bot_commands()).await {
            tracing::warn!("failed to register bot commands: {err}");
        }

        let handler = dptree::entry()
            .branch(Update::filter_message().endpoint(handlers::handle_message));

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![self.context.clone()])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default, Debug)]
pub struct BotBuilder {
    token: String,
    engine: Option<Engine>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    pub fn engine(mut self, engine: Engine) -> BotBuilder {
        self.engine = Some(engine);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");
        let engine = self
            .engine
            .ok_or_else(|| "missing engine for telegram bot".to_string())?;
        Bot::new(&self.token, engine)
    }
}
