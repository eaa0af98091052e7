//! Bookkeeping engine.
//!
//! [`Engine`] persists transactions through `sea-orm` and implements
//! [`TransactionStore`]. [`Ledger`] composes a store into the balance and
//! history views used by the chat front-end.

use sea_orm::DatabaseConnection;

pub use error::EngineError;
pub use ledger::{HISTORY_LIMIT, Ledger};
pub use store::TransactionStore;
pub use transactions::{NewTransaction, Transaction, TransactionKind};

mod error;
mod ledger;
mod store;
mod transactions;

type ResultEngine<T> = Result<T, EngineError>;

#[derive(Clone, Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            database: self.database,
        }
    }
}
