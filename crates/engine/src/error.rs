//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidAmount`] thrown when a transaction would be stored with a
//!   negative amount or an unknown kind.
//! - [`InvalidIndex`] thrown when a positional index falls outside the
//!   current history.
//! - [`KeyNotFound`] thrown when an item is not found.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidIndex`]: EngineError::InvalidIndex
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid index {index}: history has {len} entries")]
    InvalidIndex { index: usize, len: usize },
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (
                Self::InvalidIndex { index: a, len: la },
                Self::InvalidIndex { index: b, len: lb },
            ) => a == b && la == lb,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
