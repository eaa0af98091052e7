//! Transaction primitives.
//!
//! A `Transaction` is a single income or expense recorded by a chat user.
//! The amount is always non-negative: the direction lives in
//! [`TransactionKind`].

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl TryFrom<&str> for TransactionKind {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidAmount(format!(
                "invalid transaction kind: {other}"
            ))),
        }
    }
}

/// A transaction that has not been stored yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTransaction {
    pub user_id: i64,
    pub amount: i64,
    pub kind: TransactionKind,
    pub note: String,
    pub date: DateTime<Utc>,
}

impl NewTransaction {
    /// Draft dated now.
    pub fn new(user_id: i64, amount: i64, kind: TransactionKind, note: impl Into<String>) -> Self {
        Self {
            user_id,
            amount,
            kind,
            note: note.into(),
            date: Utc::now(),
        }
    }

    /// Overrides the date of the draft.
    pub fn at(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub user_id: i64,
    pub amount: i64,
    pub kind: TransactionKind,
    pub note: String,
    pub date: DateTime<Utc>,
}

impl Transaction {
    pub fn new(draft: NewTransaction) -> ResultEngine<Self> {
        if draft.amount < 0 {
            return Err(EngineError::InvalidAmount(
                "amount must be >= 0".to_string(),
            ));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            user_id: draft.user_id,
            amount: draft.amount,
            kind: draft.kind,
            note: draft.note,
            date: draft.date,
        })
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: i64,
    pub amount: i64,
    pub kind: String,
    pub note: String,
    pub date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            user_id: ActiveValue::Set(tx.user_id),
            amount: ActiveValue::Set(tx.amount),
            kind: ActiveValue::Set(tx.kind.as_str().to_string()),
            note: ActiveValue::Set(tx.note.clone()),
            date: ActiveValue::Set(tx.date),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: Uuid::parse_str(&model.id)
                .map_err(|_| EngineError::KeyNotFound("transaction not exists".to_string()))?,
            user_id: model.user_id,
            amount: model.amount,
            kind: TransactionKind::try_from(model.kind.as_str())?,
            note: model.note,
            date: model.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_amount() {
        let draft = NewTransaction::new(1, -5, TransactionKind::Expense, "x");
        let err = Transaction::new(draft).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidAmount("amount must be >= 0".to_string())
        );
    }

    #[test]
    fn zero_amount_is_accepted() {
        let tx = Transaction::new(NewTransaction::new(1, 0, TransactionKind::Income, "x")).unwrap();
        assert_eq!(tx.amount, 0);
    }

    #[test]
    fn kind_round_trips_through_text() {
        for kind in [TransactionKind::Income, TransactionKind::Expense] {
            assert_eq!(TransactionKind::try_from(kind.as_str()).unwrap(), kind);
        }
        assert!(TransactionKind::try_from("refund").is_err());
    }
}
