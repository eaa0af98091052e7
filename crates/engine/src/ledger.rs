//! Balance and history views over a [`TransactionStore`].

use crate::{
    EngineError, ResultEngine, TransactionStore,
    transactions::{NewTransaction, Transaction, TransactionKind},
};

/// How many transactions the history view shows, and therefore the range of
/// positional indices accepted by [`Ledger::delete_at`].
pub const HISTORY_LIMIT: u64 = 10;

#[derive(Clone, Debug)]
pub struct Ledger<S> {
    store: S,
}

impl<S: TransactionStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Records a transaction dated now.
    pub async fn record(
        &self,
        user_id: i64,
        amount: i64,
        kind: TransactionKind,
        note: &str,
    ) -> ResultEngine<Transaction> {
        self.store
            .create(NewTransaction::new(user_id, amount, kind, note))
            .await
    }

    /// Total income minus total expense.
    pub async fn balance(&self, user_id: i64) -> ResultEngine<i64> {
        let income = self
            .store
            .sum_by_type(user_id, TransactionKind::Income)
            .await?;
        let expense = self
            .store
            .sum_by_type(user_id, TransactionKind::Expense)
            .await?;
        income
            .checked_sub(expense)
            .ok_or_else(|| EngineError::InvalidAmount("balance out of range".to_string()))
    }

    /// Most recent transactions, newest first.
    pub async fn history(&self, user_id: i64, limit: u64) -> ResultEngine<Vec<Transaction>> {
        self.store.list_recent(user_id, limit).await
    }

    /// Deletes the transaction at the 1-based `index` of the current history.
    ///
    /// The history is recomputed on every call, so the index refers to
    /// whatever sits at that position right now.
    pub async fn delete_at(&self, user_id: i64, index: usize) -> ResultEngine<Transaction> {
        let mut history = self.history(user_id, HISTORY_LIMIT).await?;
        if index == 0 || index > history.len() {
            return Err(EngineError::InvalidIndex {
                index,
                len: history.len(),
            });
        }

        let target = history.swap_remove(index - 1);
        if !self.store.delete_by_id(user_id, target.id).await? {
            return Err(EngineError::KeyNotFound(target.id.to_string()));
        }
        Ok(target)
    }
}
