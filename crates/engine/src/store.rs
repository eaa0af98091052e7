use std::future::Future;

use sea_orm::{ConnectionTrait, QueryFilter, QueryOrder, QuerySelect, Statement, prelude::*};
use uuid::Uuid;

use crate::{
    Engine, ResultEngine,
    transactions::{self, NewTransaction, Transaction, TransactionKind},
};

/// Persistence seam for transactions.
///
/// Every operation is scoped to one user and is an independent unit of work.
pub trait TransactionStore: Send + Sync {
    /// Stores a new transaction and returns it with its assigned id.
    fn create(
        &self,
        draft: NewTransaction,
    ) -> impl Future<Output = ResultEngine<Transaction>> + Send;

    /// Up to `limit` transactions of `user_id`, newest first.
    fn list_recent(
        &self,
        user_id: i64,
        limit: u64,
    ) -> impl Future<Output = ResultEngine<Vec<Transaction>>> + Send;

    /// Sum of the amounts of one kind, `0` when there are none.
    fn sum_by_type(
        &self,
        user_id: i64,
        kind: TransactionKind,
    ) -> impl Future<Output = ResultEngine<i64>> + Send;

    /// Deletes a transaction owned by `user_id`. Returns whether a row was removed.
    fn delete_by_id(
        &self,
        user_id: i64,
        id: Uuid,
    ) -> impl Future<Output = ResultEngine<bool>> + Send;
}

impl TransactionStore for Engine {
    async fn create(&self, draft: NewTransaction) -> ResultEngine<Transaction> {
        let tx = Transaction::new(draft)?;
        transactions::ActiveModel::from(&tx)
            .insert(&self.database)
            .await?;
        tracing::debug!(
            "stored {} {} for user {}",
            tx.kind.as_str(),
            tx.amount,
            tx.user_id
        );
        Ok(tx)
    }

    async fn list_recent(&self, user_id: i64, limit: u64) -> ResultEngine<Vec<Transaction>> {
        let models: Vec<transactions::Model> = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .all(&self.database)
            .await?;

        models.into_iter().map(Transaction::try_from).collect()
    }

    async fn sum_by_type(&self, user_id: i64, kind: TransactionKind) -> ResultEngine<i64> {
        let stmt = Statement::from_sql_and_values(
            self.database.get_database_backend(),
            "SELECT COALESCE(SUM(amount), 0) AS sum \
             FROM transactions \
             WHERE user_id = ? AND kind = ?",
            [user_id.into(), kind.as_str().into()],
        );
        let row = self.database.query_one(stmt).await?;
        Ok(row.and_then(|r| r.try_get("", "sum").ok()).unwrap_or(0))
    }

    async fn delete_by_id(&self, user_id: i64, id: Uuid) -> ResultEngine<bool> {
        let res = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(id.to_string()))
            .filter(transactions::Column::UserId.eq(user_id))
            .exec(&self.database)
            .await?;
        tracing::debug!("deleted transaction {id} for user {user_id}");
        Ok(res.rows_affected > 0)
    }
}
