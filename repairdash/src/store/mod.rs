use crate::domain::prelude::*;
use async_trait::async_trait;
use std::cmp::Reverse;

pub mod postgres;
pub mod rows;

pub use postgres::PgTransactionStore;
pub use rows::{RowDate, TransactionRow};

/// Errors raised while reading transactions from a store.
///
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("transactions query failed: {0}")]
    Query(#[from] sqlx::Error),

    #[error("transaction {transaction_id} has malformed {field}: {value:?}")]
    Malformed {
        transaction_id: i32,
        field: &'static str,
        value: String,
    },
}

/// Read side of the relational store.
///
/// Implementations run the transactions ⋈ customers ⋈ bikes inner join and
/// hand back the flat rows, most recent first. Rows lacking a customer or a
/// bike never show up.
///
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn fetch_rows(&self) -> Result<Vec<TransactionRow>, StoreError>;
}

/// Lists every repair transaction, most recent first.
///
/// Ties on the date are broken by the highest transaction id, so the order
/// does not depend on how the store happens to lay out its rows. A single
/// malformed row fails the whole listing.
///
pub async fn list_all_transactions(
    store: &dyn TransactionStore,
) -> Result<Vec<Transaction>, StoreError> {
    let rows = store.fetch_rows().await?;
    tracing::debug!(rows = rows.len(), "fetched transaction rows");

    let mut transactions = rows
        .into_iter()
        .map(TransactionRow::normalize)
        .collect::<Result<Vec<_>, _>>()?;

    transactions.sort_by_key(|t| Reverse((t.transaction_date, t.transaction_id)));
    Ok(transactions)
}
