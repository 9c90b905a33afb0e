use async_trait::async_trait;
use futures::TryStreamExt;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions, PgRow},
    FromRow, PgPool, Row,
};

use super::{RowDate, StoreError, TransactionRow, TransactionStore};

/// The three-way inner join behind the transactions listing.
///
/// `total_cost` is read as text so the decimal is coerced in one place,
/// during normalization.
///
const LIST_TRANSACTIONS: &str = r#"
    SELECT
        rt.transaction_id,
        rt.transaction_date,
        rt.total_cost::TEXT AS total_cost,
        c.customer_id,
        c.first_name,
        c.last_name,
        c.email,
        c.phone_number,
        b.bike_id,
        b.make,
        b.model
    FROM repair_transactions rt
    JOIN customers c ON rt.customer_id = c.customer_id
    JOIN bikes b ON rt.bike_id = b.bike_id
    ORDER BY rt.transaction_date DESC, rt.transaction_id DESC
"#;

impl<'r> FromRow<'r, PgRow> for TransactionRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            transaction_id: row.try_get("transaction_id")?,
            transaction_date: RowDate::Date(row.try_get("transaction_date")?),
            total_cost: row.try_get("total_cost")?,
            customer_id: row.try_get("customer_id")?,
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            phone_number: row.try_get("phone_number")?,
            bike_id: row.try_get("bike_id")?,
            make: row.try_get("make")?,
            model: row.try_get("model")?,
        })
    }
}

/// Postgres-backed [`TransactionStore`].
///
/// Owns a clone of the process-wide pool; cloning the store is cheap.
///
#[derive(Clone, Debug)]
pub struct PgTransactionStore {
    pool: PgPool,
}

impl PgTransactionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the pool without opening a connection.
    ///
    /// Connections are established on first use, so an unreachable database
    /// shows up as a failed request rather than a failed startup.
    ///
    pub fn connect_lazy(options: PgConnectOptions) -> Self {
        let pool = PgPoolOptions::new().connect_lazy_with(options);
        Self::new(pool)
    }
}

#[async_trait]
impl TransactionStore for PgTransactionStore {
    async fn fetch_rows(&self) -> Result<Vec<TransactionRow>, StoreError> {
        let rows = sqlx::query_as::<_, TransactionRow>(LIST_TRANSACTIONS)
            .fetch(&self.pool)
            .try_collect::<Vec<_>>()
            .await?;

        Ok(rows)
    }
}
