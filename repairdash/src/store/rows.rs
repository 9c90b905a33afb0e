use crate::domain::prelude::*;
use chrono::NaiveDate;

use super::StoreError;

/// Date column as handed back by a store.
///
/// Postgres decodes `DATE` into a calendar date, other stores (and fixtures)
/// may hand over a pre-formatted string instead.
///
#[derive(Debug, Clone, PartialEq)]
pub enum RowDate {
    Date(NaiveDate),
    Text(String),
}

impl From<NaiveDate> for RowDate {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for RowDate {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// One flat row of the transactions ⋈ customers ⋈ bikes join.
///
/// `total_cost` is the decimal text of the `NUMERIC` column, coerced into a
/// number by [`TransactionRow::normalize`].
///
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub transaction_id: i32,
    pub transaction_date: RowDate,
    pub total_cost: String,
    pub customer_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub bike_id: i32,
    pub make: String,
    pub model: String,
}

impl TransactionRow {
    /// Shapes a flat row into a nested [`Transaction`].
    ///
    /// Fails with [`StoreError::Malformed`] when the cost is not a finite
    /// decimal or the date is not a calendar date.
    ///
    pub fn normalize(self) -> Result<Transaction, StoreError> {
        let transaction_date = parse_date(self.transaction_id, self.transaction_date)?;
        let total_cost = parse_cost(self.transaction_id, &self.total_cost)?;

        Ok(Transaction {
            transaction_id: self.transaction_id,
            transaction_date,
            total_cost,
            customer: Customer {
                id: self.customer_id,
                first_name: self.first_name,
                last_name: self.last_name,
                email: self.email,
                phone_number: self.phone_number,
            },
            bike: Bike {
                id: self.bike_id,
                make: self.make,
                model: self.model,
            },
        })
    }
}

fn parse_date(transaction_id: i32, date: RowDate) -> Result<NaiveDate, StoreError> {
    match date {
        RowDate::Date(date) => Ok(date),
        RowDate::Text(text) => {
            // a full timestamp keeps only its calendar part
            let day = text.trim().split(['T', ' ']).next().unwrap_or_default();
            NaiveDate::parse_from_str(day, "%Y-%m-%d").map_err(|_| StoreError::Malformed {
                transaction_id,
                field: "transaction_date",
                value: text,
            })
        }
    }
}

fn parse_cost(transaction_id: i32, text: &str) -> Result<f64, StoreError> {
    match text.trim().parse::<f64>() {
        Ok(cost) if cost.is_finite() => Ok(cost),
        _ => Err(StoreError::Malformed {
            transaction_id,
            field: "total_cost",
            value: text.to_string(),
        }),
    }
}
