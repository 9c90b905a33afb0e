pub mod prelude {
    pub use super::transactions::{Bike, Customer, Transaction};
}

pub mod transactions {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};

    /// Customer who brought a bike in for repair.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct Customer {
        pub id: i32,
        pub first_name: String,
        pub last_name: String,
        pub email: String,
        pub phone_number: Option<String>,
    }

    impl Customer {
        /// First and last name joined by a single space.
        pub fn full_name(&self) -> String {
            format!("{} {}", self.first_name, self.last_name)
        }
    }

    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct Bike {
        pub id: i32,
        pub make: String,
        pub model: String,
    }

    impl Bike {
        pub fn label(&self) -> String {
            format!("{} {}", self.make, self.model)
        }
    }

    /// Domain model for a repair Transaction.
    ///
    /// Customer and bike are embedded by value, exactly as they came out of
    /// the join. `transaction_date` serializes as `YYYY-MM-DD` and
    /// `total_cost` as a plain JSON number.
    ///
    #[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
    pub struct Transaction {
        pub transaction_id: i32,
        pub transaction_date: NaiveDate,
        pub total_cost: f64,
        pub customer: Customer,
        pub bike: Bike,
    }
}
