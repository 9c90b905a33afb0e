//! Sorting and pagination of the transactions table.
//!
//! Everything here is a pure function of the full transaction list and a
//! [`TableState`]; the HTML layer only renders what [`table_view`] returns.

use crate::domain::prelude::*;
use std::cmp::Ordering;

pub mod format;
pub mod templates;

/// Rows shown per page.
pub const PAGE_SIZE: usize = 5;

/// Columns the table can be sorted by.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortColumn {
    #[default]
    TransactionDate,
    Customer,
    Email,
    Bike,
    TotalCost,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        Self::TransactionDate,
        Self::Customer,
        Self::Email,
        Self::Bike,
        Self::TotalCost,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransactionDate => "transaction_date",
            Self::Customer => "customer",
            Self::Email => "email",
            Self::Bike => "bike",
            Self::TotalCost => "total_cost",
        }
    }

    /// Compares two transactions by this column's sort key.
    ///
    /// Text columns compare case-insensitively, cost compares numerically
    /// and date compares by calendar value.
    ///
    pub fn compare(&self, a: &Transaction, b: &Transaction) -> Ordering {
        match self {
            Self::TransactionDate => a.transaction_date.cmp(&b.transaction_date),
            Self::Customer => a
                .customer
                .full_name()
                .to_lowercase()
                .cmp(&b.customer.full_name().to_lowercase()),
            Self::Email => a
                .customer
                .email
                .to_lowercase()
                .cmp(&b.customer.email.to_lowercase()),
            Self::Bike => a.bike.label().to_lowercase().cmp(&b.bike.label().to_lowercase()),
            Self::TotalCost => a.total_cost.total_cmp(&b.total_cost),
        }
    }
}

impl std::str::FromStr for SortColumn {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "transaction_date" => Ok(Self::TransactionDate),
            "customer" => Ok(Self::Customer),
            "email" => Ok(Self::Email),
            "bike" => Ok(Self::Bike),
            "total_cost" => Ok(Self::TotalCost),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

impl std::str::FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(()),
        }
    }
}

/// What the user picked: sort column, direction and page (1-based).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableState {
    pub column: SortColumn,
    pub direction: SortDirection,
    pub page: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            column: SortColumn::default(),
            direction: SortDirection::default(),
            page: 1,
        }
    }
}

impl TableState {
    /// Applies a click on a column header.
    ///
    /// The active column flips direction, any other column becomes active in
    /// ascending order. Either way the view goes back to page 1.
    ///
    pub fn toggle_sort(&mut self, column: SortColumn) -> &Self {
        if self.column == column {
            self.direction = self.direction.reversed();
        } else {
            self.column = column;
            self.direction = SortDirection::Asc;
        }
        self.page = 1;
        self
    }

    /// Copy of the state after a click on `column`.
    pub fn toggled(&self, column: SortColumn) -> Self {
        let mut next = *self;
        next.toggle_sort(column);
        next
    }

    /// Moves to `page`, clamped to `[1, total_pages]`.
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> &Self {
        self.page = page.clamp(1, total_pages.max(1));
        self
    }

    pub fn next_page(&mut self, total_pages: usize) -> &Self {
        self.go_to_page(self.page.saturating_add(1), total_pages)
    }

    pub fn previous_page(&mut self, total_pages: usize) -> &Self {
        self.go_to_page(self.page.saturating_sub(1), total_pages)
    }

    pub fn with_page(&self, page: usize) -> Self {
        Self { page, ..*self }
    }
}

/// Returns the transactions ordered by `column` in `direction`.
///
/// The sort is stable: rows with equal keys keep their input order in both
/// directions.
///
pub fn sort_transactions(
    transactions: &[Transaction],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<&Transaction> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| {
        let ordering = column.compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Number of pages needed for `total` rows.
pub fn total_pages(total: usize) -> usize {
    total.div_ceil(PAGE_SIZE)
}

/// One page of the sorted table plus the numbers needed to describe it.
///
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: Vec<&'a Transaction>,
    /// Current page, 1-based and already clamped.
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
    /// Index of the first row shown.
    pub start: usize,
    /// Index one past the last row shown.
    pub end: usize,
}

impl PageView<'_> {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Cuts page `page` out of an already sorted list.
///
pub fn paginate<'a>(sorted: Vec<&'a Transaction>, page: usize) -> PageView<'a> {
    let total = sorted.len();
    let total_pages = total_pages(total);
    let page = page.clamp(1, total_pages.max(1));

    let start = ((page - 1) * PAGE_SIZE).min(total);
    let end = (start + PAGE_SIZE).min(total);
    let rows = sorted[start..end].to_vec();

    PageView {
        rows,
        page,
        total_pages,
        total,
        start,
        end,
    }
}

/// Sorts and paginates `transactions` for `state`.
///
pub fn table_view<'a>(transactions: &'a [Transaction], state: &TableState) -> PageView<'a> {
    let sorted = sort_transactions(transactions, state.column, state.direction);
    paginate(sorted, state.page)
}
