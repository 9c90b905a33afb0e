use super::{
    format::{format_currency, format_date},
    PageView, SortColumn, SortDirection, TableState,
};
use handlebars::{Handlebars, RenderError, TemplateError};
use serde::Serialize;

const DASHBOARD: &str = "dashboard";

/// Compiled HTML templates, built once at startup.
///
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(
            DASHBOARD,
            include_str!("../../templates/dashboard.hbs"),
        )?;
        Ok(Self { registry })
    }

    pub fn render_dashboard(&self, page: &DashboardPage) -> Result<String, RenderError> {
        self.registry.render(DASHBOARD, page)
    }
}

/// Everything the dashboard template needs.
///
#[derive(Serialize, Debug)]
pub struct DashboardPage {
    pub title: &'static str,
    pub notice: Option<Notice>,
    /// `None` renders the "no transactions" card.
    pub table: Option<TableContext>,
}

/// Non-blocking message shown above the table.
#[derive(Serialize, Debug)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

#[derive(Serialize, Debug)]
pub struct TableContext {
    pub caption: String,
    pub headers: Vec<HeaderContext>,
    pub rows: Vec<RowContext>,
    pub pagination: Option<PaginationContext>,
}

#[derive(Serialize, Debug)]
pub struct HeaderContext {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
    pub active: bool,
    pub numeric: bool,
}

#[derive(Serialize, Debug)]
pub struct RowContext {
    pub date: String,
    pub customer: String,
    pub email: String,
    pub bike: String,
    pub cost: String,
    pub striped: bool,
}

#[derive(Serialize, Debug)]
pub struct PaginationContext {
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub pages: Vec<PageLink>,
}

#[derive(Serialize, Debug)]
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

impl DashboardPage {
    pub const TITLE: &'static str = "Rice Bikes Repair Dashboard";

    /// Builds the page for one sorted and paginated view.
    ///
    pub fn new(view: &PageView<'_>, state: &TableState, notice: Option<Notice>) -> Self {
        let table = (!view.is_empty()).then(|| TableContext::new(view, state));
        Self {
            title: Self::TITLE,
            notice,
            table,
        }
    }
}

impl TableContext {
    fn new(view: &PageView<'_>, state: &TableState) -> Self {
        let current = state.with_page(view.page);

        let headers = SortColumn::ALL
            .iter()
            .map(|&column| HeaderContext {
                label: header_label(column),
                href: href(&current.toggled(column)),
                indicator: match (column == current.column, current.direction) {
                    (false, _) => "⇅",
                    (true, SortDirection::Asc) => "▲",
                    (true, SortDirection::Desc) => "▼",
                },
                active: column == current.column,
                numeric: column == SortColumn::TotalCost,
            })
            .collect();

        let rows = view
            .rows
            .iter()
            .enumerate()
            .map(|(i, t)| RowContext {
                date: format_date(t.transaction_date),
                customer: t.customer.full_name(),
                email: t.customer.email.clone(),
                bike: t.bike.label(),
                cost: format_currency(t.total_cost),
                striped: i % 2 == 0,
            })
            .collect();

        let pagination = (view.total_pages > 1).then(|| PaginationContext {
            previous_href: view
                .has_previous()
                .then(|| href(&current.with_page(view.page - 1))),
            next_href: view
                .has_next()
                .then(|| href(&current.with_page(view.page + 1))),
            pages: (1..=view.total_pages)
                .map(|number| PageLink {
                    number,
                    href: href(&current.with_page(number)),
                    current: number == view.page,
                })
                .collect(),
        });

        Self {
            caption: format!("Showing {}-{} of {}", view.start + 1, view.end, view.total),
            headers,
            rows,
            pagination,
        }
    }
}

fn header_label(column: SortColumn) -> &'static str {
    match column {
        SortColumn::TransactionDate => "Date",
        SortColumn::Customer => "Customer Name",
        SortColumn::Email => "Email",
        SortColumn::Bike => "Bike",
        SortColumn::TotalCost => "Cost",
    }
}

/// Query string that reproduces `state` on the dashboard.
pub fn href(state: &TableState) -> String {
    format!(
        "?sort={}&dir={}&page={}",
        state.column.as_str(),
        state.direction.as_str(),
        state.page
    )
}
