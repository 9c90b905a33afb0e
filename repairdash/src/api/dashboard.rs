use crate::{
    core::prelude::*,
    store,
    view::{
        table_view,
        templates::{DashboardPage, Notice},
        TableState,
    },
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;

/// Query parameters of the dashboard page.
///
/// Kept as raw strings so a bad value falls back to its default instead of
/// rejecting the request.
///
#[derive(Deserialize, Debug, Default)]
pub struct DashboardParams {
    pub sort: Option<String>,
    pub dir: Option<String>,
    pub page: Option<String>,
}

impl DashboardParams {
    pub fn table_state(&self) -> TableState {
        let defaults = TableState::default();
        TableState {
            column: parse_or(self.sort.as_deref(), defaults.column),
            direction: parse_or(self.dir.as_deref(), defaults.direction),
            page: parse_or(self.page.as_deref(), defaults.page),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<&str>, default: T) -> T {
    value.and_then(|v| v.parse().ok()).unwrap_or(default)
}

/// `GET /`
///
/// Reads the transactions once per call, so every sort or page click is a
/// fresh snapshot of the store, and renders the requested page of the
/// sorted table. A failed read still renders the page, with a generic notice
/// and the empty state; the cause only goes to the logs.
///
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let table_state = params.table_state();

    let (transactions, notice) = match store::list_all_transactions(state.store.as_ref()).await {
        Ok(transactions) => (transactions, None),
        Err(err) => {
            tracing::error!(error = %err, "failed to load transactions for dashboard");
            let notice = Notice {
                title: "Failed to load transactions".to_string(),
                description: "Failed to fetch transactions".to_string(),
            };
            (Vec::new(), Some(notice))
        }
    };

    let view = table_view(&transactions, &table_state);
    let page = DashboardPage::new(&view, &table_state, notice);

    match state.templates.render_dashboard(&page) {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "failed to render dashboard");
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render dashboard").into_response()
        }
    }
}
