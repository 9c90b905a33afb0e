use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use repairdash::{
    api,
    core::prelude::*,
    store::{StoreError, TransactionRow, TransactionStore},
    view::templates::Templates,
};
use std::sync::Arc;
use tower::ServiceExt;

/// Stands in for the Postgres store.
enum FakeStore {
    Rows(Vec<TransactionRow>),
    ConnectionRefused,
}

#[async_trait]
impl TransactionStore for FakeStore {
    async fn fetch_rows(&self) -> Result<Vec<TransactionRow>, StoreError> {
        match self {
            FakeStore::Rows(rows) => Ok(rows.clone()),
            FakeStore::ConnectionRefused => Err(StoreError::Query(sqlx::Error::Io(
                std::io::Error::new(
                    std::io::ErrorKind::ConnectionRefused,
                    "could not reach db-primary.internal:5432 as user app_rw",
                ),
            ))),
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn row(
    transaction_id: i32,
    date: &str,
    cost: &str,
    customer_id: i32,
    first_name: &str,
    last_name: &str,
    bike_id: i32,
    make: &str,
    model: &str,
) -> TransactionRow {
    TransactionRow {
        transaction_id,
        transaction_date: date.into(),
        total_cost: cost.to_string(),
        customer_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@email.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        phone_number: Some(format!("713555010{customer_id}")),
        bike_id,
        make: make.to_string(),
        model: model.to_string(),
    }
}

fn fake_rows() -> Vec<TransactionRow> {
    vec![
        row(10, "2026-01-28", "55.00", 4, "Sophie", "Kim", 5, "Santa Cruz", "Hightower"),
        row(9, "2026-01-25", "180.00", 5, "Daniel", "Reed", 4, "Cannondale", "Synapse"),
        row(8, "2026-01-22", "95.75", 2, "Maria", "Lopez", 3, "Giant", "Defy"),
    ]
}

fn build_app(store: FakeStore) -> axum::Router {
    let state = AppState::new(Arc::new(store), Templates::new().unwrap());
    api::router(state)
}

async fn get(app: axum::Router, uri: &str) -> axum::http::Response<Body> {
    let req = Request::get(uri).body(Body::empty()).unwrap();
    app.oneshot(req).await.unwrap()
}

async fn body_json(resp: axum::http::Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_text(resp: axum::http::Response<Body>) -> String {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn returns_transactions_in_nested_shape() {
    let resp = get(build_app(FakeStore::Rows(fake_rows())), "/api/transactions").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let body = json.as_array().unwrap();
    assert_eq!(body.len(), 3);

    let first = &body[0];
    for key in [
        "transaction_id",
        "transaction_date",
        "total_cost",
        "customer",
        "bike",
    ] {
        assert!(first.get(key).is_some(), "missing {key}");
    }
    for key in ["id", "first_name", "last_name", "email", "phone_number"] {
        assert!(first["customer"].get(key).is_some(), "missing customer.{key}");
    }
    for key in ["id", "make", "model"] {
        assert!(first["bike"].get(key).is_some(), "missing bike.{key}");
    }

    assert_eq!(first["transaction_id"], 10);
    assert_eq!(first["customer"]["id"], 4);
    assert_eq!(first["customer"]["phone_number"], "7135550104");
    assert_eq!(first["bike"]["make"], "Santa Cruz");
}

#[tokio::test]
async fn total_cost_is_a_number() {
    let resp = get(build_app(FakeStore::Rows(fake_rows())), "/api/transactions").await;
    let json = body_json(resp).await;

    let costs: Vec<f64> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|tx| tx["total_cost"].as_f64().expect("total_cost is a number"))
        .collect();
    assert_eq!(costs, vec![55.0, 180.0, 95.75]);
}

#[tokio::test]
async fn sorted_by_date_descending_whatever_the_row_order() {
    let mut rows = fake_rows();
    rows.reverse();
    rows.swap(0, 1);

    let resp = get(build_app(FakeStore::Rows(rows)), "/api/transactions").await;
    let json = body_json(resp).await;

    let dates: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|tx| tx["transaction_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2026-01-28", "2026-01-25", "2026-01-22"]);
}

#[tokio::test]
async fn query_failure_returns_generic_500() {
    let resp = get(build_app(FakeStore::ConnectionRefused), "/api/transactions").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({ "error": "Failed to fetch transactions" })
    );
}

#[tokio::test]
async fn malformed_cost_returns_generic_500() {
    let mut rows = fake_rows();
    rows[1].total_cost = "not-a-number".to_string();

    let resp = get(build_app(FakeStore::Rows(rows)), "/api/transactions").await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(resp).await;
    assert_eq!(
        json,
        serde_json::json!({ "error": "Failed to fetch transactions" })
    );
}

#[tokio::test]
async fn no_rows_returns_empty_array() {
    let resp = get(build_app(FakeStore::Rows(vec![])), "/api/transactions").await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn dashboard_renders_table() {
    let resp = get(build_app(FakeStore::Rows(fake_rows())), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Rice Bikes Repair Dashboard"));
    assert!(html.contains("Showing 1-3 of 3"));
    assert!(html.contains("Sophie Kim"));
    assert!(html.contains("Jan 28, 2026"));
    assert!(html.contains("$95.75"));
    assert!(!html.contains("No transactions found"));
}

#[tokio::test]
async fn dashboard_sorts_by_cost_descending() {
    let resp = get(
        build_app(FakeStore::Rows(fake_rows())),
        "/?sort=total_cost&dir=desc",
    )
    .await;
    let html = body_text(resp).await;

    let daniel = html.find("Daniel Reed").unwrap();
    let maria = html.find("Maria Lopez").unwrap();
    let sophie = html.find("Sophie Kim").unwrap();
    assert!(daniel < maria && maria < sophie);
}

#[tokio::test]
async fn dashboard_second_page_of_six() {
    let mut rows = fake_rows();
    rows.extend([
        row(7, "2026-01-20", "40.00", 1, "Nina", "Abbott", 1, "Trek", "Domane"),
        row(6, "2026-01-18", "25.00", 3, "Omar", "Haddad", 2, "Specialized", "Allez"),
        row(5, "2026-01-15", "60.00", 6, "Lena", "Berg", 6, "Cervelo", "R5"),
    ]);

    let resp = get(build_app(FakeStore::Rows(rows)), "/?page=2").await;
    let html = body_text(resp).await;

    // default order is date ascending, so only the newest row is left
    assert!(html.contains("Showing 6-6 of 6"));
    assert!(html.contains("Sophie Kim"));
    assert!(!html.contains("Lena Berg"));
}

#[tokio::test]
async fn dashboard_empty_state() {
    let resp = get(build_app(FakeStore::Rows(vec![])), "/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("No transactions found"));
    assert!(!html.contains("<table"));
}

#[tokio::test]
async fn dashboard_shows_notice_when_store_fails() {
    let resp = get(build_app(FakeStore::ConnectionRefused), "/?sort=bogus&page=abc").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let html = body_text(resp).await;
    assert!(html.contains("Failed to load transactions"));
    assert!(html.contains("Failed to fetch transactions"));
    assert!(!html.contains("db-primary.internal"));
    assert!(!html.contains("app_rw"));
    assert!(html.contains("No transactions found"));
}
