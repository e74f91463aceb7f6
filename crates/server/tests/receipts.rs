//! Endpoint tests for the receipt store.
//!
//! Each test drives the real router over an in-memory `SQLite` pool;
//! the table is created here because the production path assumes a
//! pre-existing schema.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, header};
use http_body_util::BodyExt;
use secrecy::SecretString;
use serde_json::{Value, json};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use nanocafe_server::config::ServerConfig;
use nanocafe_server::routes;
use nanocafe_server::state::AppState;

const CREATE_RECEIPTS: &str = "CREATE TABLE receipts (
    timestamp    TEXT NOT NULL,
    location     TEXT NOT NULL,
    delivery_fee TEXT NOT NULL,
    grand_total  TEXT NOT NULL,
    items        TEXT NOT NULL
)";

async fn test_pool() -> SqlitePool {
    // A single connection keeps the in-memory database alive and shared.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(CREATE_RECEIPTS).execute(&pool).await.unwrap();
    pool
}

fn test_app(pool: SqlitePool) -> Router {
    let config = ServerConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
    };
    Router::new()
        .merge(routes::routes())
        .with_state(AppState::new(config, pool))
}

async fn post_receipt(app: Router, body: &str) -> Value {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/receipts")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM receipts")
        .fetch_one(pool)
        .await
        .unwrap()
        .0
}

#[tokio::test]
async fn valid_submission_writes_one_row() {
    let pool = test_pool().await;
    let body = json!({
        "location": "Sto. Niño",
        "delivery_fee": 50,
        "grand_total": 290,
        "items": [{"name": "Latte", "priceValue": 120, "qty": 2}]
    });

    let ack = post_receipt(test_app(pool.clone()), &body.to_string()).await;
    assert_eq!(ack, json!({"success": true}));

    let (timestamp, location, delivery_fee, grand_total, items) =
        sqlx::query_as::<_, (String, String, String, String, String)>(
            "SELECT timestamp, location, delivery_fee, grand_total, items FROM receipts",
        )
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(location, "Sto. Niño");
    assert_eq!(delivery_fee, "50.00");
    assert_eq!(grand_total, "290.00");

    let items: Value = serde_json::from_str(&items).unwrap();
    assert_eq!(items[0]["name"], "Latte");
    assert_eq!(items[0]["qty"], 2);

    // Server-assigned timestamp, in the store's canonical layout.
    chrono::NaiveDateTime::parse_from_str(&timestamp, "%Y-%m-%d %H:%M:%S").unwrap();
}

#[tokio::test]
async fn string_money_fields_are_accepted() {
    let pool = test_pool().await;
    let body = json!({
        "location": "Poblacion",
        "delivery_fee": "50.00",
        "grand_total": "290.00",
        "items": []
    });

    let ack = post_receipt(test_app(pool.clone()), &body.to_string()).await;
    assert_eq!(ack["success"], true);

    let (fee, total) = sqlx::query_as::<_, (String, String)>(
        "SELECT delivery_fee, grand_total FROM receipts",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(fee, "50.00");
    assert_eq!(total, "290.00");
}

#[tokio::test]
async fn non_numeric_money_coerces_to_zero() {
    let pool = test_pool().await;
    let body = json!({
        "location": "Poblacion",
        "delivery_fee": "surprise me",
        "grand_total": null,
        "items": []
    });

    let ack = post_receipt(test_app(pool.clone()), &body.to_string()).await;
    assert_eq!(ack["success"], true);

    let (fee, total) = sqlx::query_as::<_, (String, String)>(
        "SELECT delivery_fee, grand_total FROM receipts",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(fee, "0.00");
    assert_eq!(total, "0.00");
}

#[tokio::test]
async fn unparseable_body_is_rejected_without_write() {
    let pool = test_pool().await;

    let ack = post_receipt(test_app(pool.clone()), "definitely not json").await;
    assert_eq!(ack, json!({"success": false, "error": "Invalid data"}));
    assert_eq!(row_count(&pool).await, 0);
}

#[tokio::test]
async fn missing_field_is_rejected_without_write() {
    let pool = test_pool().await;
    let body = json!({"location": "Poblacion", "delivery_fee": 50, "items": []});

    let ack = post_receipt(test_app(pool.clone()), &body.to_string()).await;
    assert_eq!(ack, json!({"success": false, "error": "Invalid data"}));
    assert_eq!(row_count(&pool).await, 0);
}

#[tokio::test]
async fn empty_body_is_rejected() {
    let pool = test_pool().await;

    let ack = post_receipt(test_app(pool.clone()), "").await;
    assert_eq!(ack, json!({"success": false, "error": "Invalid data"}));
    assert_eq!(row_count(&pool).await, 0);
}

#[tokio::test]
async fn duplicate_submissions_create_duplicate_rows() {
    // No idempotency key exists; two identical posts are two orders.
    let pool = test_pool().await;
    let body = json!({
        "location": "Poblacion",
        "delivery_fee": 50,
        "grand_total": 290,
        "items": [{"name": "Latte", "priceValue": 120, "qty": 2}]
    })
    .to_string();

    post_receipt(test_app(pool.clone()), &body).await;
    post_receipt(test_app(pool.clone()), &body).await;
    assert_eq!(row_count(&pool).await, 2);
}

#[tokio::test]
async fn write_failure_reports_generic_error() {
    let pool = test_pool().await;
    sqlx::query("DROP TABLE receipts").execute(&pool).await.unwrap();

    let body = json!({
        "location": "Poblacion",
        "delivery_fee": 50,
        "grand_total": 290,
        "items": []
    });

    let ack = post_receipt(test_app(pool.clone()), &body.to_string()).await;
    assert_eq!(ack["success"], false);
    // Driver detail is logged, not leaked.
    assert_eq!(ack["error"], "Write failed");
}
