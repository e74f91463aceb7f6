//! Shared helpers for Nanocafe integration tests.
//!
//! Tests run the real receipt store in-process: an axum server on an
//! ephemeral port over an in-memory `SQLite` pool, so the full
//! widget-to-row path is exercised without external services.

#![allow(clippy::unwrap_used)]

use std::net::SocketAddr;

use axum::Router;
use secrecy::SecretString;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

use nanocafe_server::config::ServerConfig;
use nanocafe_server::routes;
use nanocafe_server::state::AppState;

/// Expected schema of the pre-existing `receipts` table.
pub const CREATE_RECEIPTS: &str = "CREATE TABLE receipts (
    timestamp    TEXT NOT NULL,
    location     TEXT NOT NULL,
    delivery_fee TEXT NOT NULL,
    grand_total  TEXT NOT NULL,
    items        TEXT NOT NULL
)";

/// Create an in-memory pool with the receipts table in place.
pub async fn test_pool() -> SqlitePool {
    // A single connection keeps the in-memory database alive and shared.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    sqlx::query(CREATE_RECEIPTS).execute(&pool).await.unwrap();
    pool
}

/// Spawn the receipt store on an ephemeral port, returning its address.
///
/// The server task runs until the test process exits; tests share
/// nothing, so no shutdown plumbing is needed.
pub async fn spawn_server(pool: SqlitePool) -> SocketAddr {
    let config = ServerConfig {
        database_url: SecretString::from("sqlite::memory:"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
    };
    let state = AppState::new(config, pool);
    let app = Router::new().merge(routes::routes()).with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

/// Number of rows currently in the receipts table.
pub async fn row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_as::<_, (i64,)>("SELECT COUNT(*) FROM receipts")
        .fetch_one(pool)
        .await
        .unwrap()
        .0
}
