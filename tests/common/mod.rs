#![allow(dead_code)]

use axum_test::TestServer;
use golink::infrastructure::persistence::database;
use golink::routes::app_router;
use golink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

/// Fresh in-memory database with the schema applied.
pub async fn test_pool() -> Arc<SqlitePool> {
    Arc::new(database::in_memory().await.unwrap())
}

pub async fn create_test_link(pool: &SqlitePool, name: &str, url: &str) {
    sqlx::query("INSERT INTO links (name, url) VALUES (?, ?)")
        .bind(name)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(pool: Arc<SqlitePool>, host_name: Option<&str>) -> AppState {
    AppState::new(pool, host_name.map(str::to_string))
}

/// Test server over the full router, middleware included.
pub fn create_test_server(pool: Arc<SqlitePool>, host_name: Option<&str>) -> TestServer {
    let state = create_test_state(pool, host_name);
    TestServer::new(app_router(state)).unwrap()
}
