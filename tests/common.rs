use axum::{http::HeaderValue, Router};
use chrono::{DateTime, FixedOffset};
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use seeconf::{create_router, db, AppState};

/// Conference opening used by every test app
pub fn conference_start() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(seeconf::config::DEFAULT_CONFERENCE_START)
        .expect("default conference start parses")
}

/// Create a migrated test database pool
pub async fn create_test_pool() -> Pool<Postgres> {
    dotenvy::dotenv().ok();
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for tests");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&url)
        .await
        .expect("Failed to create test database pool");

    db::migrate(&pool).await.expect("Failed to migrate test database");
    pool
}

/// Create the application router for testing
pub fn create_test_app(pool: Pool<Postgres>) -> Router {
    create_router(
        AppState::new(pool, conference_start()),
        HeaderValue::from_static("http://localhost:3000"),
    )
}
