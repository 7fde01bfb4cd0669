use axum::extract::FromRef;
use chrono::{DateTime, FixedOffset};
use sqlx::PgPool;

/// Dependencies handed to every handler through axum `State`.
///
/// Built once at startup; tests build their own with an isolated pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// Opening instant; its offset also defines the conference's calendar day
    pub conference_start: DateTime<FixedOffset>,
}

impl AppState {
    pub fn new(pool: PgPool, conference_start: DateTime<FixedOffset>) -> Self {
        Self {
            pool,
            conference_start,
        }
    }
}

impl FromRef<AppState> for PgPool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
