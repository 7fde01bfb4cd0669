use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is up", body = HealthStatus)
    )
)]
pub async fn healthcheck() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: String::from("ok"),
        timestamp: Utc::now(),
    })
}
