use axum::{extract::State, Json};
use chrono::Utc;

use crate::models::Countdown;
use crate::state::AppState;
use crate::utils::compute_countdown;

#[utoipa::path(
    get,
    path = "/countdown",
    tag = "countdown",
    responses(
        (status = 200, description = "Time remaining until the conference opens", body = Countdown)
    )
)]
pub async fn get_countdown(State(state): State<AppState>) -> Json<Countdown> {
    Json(compute_countdown(
        Utc::now(),
        state.conference_start.with_timezone(&Utc),
    ))
}
