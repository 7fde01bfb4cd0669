use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Time remaining until the conference opens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Countdown {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub total_seconds: i64,
    pub is_live: bool,
}

impl Countdown {
    /// The conference has started: nothing left to count
    pub fn live() -> Self {
        Self {
            days: 0,
            hours: 0,
            minutes: 0,
            seconds: 0,
            total_seconds: 0,
            is_live: true,
        }
    }
}
