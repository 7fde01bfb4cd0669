use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::utils::require_non_empty;

/// Agenda track enum matching the database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "agenda_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AgendaType {
    MainForum,
    DesignForum,
    EngineeringForum,
    Workshop,
}

impl AgendaType {
    pub fn label(&self) -> &'static str {
        match self {
            AgendaType::MainForum => "Main Forum",
            AgendaType::DesignForum => "Design Forum",
            AgendaType::EngineeringForum => "Engineering Forum",
            AgendaType::Workshop => "Workshop",
        }
    }
}

/// Agenda item response model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AgendaItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub agenda_type: AgendaType,
    /// Weak reference to a speaker; workshops may have none
    pub speaker_id: Option<i32>,
    pub location: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request model for creating an agenda item
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAgendaItem {
    pub title: String,
    pub description: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    #[serde(rename = "type")]
    pub agenda_type: AgendaType,
    pub speaker_id: Option<i32>,
    pub location: String,
}

impl CreateAgendaItem {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("title", &self.title)?;
        if self.start_time >= self.end_time {
            return Err(ApiError::validation("start_time must be before end_time"));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AgendaQuery {
    /// Only items of this track
    #[serde(rename = "type")]
    pub agenda_type: Option<AgendaType>,
    /// Only items starting on this calendar day (YYYY-MM-DD, conference time zone)
    pub date: Option<NaiveDate>,
}
