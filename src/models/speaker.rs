use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::utils::{require_non_empty, require_url};

/// Speaker response model (matches database schema)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Speaker {
    pub id: i32,
    pub name: String,
    pub position: String,
    pub company: String,
    pub avatar_url: String,
    pub bio: String,
    pub speech_topic: String,
    /// Serialized map of social links, stored and returned verbatim
    pub social_links: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request model for creating a speaker
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateSpeaker {
    pub name: String,
    pub position: String,
    pub company: String,
    pub avatar_url: String,
    pub bio: String,
    pub speech_topic: String,
    pub social_links: Option<String>,
}

impl CreateSpeaker {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("name", &self.name)?;
        require_non_empty("position", &self.position)?;
        require_non_empty("company", &self.company)?;
        require_url("avatar_url", &self.avatar_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CreateSpeaker {
        CreateSpeaker {
            name: "Sarah Johnson".into(),
            position: "Senior Frontend Architect".into(),
            company: "Google".into(),
            avatar_url: "https://example.com/sarah.png".into(),
            bio: String::new(),
            speech_topic: "The Future of Web Development Tools".into(),
            social_links: Some(r#"{"twitter": "@sarahj"}"#.into()),
        }
    }

    #[test]
    fn test_valid_speaker() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_empty_bio_and_topic_allowed() {
        let input = CreateSpeaker { speech_topic: String::new(), ..valid() };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_company_and_bad_avatar() {
        assert!(CreateSpeaker { company: " ".into(), ..valid() }.validate().is_err());
        assert!(CreateSpeaker { avatar_url: "avatar.png".into(), ..valid() }.validate().is_err());
    }
}
