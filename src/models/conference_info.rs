use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::utils::require_non_empty;

/// Keyed content block shown on the site (about, venue, contact, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ConferenceInfo {
    pub id: i32,
    pub key: String,
    pub title: String,
    pub content: String,
    /// Serialized metadata, stored verbatim
    pub metadata: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Upsert request keyed on `key`.
///
/// `metadata` distinguishes an omitted field (left unchanged) from an
/// explicit `null` (cleared).
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateConferenceInfo {
    pub key: String,
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub metadata: Option<Option<String>>,
}

/// Field values to write for an existing entry
#[derive(Debug, PartialEq)]
pub struct ConferenceInfoPatch {
    pub title: String,
    pub content: String,
    pub metadata: Option<String>,
}

/// Field values for a brand-new entry
#[derive(Debug, PartialEq)]
pub struct NewConferenceInfo<'a> {
    pub key: &'a str,
    pub title: &'a str,
    pub content: &'a str,
    pub metadata: Option<&'a str>,
}

impl UpdateConferenceInfo {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("key", &self.key)
    }

    /// Overlay the supplied fields on an existing entry
    pub fn merge_onto(self, existing: ConferenceInfo) -> ConferenceInfoPatch {
        ConferenceInfoPatch {
            title: self.title.unwrap_or(existing.title),
            content: self.content.unwrap_or(existing.content),
            metadata: self.metadata.unwrap_or(existing.metadata),
        }
    }

    /// Fields for creating the entry; title and content are both required
    pub fn as_new(&self) -> Result<NewConferenceInfo<'_>, ApiError> {
        match (non_blank(&self.title), non_blank(&self.content)) {
            (Some(title), Some(content)) => Ok(NewConferenceInfo {
                key: &self.key,
                title,
                content,
                metadata: self.metadata.as_ref().and_then(|m| m.as_deref()),
            }),
            _ => Err(ApiError::validation(
                "Title and content are required when creating new conference info",
            )),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Wrap any present value (including `null`) in `Some`
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConferenceInfoQuery {
    /// Only the entry with this key
    pub key: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn existing() -> ConferenceInfo {
        let ts = DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z").unwrap().with_timezone(&Utc);
        ConferenceInfo {
            id: 7,
            key: "about".into(),
            title: "About the Conference".into(),
            content: "A conference about technology.".into(),
            metadata: Some(r#"{"featured":true}"#.into()),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn parse(value: serde_json::Value) -> UpdateConferenceInfo {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_omitted_metadata_is_unchanged() {
        let patch =
            parse(json!({"key": "about", "title": "New Title Only"})).merge_onto(existing());
        assert_eq!(patch.title, "New Title Only");
        assert_eq!(patch.content, "A conference about technology.");
        assert_eq!(patch.metadata.as_deref(), Some(r#"{"featured":true}"#));
    }

    #[test]
    fn test_null_metadata_clears() {
        let input = parse(json!({"key": "about", "metadata": null}));
        assert_eq!(input.metadata, Some(None));
        let patch = input.merge_onto(existing());
        assert_eq!(patch.metadata, None);
        assert_eq!(patch.title, "About the Conference");
    }

    #[test]
    fn test_metadata_replaced() {
        let patch =
            parse(json!({"key": "about", "metadata": "{\"order\":2}"})).merge_onto(existing());
        assert_eq!(patch.metadata.as_deref(), Some("{\"order\":2}"));
    }

    #[test]
    fn test_new_entry_requires_title_and_content() {
        let only_title = parse(json!({"key": "venue", "title": "Venue"}));
        assert!(matches!(only_title.as_new(), Err(ApiError::Validation(_))));

        let blank_content = parse(json!({"key": "venue", "title": "Venue", "content": ""}));
        assert!(blank_content.as_new().is_err());

        let complete = parse(json!({
            "key": "venue",
            "title": "Venue",
            "content": "Hall A",
            "metadata": null
        }));
        let new = complete.as_new().unwrap();
        assert_eq!(new.key, "venue");
        assert_eq!(new.metadata, None);
    }

    #[test]
    fn test_key_required() {
        assert!(parse(json!({"key": ""})).validate().is_err());
        assert!(serde_json::from_value::<UpdateConferenceInfo>(json!({"title": "x"})).is_err());
    }
}
