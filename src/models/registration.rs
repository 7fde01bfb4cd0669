use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::utils::{require_email, require_non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "ticket_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TicketType {
    EarlyBird,
    Regular,
    Student,
    Speaker,
}

impl TicketType {
    /// Tickets offered on the public registration form; speaker passes are issued directly
    pub const SELF_SERVICE: [TicketType; 3] =
        [TicketType::EarlyBird, TicketType::Regular, TicketType::Student];

    /// Wire spelling, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketType::EarlyBird => "early_bird",
            TicketType::Regular => "regular",
            TicketType::Student => "student",
            TicketType::Speaker => "speaker",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketType::EarlyBird => "Early bird",
            TicketType::Regular => "Regular",
            TicketType::Student => "Student",
            TicketType::Speaker => "Speaker",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "t_shirt_size", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TShirtSize {
    Xs,
    S,
    M,
    L,
    Xl,
    Xxl,
}

impl TShirtSize {
    pub const ALL: [TShirtSize; 6] = [
        TShirtSize::Xs,
        TShirtSize::S,
        TShirtSize::M,
        TShirtSize::L,
        TShirtSize::Xl,
        TShirtSize::Xxl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TShirtSize::Xs => "XS",
            TShirtSize::S => "S",
            TShirtSize::M => "M",
            TShirtSize::L => "L",
            TShirtSize::Xl => "XL",
            TShirtSize::Xxl => "XXL",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "registration_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Cancelled,
}

/// Attendee registration response model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Registration {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub ticket_type: TicketType,
    pub dietary_requirements: Option<String>,
    pub t_shirt_size: Option<TShirtSize>,
    pub registration_date: DateTime<Utc>,
    pub status: RegistrationStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request model for registering an attendee.
///
/// There is no status field: new registrations always start as pending.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRegistration {
    pub email: String,
    pub name: String,
    pub company: Option<String>,
    pub position: Option<String>,
    pub phone: Option<String>,
    pub ticket_type: TicketType,
    pub dietary_requirements: Option<String>,
    pub t_shirt_size: Option<TShirtSize>,
}

impl CreateRegistration {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_email("email", &self.email)?;
        require_non_empty("name", &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shirt_sizes_are_uppercase_on_the_wire() {
        assert_eq!(serde_json::to_string(&TShirtSize::Xxl).unwrap(), "\"XXL\"");
        assert_eq!(serde_json::from_str::<TShirtSize>("\"XS\"").unwrap(), TShirtSize::Xs);
        assert!(serde_json::from_str::<TShirtSize>("\"xl\"").is_err());
    }

    #[test]
    fn test_form_values_match_wire_spelling() {
        for size in TShirtSize::ALL {
            assert_eq!(serde_json::to_value(size).unwrap(), size.as_str());
        }
        for ticket in TicketType::SELF_SERVICE {
            assert_eq!(serde_json::to_value(ticket).unwrap(), ticket.as_str());
        }
        assert!(!TicketType::SELF_SERVICE.contains(&TicketType::Speaker));
    }

    #[test]
    fn test_status_in_payload_is_ignored() {
        let input: CreateRegistration = serde_json::from_value(serde_json::json!({
            "email": "ada@example.com",
            "name": "Ada",
            "ticket_type": "early_bird",
            "status": "confirmed"
        }))
        .unwrap();
        assert_eq!(input.ticket_type, TicketType::EarlyBird);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_email_and_blank_name() {
        let input = CreateRegistration {
            email: "not-an-email".into(),
            name: "Ada".into(),
            company: None,
            position: None,
            phone: None,
            ticket_type: TicketType::Regular,
            dietary_requirements: None,
            t_shirt_size: Some(TShirtSize::M),
        };
        assert!(input.validate().is_err());

        let blank = CreateRegistration {
            email: "ada@example.com".into(),
            name: "".into(),
            ..input
        };
        assert!(blank.validate().is_err());
    }
}
