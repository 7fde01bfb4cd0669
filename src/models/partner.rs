use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::utils::{require_non_empty, require_optional_url, require_url};

/// Sponsorship level, ranked from most to least prominent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "partner_tier", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PartnerTier {
    Title,
    Platinum,
    Gold,
    Silver,
    Community,
}

impl PartnerTier {
    /// All tiers in display order
    pub const ALL: [PartnerTier; 5] = [
        PartnerTier::Title,
        PartnerTier::Platinum,
        PartnerTier::Gold,
        PartnerTier::Silver,
        PartnerTier::Community,
    ];

    /// Display priority; the listing query uses the same ranking
    pub fn rank(&self) -> i32 {
        match self {
            PartnerTier::Title => 1,
            PartnerTier::Platinum => 2,
            PartnerTier::Gold => 3,
            PartnerTier::Silver => 4,
            PartnerTier::Community => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PartnerTier::Title => "Title Partner",
            PartnerTier::Platinum => "Platinum",
            PartnerTier::Gold => "Gold",
            PartnerTier::Silver => "Silver",
            PartnerTier::Community => "Community",
        }
    }
}

/// Partner response model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Partner {
    pub id: i32,
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    pub tier: PartnerTier,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Partner {
    /// Sort key matching the listing order: tier rank, then name
    pub fn display_key(&self) -> (i32, &str) {
        (self.tier.rank(), self.name.as_str())
    }
}

/// Request model for creating a partner
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePartner {
    pub name: String,
    pub logo_url: String,
    pub website_url: Option<String>,
    pub tier: PartnerTier,
    pub description: Option<String>,
}

impl CreatePartner {
    pub fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("name", &self.name)?;
        require_url("logo_url", &self.logo_url)?;
        require_optional_url("website_url", self.website_url.as_deref())
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PartnerQuery {
    /// Only partners of this tier
    pub tier: Option<PartnerTier>,
}
