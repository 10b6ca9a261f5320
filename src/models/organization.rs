//! Organization/charity profile model and API representation.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationProfile {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub is_charity: bool,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrganizationResponse {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub is_charity: bool,
    pub logo_url: Option<String>,
}

impl From<OrganizationProfile> for OrganizationResponse {
    fn from(organization: OrganizationProfile) -> Self {
        Self {
            id: organization.id,
            name: organization.name,
            address: organization.address,
            is_charity: organization.is_charity,
            logo_url: organization.logo_url,
        }
    }
}
