//! Pet listing model, filter types and API representations.
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{PetResponse, Species};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Active,
    Sold,
    Adopted,
    Expired,
    Archived,
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ListingStatus::Active => "active",
            ListingStatus::Sold => "sold",
            ListingStatus::Adopted => "adopted",
            ListingStatus::Expired => "expired",
            ListingStatus::Archived => "archived",
        };
        f.write_str(s)
    }
}

/// A marketplace listing for a single pet. One listing per pet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetListing {
    pub id: String,
    pub pet_id: String,
    pub title: String,
    pub status: ListingStatus,
    /// Price in whole currency units; 0 or absent means free/adoption.
    pub price: Option<u64>,
    pub views_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PetListing {
    pub fn is_active(&self) -> bool {
        self.status == ListingStatus::Active
    }
}

/// Query parameters accepted by `GET /listings`.
///
/// `status` defaults to `active` when absent, matching the storefront view.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ListingFilterQuery {
    #[serde(default = "default_listing_status")]
    pub status: ListingStatus,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
    pub species: Option<Species>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub location: Option<String>,
    pub is_vaccinated: Option<bool>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub owner_id: Option<String>,
    pub organization_id: Option<String>,
    pub organization_name: Option<String>,
    pub is_charity: Option<bool>,
}

fn default_listing_status() -> ListingStatus {
    ListingStatus::Active
}

impl Default for ListingFilterQuery {
    fn default() -> Self {
        Self {
            status: default_listing_status(),
            min_price: None,
            max_price: None,
            species: None,
            name: None,
            breed: None,
            location: None,
            is_vaccinated: None,
            min_age: None,
            max_age: None,
            owner_id: None,
            organization_id: None,
            organization_name: None,
            is_charity: None,
        }
    }
}

/// Listing-level filter applied by the repository. Pet-level narrowing is
/// resolved separately into a pet-id set by the controller.
#[derive(Debug, Clone)]
pub struct ListingFilter {
    pub status: ListingStatus,
    pub min_price: Option<u64>,
    pub max_price: Option<u64>,
}

impl ListingFilter {
    pub fn matches(&self, listing: &PetListing) -> bool {
        if listing.status != self.status {
            return false;
        }
        let price = listing.price.unwrap_or(0);
        if let Some(min_price) = self.min_price {
            if price < min_price {
                return false;
            }
        }
        if let Some(max_price) = self.max_price {
            if price > max_price {
                return false;
            }
        }
        true
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PetListingResponse {
    pub id: String,
    pub title: String,
    pub status: ListingStatus,
    pub price: Option<u64>,
    pub views_count: u64,
    pub pet: PetResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl PetListingResponse {
    pub fn new(listing: PetListing, pet: PetResponse) -> Self {
        Self {
            id: listing.id,
            title: listing.title,
            status: listing.status,
            price: listing.price,
            views_count: listing.views_count,
            pet,
            created_at: listing.created_at,
            updated_at: listing.updated_at,
        }
    }
}
