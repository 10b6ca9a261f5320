//! Pet domain model, filter types and API representations.
use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
}

impl Species {
    pub fn as_str(&self) -> &'static str {
        match self {
            Species::Dog => "dog",
            Species::Cat => "cat",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "m")]
    Male,
}

/// A pet owned by a user (an individual or an organization member).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub location: Option<String>,
    pub is_vaccinated: bool,
    pub description: Option<String>,
    pub health: Option<String>,
    /// URL into the external blob store; the API never touches image bytes.
    pub profile_picture_url: Option<String>,
    /// Ordered gallery of additional image URLs.
    pub gallery: Vec<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pet {
    /// Full years of age on the given date. Future birth dates count as 0.
    pub fn age_years(&self, on: NaiveDate) -> u32 {
        on.years_since(self.birth_date).unwrap_or(0)
    }
}

/// Query parameters accepted by `GET /pets`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct PetFilterQuery {
    pub species: Option<Species>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub location: Option<String>,
    pub is_vaccinated: Option<bool>,
    pub owner_id: Option<String>,
    pub organization_id: Option<String>,
}

/// Resolved pet filter applied by the repository. Organization-level
/// narrowing has already been flattened into `owner_ids` by the controller.
#[derive(Debug, Clone, Default)]
pub struct PetFilter {
    pub species: Option<Species>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub location: Option<String>,
    pub is_vaccinated: Option<bool>,
    pub owner_ids: Option<HashSet<String>>,
}

impl PetFilter {
    pub fn is_empty(&self) -> bool {
        self.species.is_none()
            && self.min_age.is_none()
            && self.max_age.is_none()
            && self.name.is_none()
            && self.breed.is_none()
            && self.location.is_none()
            && self.is_vaccinated.is_none()
            && self.owner_ids.is_none()
    }

    pub fn matches(&self, pet: &Pet, today: NaiveDate) -> bool {
        if let Some(species) = self.species {
            if pet.species != species {
                return false;
            }
        }
        let age = pet.age_years(today);
        if let Some(min_age) = self.min_age {
            if age < min_age {
                return false;
            }
        }
        if let Some(max_age) = self.max_age {
            if age > max_age {
                return false;
            }
        }
        if let Some(name) = &self.name {
            if !contains_ignore_case(&pet.name, name) {
                return false;
            }
        }
        if let Some(breed) = &self.breed {
            let stored = pet.breed.as_deref().unwrap_or("");
            if !contains_ignore_case(stored, breed) {
                return false;
            }
        }
        if let Some(location) = &self.location {
            let stored = pet.location.as_deref().unwrap_or("");
            if !contains_ignore_case(stored, location) {
                return false;
            }
        }
        if let Some(is_vaccinated) = self.is_vaccinated {
            if pet.is_vaccinated != is_vaccinated {
                return false;
            }
        }
        if let Some(owner_ids) = &self.owner_ids {
            if !owner_ids.contains(&pet.owner_id) {
                return false;
            }
        }
        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PetResponse {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub age: u32,
    pub location: Option<String>,
    pub is_vaccinated: bool,
    pub description: Option<String>,
    pub health: Option<String>,
    pub profile_picture_url: Option<String>,
    pub gallery: Vec<String>,
    pub owner_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Pet> for PetResponse {
    fn from(pet: Pet) -> Self {
        let age = pet.age_years(Utc::now().date_naive());
        Self {
            id: pet.id,
            name: pet.name,
            species: pet.species,
            breed: pet.breed,
            sex: pet.sex,
            birth_date: pet.birth_date,
            age,
            location: pet.location,
            is_vaccinated: pet.is_vaccinated,
            description: pet.description,
            health: pet.health,
            profile_picture_url: pet.profile_picture_url,
            gallery: pet.gallery,
            owner_id: pet.owner_id,
            created_at: pet.created_at,
            updated_at: pet.updated_at,
        }
    }
}
