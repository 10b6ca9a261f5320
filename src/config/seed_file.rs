//! Seed data file parsing and validation.
//!
//! The service is seeded at startup from a single JSON file describing the
//! organizations, users, breeds, pets and listings to load. Entries are
//! validated before anything is written to the repositories, so a malformed
//! file aborts startup instead of producing a half-seeded catalog.
use std::collections::HashSet;
use std::fs;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    config::ConfigFileError,
    constants::PHONE_REGEX,
    models::{ListingStatus, Sex, Species},
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrganizationFileConfig {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    #[serde(default)]
    pub is_charity: bool,
    pub logo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFileConfig {
    pub id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub organization_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreedFileConfig {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub description: Option<String>,
    pub origin: Option<String>,
    /// Free-text range, e.g. "10 - 12 years". Kept verbatim.
    pub life_span: Option<String>,
    /// Free-text range, e.g. "25 - 36 kg". Kept verbatim.
    pub weight: Option<String>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PetFileConfig {
    pub id: String,
    pub name: String,
    pub species: Species,
    pub breed: Option<String>,
    pub sex: Sex,
    pub birth_date: NaiveDate,
    pub location: Option<String>,
    #[serde(default)]
    pub is_vaccinated: bool,
    pub description: Option<String>,
    pub health: Option<String>,
    pub profile_picture_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    pub owner_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingFileConfig {
    pub id: String,
    pub pet_id: String,
    pub title: String,
    #[serde(default = "default_listing_status")]
    pub status: ListingStatus,
    pub price: Option<u64>,
}

fn default_true() -> bool {
    true
}

fn default_listing_status() -> ListingStatus {
    ListingStatus::Active
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub organizations: Vec<OrganizationFileConfig>,
    #[serde(default)]
    pub users: Vec<UserFileConfig>,
    #[serde(default)]
    pub breeds: Vec<BreedFileConfig>,
    #[serde(default)]
    pub pets: Vec<PetFileConfig>,
    #[serde(default)]
    pub listings: Vec<ListingFileConfig>,
}

impl SeedConfig {
    fn validate_unique_ids<'a, I>(ids: I, entity: &str) -> Result<(), ConfigFileError>
    where
        I: Iterator<Item = &'a String>,
    {
        let mut seen = HashSet::new();
        for id in ids {
            if id.is_empty() {
                return Err(ConfigFileError::MissingField(format!("{} id", entity)));
            }
            if !seen.insert(id) {
                return Err(ConfigFileError::DuplicateId(format!(
                    "Duplicate {} ID found: {}",
                    entity, id
                )));
            }
        }
        Ok(())
    }

    fn validate_organizations(&self) -> Result<(), ConfigFileError> {
        Self::validate_unique_ids(self.organizations.iter().map(|o| &o.id), "organization")?;
        for organization in &self.organizations {
            if organization.name.trim().is_empty() {
                return Err(ConfigFileError::MissingField(format!(
                    "name for organization '{}'",
                    organization.id
                )));
            }
        }
        Ok(())
    }

    fn validate_users(&self) -> Result<(), ConfigFileError> {
        Self::validate_unique_ids(self.users.iter().map(|u| &u.id), "user")?;

        let mut seen_emails = HashSet::new();
        let organization_ids: HashSet<&String> =
            self.organizations.iter().map(|o| &o.id).collect();

        for user in &self.users {
            if user.email.trim().is_empty() {
                return Err(ConfigFileError::MissingField(format!(
                    "email for user '{}'",
                    user.id
                )));
            }
            if !seen_emails.insert(user.email.to_lowercase()) {
                return Err(ConfigFileError::DuplicateEntry(format!(
                    "Duplicate user email found: {}",
                    user.email
                )));
            }
            if let Some(phone) = &user.phone {
                if !PHONE_REGEX.is_match(phone) {
                    return Err(ConfigFileError::InvalidFormat(format!(
                        "Invalid phone number for user '{}': {}",
                        user.id, phone
                    )));
                }
            }
            if let Some(organization_id) = &user.organization_id {
                if !organization_ids.contains(organization_id) {
                    return Err(ConfigFileError::InvalidReference(format!(
                        "User '{}' references unknown organization '{}'",
                        user.id, organization_id
                    )));
                }
            }
        }
        Ok(())
    }

    fn validate_breeds(&self) -> Result<(), ConfigFileError> {
        Self::validate_unique_ids(self.breeds.iter().map(|b| &b.id), "breed")?;

        // (name, species) is unique, matching the repository constraint.
        let mut seen_names = HashSet::new();
        for breed in &self.breeds {
            if breed.name.trim().is_empty() {
                return Err(ConfigFileError::MissingField(format!(
                    "name for breed '{}'",
                    breed.id
                )));
            }
            if !seen_names.insert((breed.name.to_lowercase(), breed.species)) {
                return Err(ConfigFileError::DuplicateEntry(format!(
                    "Duplicate breed found: '{}' for species '{}'",
                    breed.name, breed.species
                )));
            }
        }
        Ok(())
    }

    fn validate_pets(&self) -> Result<(), ConfigFileError> {
        Self::validate_unique_ids(self.pets.iter().map(|p| &p.id), "pet")?;

        let user_ids: HashSet<&String> = self.users.iter().map(|u| &u.id).collect();
        for pet in &self.pets {
            if pet.name.trim().is_empty() {
                return Err(ConfigFileError::MissingField(format!(
                    "name for pet '{}'",
                    pet.id
                )));
            }
            if !user_ids.contains(&pet.owner_id) {
                return Err(ConfigFileError::InvalidReference(format!(
                    "Pet '{}' references unknown owner '{}'",
                    pet.id, pet.owner_id
                )));
            }
        }
        Ok(())
    }

    fn validate_listings(&self) -> Result<(), ConfigFileError> {
        Self::validate_unique_ids(self.listings.iter().map(|l| &l.id), "listing")?;

        let pet_ids: HashSet<&String> = self.pets.iter().map(|p| &p.id).collect();
        let mut listed_pets = HashSet::new();
        for listing in &self.listings {
            if listing.title.trim().is_empty() {
                return Err(ConfigFileError::MissingField(format!(
                    "title for listing '{}'",
                    listing.id
                )));
            }
            if !pet_ids.contains(&listing.pet_id) {
                return Err(ConfigFileError::InvalidReference(format!(
                    "Listing '{}' references unknown pet '{}'",
                    listing.id, listing.pet_id
                )));
            }
            if !listed_pets.insert(&listing.pet_id) {
                return Err(ConfigFileError::DuplicateEntry(format!(
                    "Pet '{}' has more than one listing",
                    listing.pet_id
                )));
            }
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigFileError> {
        self.validate_organizations()?;
        self.validate_users()?;
        self.validate_breeds()?;
        self.validate_pets()?;
        self.validate_listings()?;
        Ok(())
    }
}

pub fn load_config(config_file_path: &str) -> Result<SeedConfig, ConfigFileError> {
    if !std::path::Path::new(config_file_path).exists() {
        return Err(ConfigFileError::FileNotFound(config_file_path.to_string()));
    }
    let config_str = fs::read_to_string(config_file_path)?;
    let config: SeedConfig = serde_json::from_str(&config_str)?;
    config.validate()?;
    Ok(config)
}
