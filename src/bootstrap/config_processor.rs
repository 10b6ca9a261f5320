//! This module provides functionality for processing the seed data file and
//! populating the repositories.
use actix_web::web;
use chrono::Utc;
use color_eyre::{eyre::WrapErr, Result};
use log::info;

use crate::{
    config::SeedConfig,
    models::{AppState, Breed, OrganizationProfile, Pet, PetListing, User},
    repositories::Repository,
};

async fn process_organizations(
    config_file: &SeedConfig,
    app_state: &web::ThinData<AppState>,
) -> Result<()> {
    for organization in &config_file.organizations {
        let now = Utc::now();
        let model = OrganizationProfile {
            id: organization.id.clone(),
            name: organization.name.clone(),
            address: organization.address.clone(),
            is_charity: organization.is_charity,
            logo_url: organization.logo_url.clone(),
            created_at: now,
            updated_at: now,
        };
        app_state
            .organization_repository
            .create(model)
            .await
            .wrap_err("Failed to create organization repository entry")?;
    }
    Ok(())
}

async fn process_users(
    config_file: &SeedConfig,
    app_state: &web::ThinData<AppState>,
) -> Result<()> {
    for user in &config_file.users {
        let now = Utc::now();
        let model = User {
            id: user.id.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: user.phone.clone(),
            organization_id: user.organization_id.clone(),
            created_at: now,
            updated_at: now,
        };
        app_state
            .user_repository
            .create(model)
            .await
            .wrap_err("Failed to create user repository entry")?;
    }
    Ok(())
}

async fn process_breeds(
    config_file: &SeedConfig,
    app_state: &web::ThinData<AppState>,
) -> Result<()> {
    for breed in &config_file.breeds {
        let now = Utc::now();
        let model = Breed {
            id: breed.id.clone(),
            name: breed.name.clone(),
            species: breed.species,
            description: breed.description.clone(),
            origin: breed.origin.clone(),
            life_span: breed.life_span.clone(),
            weight: breed.weight.clone(),
            is_active: breed.is_active,
            image_url: breed.image_url.clone(),
            created_at: now,
            updated_at: now,
        };
        app_state
            .breed_repository
            .create(model)
            .await
            .wrap_err("Failed to create breed repository entry")?;
    }
    Ok(())
}

async fn process_pets(
    config_file: &SeedConfig,
    app_state: &web::ThinData<AppState>,
) -> Result<()> {
    for pet in &config_file.pets {
        let now = Utc::now();
        let model = Pet {
            id: pet.id.clone(),
            name: pet.name.clone(),
            species: pet.species,
            breed: pet.breed.clone(),
            sex: pet.sex,
            birth_date: pet.birth_date,
            location: pet.location.clone(),
            is_vaccinated: pet.is_vaccinated,
            description: pet.description.clone(),
            health: pet.health.clone(),
            profile_picture_url: pet.profile_picture_url.clone(),
            gallery: pet.gallery.clone(),
            owner_id: pet.owner_id.clone(),
            created_at: now,
            updated_at: now,
        };
        app_state
            .pet_repository
            .create(model)
            .await
            .wrap_err("Failed to create pet repository entry")?;
    }
    Ok(())
}

async fn process_listings(
    config_file: &SeedConfig,
    app_state: &web::ThinData<AppState>,
) -> Result<()> {
    for listing in &config_file.listings {
        let now = Utc::now();
        let model = PetListing {
            id: listing.id.clone(),
            pet_id: listing.pet_id.clone(),
            title: listing.title.clone(),
            status: listing.status,
            price: listing.price,
            views_count: 0,
            created_at: now,
            updated_at: now,
        };
        app_state
            .listing_repository
            .create(model)
            .await
            .wrap_err("Failed to create listing repository entry")?;
    }
    Ok(())
}

/// Populates the repositories from a validated seed config. Entities are
/// loaded in reference order: organizations and users before pets, pets
/// before listings.
pub async fn process_config_file(
    config_file: SeedConfig,
    app_state: &web::ThinData<AppState>,
) -> Result<()> {
    process_organizations(&config_file, app_state).await?;
    process_users(&config_file, app_state).await?;
    process_breeds(&config_file, app_state).await?;
    process_pets(&config_file, app_state).await?;
    process_listings(&config_file, app_state).await?;

    info!(
        "Seeded {} organizations, {} users, {} breeds, {} pets, {} listings",
        config_file.organizations.len(),
        config_file.users.len(),
        config_file.breeds.len(),
        config_file.pets.len(),
        config_file.listings.len()
    );
    Ok(())
}
