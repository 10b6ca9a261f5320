//! In-memory pet listing repository.

use crate::{
    models::{ListingFilter, PaginationQuery, PetListing, RepositoryError},
    repositories::{paginate, PaginatedResult, Repository},
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use tokio::sync::{Mutex, MutexGuard};

#[async_trait]
pub trait ListingRepository {
    /// Listing-level filter plus an optional pet-id narrowing set resolved
    /// by the caller. Ordered newest first.
    async fn list_filtered(
        &self,
        filter: &ListingFilter,
        pet_ids: Option<&HashSet<String>>,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<PetListing>, RepositoryError>;

    /// Bumps the view counter and returns the updated listing.
    async fn increment_views(&self, id: &str) -> Result<PetListing, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryListingRepository {
    store: Mutex<HashMap<String, PetListing>>,
}

impl InMemoryListingRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }
}

#[async_trait]
impl ListingRepository for InMemoryListingRepository {
    async fn list_filtered(
        &self,
        filter: &ListingFilter,
        pet_ids: Option<&HashSet<String>>,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<PetListing>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut listings: Vec<PetListing> = store
            .values()
            .filter(|listing| filter.matches(listing))
            .filter(|listing| pet_ids.map_or(true, |ids| ids.contains(&listing.pet_id)))
            .cloned()
            .collect();
        drop(store);

        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(paginate(&listings, &query))
    }

    async fn increment_views(&self, id: &str) -> Result<PetListing, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        let listing = store
            .get_mut(id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Listing with ID '{}' not found", id)))?;
        listing.views_count += 1;
        Ok(listing.clone())
    }
}

#[async_trait]
impl Repository<PetListing, String> for InMemoryListingRepository {
    async fn create(&self, listing: PetListing) -> Result<PetListing, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&listing.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Listing with ID '{}' already exists",
                listing.id
            )));
        }
        // One listing per pet.
        if store.values().any(|existing| existing.pet_id == listing.pet_id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Pet '{}' already has a listing",
                listing.pet_id
            )));
        }
        store.insert(listing.id.clone(), listing.clone());
        Ok(listing)
    }

    async fn get_by_id(&self, id: String) -> Result<PetListing, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Listing with ID '{}' not found", id)))
    }

    async fn list_all(&self) -> Result<Vec<PetListing>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut listings: Vec<PetListing> = store.values().cloned().collect();
        drop(store);
        listings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listings)
    }

    async fn list_paginated(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<PetListing>, RepositoryError> {
        let listings = self.list_all().await?;
        Ok(paginate(&listings, &query))
    }

    async fn update(&self, id: String, listing: PetListing) -> Result<PetListing, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if !store.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!(
                "Listing with ID '{}' not found",
                id
            )));
        }
        if id != listing.id {
            return Err(RepositoryError::InvalidData(format!(
                "ID mismatch: URL parameter '{}' does not match entity ID '{}'",
                id, listing.id
            )));
        }
        store.insert(id, listing.clone());
        Ok(listing)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Listing with ID '{}' not found", id)))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
