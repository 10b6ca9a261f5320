//! In-memory pet repository.

use crate::{
    models::{PaginationQuery, Pet, PetFilter, RepositoryError},
    repositories::{paginate, PaginatedResult, Repository},
};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[async_trait]
pub trait PetRepository {
    /// All pets matching the filter, ordered by name. Used for the listing
    /// join as well as `list_filtered`.
    async fn list_matching(&self, filter: &PetFilter) -> Result<Vec<Pet>, RepositoryError>;

    async fn list_filtered(
        &self,
        filter: &PetFilter,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<Pet>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryPetRepository {
    store: Mutex<HashMap<String, Pet>>,
}

impl InMemoryPetRepository {
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
impl PetRepository for InMemoryPetRepository {
    async fn list_matching(&self, filter: &PetFilter) -> Result<Vec<Pet>, RepositoryError> {
        let today = Utc::now().date_naive();
        let store = Self::acquire_lock(&self.store).await?;
        let mut pets: Vec<Pet> = store
            .values()
            .filter(|pet| filter.matches(pet, today))
            .cloned()
            .collect();
        drop(store);

        pets.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(pets)
    }

    async fn list_filtered(
        &self,
        filter: &PetFilter,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<Pet>, RepositoryError> {
        let pets = self.list_matching(filter).await?;
        Ok(paginate(&pets, &query))
    }
}

#[async_trait]
impl Repository<Pet, String> for InMemoryPetRepository {
    async fn create(&self, pet: Pet) -> Result<Pet, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&pet.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Pet with ID '{}' already exists",
                pet.id
            )));
        }
        store.insert(pet.id.clone(), pet.clone());
        Ok(pet)
    }

    async fn get_by_id(&self, id: String) -> Result<Pet, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Pet with ID '{}' not found", id)))
    }

    async fn list_all(&self) -> Result<Vec<Pet>, RepositoryError> {
        self.list_matching(&PetFilter::default()).await
    }

    async fn list_paginated(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<Pet>, RepositoryError> {
        self.list_filtered(&PetFilter::default(), query).await
    }

    async fn update(&self, id: String, pet: Pet) -> Result<Pet, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if !store.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!(
                "Pet with ID '{}' not found",
                id
            )));
        }
        if id != pet.id {
            return Err(RepositoryError::InvalidData(format!(
                "ID mismatch: URL parameter '{}' does not match entity ID '{}'",
                id, pet.id
            )));
        }
        store.insert(id, pet.clone());
        Ok(pet)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Pet with ID '{}' not found", id)))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
