//! In-memory breed catalog repository.
//!
//! Enforces the (name, species) uniqueness invariant and provides the
//! filtered listing used by `GET /breeds`: predicate match, then a stable
//! (species, name) ordering, then pagination.

use crate::{
    domain::Predicate,
    models::{Breed, PaginationQuery, RepositoryError},
    repositories::{paginate, PaginatedResult, Repository},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[async_trait]
pub trait BreedRepository {
    /// Applies a breed predicate, orders by (species, name) and paginates.
    async fn list_filtered(
        &self,
        predicate: &Predicate,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<Breed>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryBreedRepository {
    store: Mutex<HashMap<String, Breed>>,
}

impl InMemoryBreedRepository {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
        }
    }

    async fn acquire_lock<T>(lock: &Mutex<T>) -> Result<MutexGuard<T>, RepositoryError> {
        Ok(lock.lock().await)
    }

    fn sort_for_listing(breeds: &mut [Breed]) {
        breeds.sort_by(|a, b| {
            (a.species.as_str(), a.name.to_lowercase())
                .cmp(&(b.species.as_str(), b.name.to_lowercase()))
        });
    }

    fn name_taken(store: &HashMap<String, Breed>, candidate: &Breed) -> bool {
        store.values().any(|existing| {
            existing.id != candidate.id
                && existing.species == candidate.species
                && existing.name.eq_ignore_ascii_case(&candidate.name)
        })
    }
}

#[async_trait]
impl BreedRepository for InMemoryBreedRepository {
    async fn list_filtered(
        &self,
        predicate: &Predicate,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<Breed>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut matching: Vec<Breed> = store
            .values()
            .filter(|breed| predicate.matches(breed))
            .cloned()
            .collect();
        drop(store);

        Self::sort_for_listing(&mut matching);
        Ok(paginate(&matching, &query))
    }
}

#[async_trait]
impl Repository<Breed, String> for InMemoryBreedRepository {
    async fn create(&self, breed: Breed) -> Result<Breed, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&breed.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Breed with ID '{}' already exists",
                breed.id
            )));
        }
        if Self::name_taken(&store, &breed) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Breed '{}' already exists for species '{}'",
                breed.name, breed.species
            )));
        }
        store.insert(breed.id.clone(), breed.clone());
        Ok(breed)
    }

    async fn get_by_id(&self, id: String) -> Result<Breed, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("Breed with ID '{}' not found", id)))
    }

    async fn list_all(&self) -> Result<Vec<Breed>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut breeds: Vec<Breed> = store.values().cloned().collect();
        drop(store);
        Self::sort_for_listing(&mut breeds);
        Ok(breeds)
    }

    async fn list_paginated(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<Breed>, RepositoryError> {
        let breeds = self.list_all().await?;
        Ok(paginate(&breeds, &query))
    }

    async fn update(&self, id: String, breed: Breed) -> Result<Breed, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if !store.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!(
                "Breed with ID '{}' not found",
                id
            )));
        }
        if id != breed.id {
            return Err(RepositoryError::InvalidData(format!(
                "ID mismatch: URL parameter '{}' does not match entity ID '{}'",
                id, breed.id
            )));
        }
        if Self::name_taken(&store, &breed) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Breed '{}' already exists for species '{}'",
                breed.name, breed.species
            )));
        }
        store.insert(id, breed.clone());
        Ok(breed)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Breed with ID '{}' not found", id)))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
