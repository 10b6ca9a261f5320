//! In-memory organization profile repository.

use crate::{
    models::{OrganizationProfile, PaginationQuery, RepositoryError},
    repositories::{paginate, PaginatedResult, Repository},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[async_trait]
pub trait OrganizationRepository {
    /// IDs of organizations matching an optional name substring
    /// (case-insensitive) and an optional charity flag.
    async fn ids_matching(
        &self,
        name_contains: Option<&str>,
        is_charity: Option<bool>,
    ) -> Result<Vec<String>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryOrganizationRepository {
    store: Mutex<HashMap<String, OrganizationProfile>>,
}

impl InMemoryOrganizationRepository {
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
impl OrganizationRepository for InMemoryOrganizationRepository {
    async fn ids_matching(
        &self,
        name_contains: Option<&str>,
        is_charity: Option<bool>,
    ) -> Result<Vec<String>, RepositoryError> {
        let needle = name_contains.map(|n| n.to_lowercase());
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store
            .values()
            .filter(|org| {
                needle
                    .as_ref()
                    .map_or(true, |n| org.name.to_lowercase().contains(n))
            })
            .filter(|org| is_charity.map_or(true, |charity| org.is_charity == charity))
            .map(|org| org.id.clone())
            .collect())
    }
}

#[async_trait]
impl Repository<OrganizationProfile, String> for InMemoryOrganizationRepository {
    async fn create(
        &self,
        organization: OrganizationProfile,
    ) -> Result<OrganizationProfile, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&organization.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "Organization with ID '{}' already exists",
                organization.id
            )));
        }
        store.insert(organization.id.clone(), organization.clone());
        Ok(organization)
    }

    async fn get_by_id(&self, id: String) -> Result<OrganizationProfile, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store.get(&id).cloned().ok_or_else(|| {
            RepositoryError::NotFound(format!("Organization with ID '{}' not found", id))
        })
    }

    async fn list_all(&self) -> Result<Vec<OrganizationProfile>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut organizations: Vec<OrganizationProfile> = store.values().cloned().collect();
        drop(store);
        organizations.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(organizations)
    }

    async fn list_paginated(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<OrganizationProfile>, RepositoryError> {
        let organizations = self.list_all().await?;
        Ok(paginate(&organizations, &query))
    }

    async fn update(
        &self,
        id: String,
        organization: OrganizationProfile,
    ) -> Result<OrganizationProfile, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if !store.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!(
                "Organization with ID '{}' not found",
                id
            )));
        }
        if id != organization.id {
            return Err(RepositoryError::InvalidData(format!(
                "ID mismatch: URL parameter '{}' does not match entity ID '{}'",
                id, organization.id
            )));
        }
        store.insert(id, organization.clone());
        Ok(organization)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store.remove(&id).map(|_| ()).ok_or_else(|| {
            RepositoryError::NotFound(format!("Organization with ID '{}' not found", id))
        })
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
