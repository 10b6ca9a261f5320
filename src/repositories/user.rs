//! In-memory user repository. Enforces unique emails and resolves
//! organization membership for the listing joins.

use crate::{
    models::{PaginationQuery, RepositoryError, User},
    repositories::{paginate, PaginatedResult, Repository},
};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};

#[async_trait]
pub trait UserRepository {
    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError>;

    /// IDs of all users belonging to any of the given organizations.
    async fn ids_in_organizations(
        &self,
        organization_ids: &[String],
    ) -> Result<Vec<String>, RepositoryError>;
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    store: Mutex<HashMap<String, User>>,
}

impl InMemoryUserRepository {
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
impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("User with email '{}' not found", email)))
    }

    async fn ids_in_organizations(
        &self,
        organization_ids: &[String],
    ) -> Result<Vec<String>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store
            .values()
            .filter(|user| {
                user.organization_id
                    .as_ref()
                    .map_or(false, |org| organization_ids.contains(org))
            })
            .map(|user| user.id.clone())
            .collect())
    }
}

#[async_trait]
impl Repository<User, String> for InMemoryUserRepository {
    async fn create(&self, user: User) -> Result<User, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if store.contains_key(&user.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "User with ID '{}' already exists",
                user.id
            )));
        }
        if store
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(RepositoryError::ConstraintViolation(format!(
                "User with email '{}' already exists",
                user.email
            )));
        }
        store.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn get_by_id(&self, id: String) -> Result<User, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        store
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(format!("User with ID '{}' not found", id)))
    }

    async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        let mut users: Vec<User> = store.values().cloned().collect();
        drop(store);
        users.sort_by(|a, b| a.email.cmp(&b.email));
        Ok(users)
    }

    async fn list_paginated(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<User>, RepositoryError> {
        let users = self.list_all().await?;
        Ok(paginate(&users, &query))
    }

    async fn update(&self, id: String, user: User) -> Result<User, RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        if !store.contains_key(&id) {
            return Err(RepositoryError::NotFound(format!(
                "User with ID '{}' not found",
                id
            )));
        }
        if id != user.id {
            return Err(RepositoryError::InvalidData(format!(
                "ID mismatch: URL parameter '{}' does not match entity ID '{}'",
                id, user.id
            )));
        }
        store.insert(id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: String) -> Result<(), RepositoryError> {
        let mut store = Self::acquire_lock(&self.store).await?;
        store
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("User with ID '{}' not found", id)))
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        let store = Self::acquire_lock(&self.store).await?;
        Ok(store.len())
    }
}
