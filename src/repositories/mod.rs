//! # Repository Module
//!
//! Data persistence layer using the Repository pattern. All stores are
//! in-memory `HashMap`s behind tokio mutexes; entities are seeded at startup
//! from the config file and mutated through the admin endpoints.

use crate::models::{PaginationQuery, RepositoryError};
use async_trait::async_trait;

mod breed;
pub use breed::*;

mod listing;
pub use listing::*;

mod organization;
pub use organization::*;

mod pet;
pub use pet::*;

mod user;
pub use user::*;

#[derive(Debug)]
pub struct PaginatedResult<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
}

/// Slices an already-ordered collection into one page.
pub(crate) fn paginate<T: Clone>(items: &[T], query: &PaginationQuery) -> PaginatedResult<T> {
    let page_items: Vec<T> = items
        .iter()
        .skip(query.offset())
        .take(query.per_page as usize)
        .cloned()
        .collect();

    PaginatedResult {
        items: page_items,
        total: items.len() as u64,
        page: query.page.max(1),
        per_page: query.per_page,
    }
}

#[async_trait]
pub trait Repository<T, ID> {
    async fn create(&self, entity: T) -> Result<T, RepositoryError>;
    async fn get_by_id(&self, id: ID) -> Result<T, RepositoryError>;
    async fn list_all(&self) -> Result<Vec<T>, RepositoryError>;
    async fn list_paginated(
        &self,
        query: PaginationQuery,
    ) -> Result<PaginatedResult<T>, RepositoryError>;
    async fn update(&self, id: ID, entity: T) -> Result<T, RepositoryError>;
    async fn delete_by_id(&self, id: ID) -> Result<(), RepositoryError>;
    async fn count(&self) -> Result<usize, RepositoryError>;
}
