use std::sync::Arc;

use crate::repositories::{
    InMemoryBreedRepository, InMemoryListingRepository, InMemoryOrganizationRepository,
    InMemoryPetRepository, InMemoryUserRepository,
};

/// Shared application state: one in-memory repository per entity,
/// constructed once at startup and cloned into each worker.
#[derive(Clone)]
pub struct AppState {
    pub breed_repository: Arc<InMemoryBreedRepository>,
    pub pet_repository: Arc<InMemoryPetRepository>,
    pub listing_repository: Arc<InMemoryListingRepository>,
    pub user_repository: Arc<InMemoryUserRepository>,
    pub organization_repository: Arc<InMemoryOrganizationRepository>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            breed_repository: Arc::new(InMemoryBreedRepository::new()),
            pet_repository: Arc::new(InMemoryPetRepository::new()),
            listing_repository: Arc::new(InMemoryListingRepository::new()),
            user_repository: Arc::new(InMemoryUserRepository::new()),
            organization_repository: Arc::new(InMemoryOrganizationRepository::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
