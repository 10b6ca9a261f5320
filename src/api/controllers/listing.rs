//! # Listing Controller
//!
//! Handles HTTP endpoints for the marketplace listings. Pet-level and
//! organization-level criteria are resolved into a pet-id set here before
//! the listing repository applies its own filter.
use std::collections::HashSet;

use crate::{
    api::controllers::resolve_owner_ids,
    models::{
        ApiError, ApiResponse, AppState, ListingFilter, ListingFilterQuery, PaginationMeta,
        PaginationQuery, PetFilter, PetListing, PetListingResponse, PetResponse,
    },
    repositories::{ListingRepository, PetRepository, Repository},
};
use actix_web::{web, HttpResponse};
use eyre::Context;

pub async fn list_listings(
    query: ListingFilterQuery,
    pagination: PaginationQuery,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let owner_ids = resolve_owner_ids(
        &state,
        query.owner_id,
        query.organization_id,
        query.organization_name.as_deref(),
        query.is_charity,
    )
    .await?;

    let pet_filter = PetFilter {
        species: query.species,
        min_age: query.min_age,
        max_age: query.max_age,
        name: query.name,
        breed: query.breed,
        location: query.location,
        is_vaccinated: query.is_vaccinated,
        owner_ids,
    };

    // Only join through the pet repository when a pet-level criterion is set.
    let pet_ids: Option<HashSet<String>> = if pet_filter.is_empty() {
        None
    } else {
        let pets = state.pet_repository.list_matching(&pet_filter).await?;
        Some(pets.into_iter().map(|pet| pet.id).collect())
    };

    let filter = ListingFilter {
        status: query.status,
        min_price: query.min_price,
        max_price: query.max_price,
    };
    let listings = state
        .listing_repository
        .list_filtered(&filter, pet_ids.as_ref(), pagination)
        .await?;

    let total = listings.total;
    let page = listings.page;
    let per_page = listings.per_page;

    let mut items = Vec::with_capacity(listings.items.len());
    for listing in listings.items {
        items.push(embed_pet(&state, listing).await?);
    }

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(
        items,
        PaginationMeta {
            total_items: total,
            current_page: page,
            per_page,
        },
    )))
}

pub async fn get_listing(
    listing_id: String,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    // Every retrieval counts as a view.
    let listing = state.listing_repository.increment_views(&listing_id).await?;
    let response = embed_pet(&state, listing).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// A listing without its pet is corrupted state, so the lookup failure is
/// reported as an internal error rather than a 404.
async fn embed_pet(
    state: &AppState,
    listing: PetListing,
) -> Result<PetListingResponse, ApiError> {
    let pet = state
        .pet_repository
        .get_by_id(listing.pet_id.clone())
        .await
        .wrap_err_with(|| format!("Listing {} references a missing pet", listing.id))?;
    let pet: PetResponse = pet.into();
    Ok(PetListingResponse::new(listing, pet))
}
