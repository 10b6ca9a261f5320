//! This module defines the HTTP routes for marketplace listings.
use crate::{
    api::controllers::listing,
    models::{ApiResponse, AppState, ListingFilterQuery, PaginationQuery, PetListingResponse},
};
use actix_web::{get, web, Responder};

/// Lists pet listings with filtering and pagination support.
#[utoipa::path(
    get,
    path = "/api/v1/listings",
    tag = "Listings",
    operation_id = "listListings",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u32>, Query, description = "Page number for pagination (starts at 1)"),
        ("per_page" = Option<u32>, Query, description = "Number of items per page (default: 10)"),
        ("status" = Option<String>, Query, description = "Listing status (defaults to active)"),
        ("min_price" = Option<u64>, Query, description = "Minimum price; absent prices count as 0"),
        ("max_price" = Option<u64>, Query, description = "Maximum price; absent prices count as 0"),
        ("species" = Option<String>, Query, description = "Restrict to a species (dog or cat)"),
        ("name" = Option<String>, Query, description = "Substring match over the pet name"),
        ("breed" = Option<String>, Query, description = "Substring match over the breed name"),
        ("location" = Option<String>, Query, description = "Substring match over the location"),
        ("is_vaccinated" = Option<bool>, Query, description = "Restrict by vaccination status"),
        ("min_age" = Option<u32>, Query, description = "Minimum pet age in full years"),
        ("max_age" = Option<u32>, Query, description = "Maximum pet age in full years"),
        ("owner_id" = Option<String>, Query, description = "Restrict to a single owner"),
        ("organization_id" = Option<String>, Query, description = "Restrict to an organization's listings"),
        ("organization_name" = Option<String>, Query, description = "Substring match over the organization name"),
        ("is_charity" = Option<bool>, Query, description = "Restrict to charity organizations"),
    ),
    responses(
        (status = 200, description = "Listing list retrieved successfully", body = ApiResponse<Vec<PetListingResponse>>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 429, description = "Too Many Requests", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/listings")]
pub async fn list_listings(
    query: web::Query<ListingFilterQuery>,
    pagination: web::Query<PaginationQuery>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    listing::list_listings(query.into_inner(), pagination.into_inner(), data).await
}

/// Retrieves a listing by ID. Each retrieval increments the view counter.
#[utoipa::path(
    get,
    path = "/api/v1/listings/{listing_id}",
    tag = "Listings",
    operation_id = "getListing",
    security(("bearer_auth" = [])),
    params(
        ("listing_id" = String, Path, description = "The unique identifier of the listing")
    ),
    responses(
        (status = 200, description = "Listing details retrieved successfully", body = ApiResponse<PetListingResponse>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "Listing not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/listings/{listing_id}")]
pub async fn get_listing(
    listing_id: web::Path<String>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    listing::get_listing(listing_id.into_inner(), data).await
}

/// Initializes the listing routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_listings).service(get_listing);
}
