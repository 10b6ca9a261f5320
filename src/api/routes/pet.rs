//! This module defines the HTTP routes for pet profiles.
use crate::{
    api::controllers::pet,
    models::{ApiResponse, AppState, PaginationQuery, PetFilterQuery, PetResponse},
};
use actix_web::{get, web, Responder};

/// Lists pets with filtering and pagination support.
#[utoipa::path(
    get,
    path = "/api/v1/pets",
    tag = "Pets",
    operation_id = "listPets",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u32>, Query, description = "Page number for pagination (starts at 1)"),
        ("per_page" = Option<u32>, Query, description = "Number of items per page (default: 10)"),
        ("species" = Option<String>, Query, description = "Restrict to a species (dog or cat)"),
        ("min_age" = Option<u32>, Query, description = "Minimum age in full years"),
        ("max_age" = Option<u32>, Query, description = "Maximum age in full years"),
        ("name" = Option<String>, Query, description = "Substring match over the pet name"),
        ("breed" = Option<String>, Query, description = "Substring match over the breed name"),
        ("location" = Option<String>, Query, description = "Substring match over the location"),
        ("is_vaccinated" = Option<bool>, Query, description = "Restrict by vaccination status"),
        ("owner_id" = Option<String>, Query, description = "Restrict to a single owner"),
        ("organization_id" = Option<String>, Query, description = "Restrict to pets owned by members of an organization"),
    ),
    responses(
        (status = 200, description = "Pet list retrieved successfully", body = ApiResponse<Vec<PetResponse>>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 429, description = "Too Many Requests", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/pets")]
pub async fn list_pets(
    query: web::Query<PetFilterQuery>,
    pagination: web::Query<PaginationQuery>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    pet::list_pets(query.into_inner(), pagination.into_inner(), data).await
}

/// Retrieves details of a specific pet by ID.
#[utoipa::path(
    get,
    path = "/api/v1/pets/{pet_id}",
    tag = "Pets",
    operation_id = "getPet",
    security(("bearer_auth" = [])),
    params(
        ("pet_id" = String, Path, description = "The unique identifier of the pet")
    ),
    responses(
        (status = 200, description = "Pet details retrieved successfully", body = ApiResponse<PetResponse>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "Pet not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/pets/{pet_id}")]
pub async fn get_pet(pet_id: web::Path<String>, data: web::ThinData<AppState>) -> impl Responder {
    pet::get_pet(pet_id.into_inner(), data).await
}

/// Initializes the pet routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_pets).service(get_pet);
}
