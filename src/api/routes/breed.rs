//! This module defines the HTTP routes for the breed catalog.
//! It includes handlers for listing, retrieving, creating, updating and
//! deleting breeds, and delegates to the breed controller.
use crate::{
    api::controllers::breed,
    models::{
        ApiResponse, AppState, BreedCreateRequest, BreedFilterQuery, BreedResponse,
        BreedUpdateRequest, PaginationQuery,
    },
};
use actix_web::{delete, get, patch, post, web, Responder};

/// Lists breeds with filtering and pagination support.
#[utoipa::path(
    get,
    path = "/api/v1/breeds",
    tag = "Breeds",
    operation_id = "listBreeds",
    security(("bearer_auth" = [])),
    params(
        ("page" = Option<u32>, Query, description = "Page number for pagination (starts at 1)"),
        ("per_page" = Option<u32>, Query, description = "Number of items per page (default: 10)"),
        ("species" = Option<String>, Query, description = "Restrict to a species (dog or cat)"),
        ("search" = Option<String>, Query, description = "Substring match over name and description"),
        ("origin" = Option<String>, Query, description = "Substring match over country of origin"),
        ("min_life_span" = Option<String>, Query, description = "Minimum life span in years; non-numeric values are ignored"),
        ("max_life_span" = Option<String>, Query, description = "Maximum life span in years; non-numeric values are ignored"),
        ("weight" = Option<String>, Query, description = "Weight range in kg, e.g. 5-10; malformed values are ignored"),
    ),
    responses(
        (status = 200, description = "Breed list retrieved successfully", body = ApiResponse<Vec<BreedResponse>>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 429, description = "Too Many Requests", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/breeds")]
pub async fn list_breeds(
    query: web::Query<BreedFilterQuery>,
    pagination: web::Query<PaginationQuery>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    breed::list_breeds(query.into_inner(), pagination.into_inner(), data).await
}

/// Retrieves details of a specific breed by ID.
#[utoipa::path(
    get,
    path = "/api/v1/breeds/{breed_id}",
    tag = "Breeds",
    operation_id = "getBreed",
    security(("bearer_auth" = [])),
    params(
        ("breed_id" = String, Path, description = "The unique identifier of the breed")
    ),
    responses(
        (status = 200, description = "Breed details retrieved successfully", body = ApiResponse<BreedResponse>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "Breed not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/breeds/{breed_id}")]
pub async fn get_breed(
    breed_id: web::Path<String>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    breed::get_breed(breed_id.into_inner(), data).await
}

/// Creates a new breed in the catalog.
#[utoipa::path(
    post,
    path = "/api/v1/breeds",
    tag = "Breeds",
    operation_id = "createBreed",
    security(("bearer_auth" = [])),
    request_body = BreedCreateRequest,
    responses(
        (status = 201, description = "Breed created successfully", body = ApiResponse<BreedResponse>),
        (status = 400, description = "Invalid or duplicate breed", body = ApiResponse<String>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[post("/breeds")]
pub async fn create_breed(
    request: web::Json<BreedCreateRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    breed::create_breed(request.into_inner(), data).await
}

/// Applies a partial update to a breed.
#[utoipa::path(
    patch,
    path = "/api/v1/breeds/{breed_id}",
    tag = "Breeds",
    operation_id = "updateBreed",
    security(("bearer_auth" = [])),
    params(
        ("breed_id" = String, Path, description = "The unique identifier of the breed")
    ),
    request_body = BreedUpdateRequest,
    responses(
        (status = 200, description = "Breed updated successfully", body = ApiResponse<BreedResponse>),
        (status = 400, description = "Invalid or duplicate breed", body = ApiResponse<String>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "Breed not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[patch("/breeds/{breed_id}")]
pub async fn update_breed(
    breed_id: web::Path<String>,
    request: web::Json<BreedUpdateRequest>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    breed::update_breed(breed_id.into_inner(), request.into_inner(), data).await
}

/// Deletes a breed from the catalog.
#[utoipa::path(
    delete,
    path = "/api/v1/breeds/{breed_id}",
    tag = "Breeds",
    operation_id = "deleteBreed",
    security(("bearer_auth" = [])),
    params(
        ("breed_id" = String, Path, description = "The unique identifier of the breed")
    ),
    responses(
        (status = 200, description = "Breed deleted successfully", body = ApiResponse<String>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "Breed not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[delete("/breeds/{breed_id}")]
pub async fn delete_breed(
    breed_id: web::Path<String>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    breed::delete_breed(breed_id.into_inner(), data).await
}

/// Initializes the breed routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(list_breeds)
        .service(get_breed)
        .service(create_breed)
        .service(update_breed)
        .service(delete_breed);
}
