//! # Breed Controller
//!
//! Handles HTTP endpoints for the breed catalog:
//! - Filtered listing (free-text range criteria over life span and weight)
//! - Getting breed details
//! - Creating, updating and deleting breeds
use crate::{
    domain::{build_breed_filter, BreedFilter},
    models::{
        ApiError, ApiResponse, AppState, Breed, BreedCreateRequest, BreedFilterQuery,
        BreedResponse, BreedUpdateRequest, PaginationMeta, PaginationQuery,
    },
    repositories::{BreedRepository, Repository},
};
use actix_web::{web, HttpResponse};
use log::{debug, info};

pub async fn list_breeds(
    query: BreedFilterQuery,
    pagination: PaginationQuery,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let filter = BreedFilter::from(query);
    let predicate = build_breed_filter(&filter);
    debug!("Breed predicate: {:?}", predicate);

    let breeds = state
        .breed_repository
        .list_filtered(&predicate, pagination)
        .await?;

    let items: Vec<BreedResponse> = breeds.items.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(
        items,
        PaginationMeta {
            total_items: breeds.total,
            current_page: breeds.page,
            per_page: breeds.per_page,
        },
    )))
}

pub async fn get_breed(
    breed_id: String,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let breed = state.breed_repository.get_by_id(breed_id).await?;
    let response: BreedResponse = breed.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

pub async fn create_breed(
    request: BreedCreateRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let breed = Breed::try_from(request)?;
    let created = state.breed_repository.create(breed).await?;

    info!("Created breed '{}' ({})", created.name, created.id);

    let response: BreedResponse = created.into();
    Ok(HttpResponse::Created().json(ApiResponse::success(response)))
}

pub async fn update_breed(
    breed_id: String,
    request: BreedUpdateRequest,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let mut breed = state.breed_repository.get_by_id(breed_id.clone()).await?;
    breed.apply_update(request)?;
    let updated = state.breed_repository.update(breed_id, breed).await?;

    info!("Updated breed '{}' ({})", updated.name, updated.id);

    let response: BreedResponse = updated.into();
    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

pub async fn delete_breed(
    breed_id: String,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    state.breed_repository.delete_by_id(breed_id.clone()).await?;

    info!("Deleted breed {}", breed_id);

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::no_data()))
}
