use crate::{
    api::routes::{breed, health, listing, organization, pet, user},
    models,
};
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// # OpenAPI Specification
///
/// Aggregates the annotated route handlers into a single OpenAPI document
/// for the adoption service API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    tags(
      (name = "Breeds", description = "The breed catalog. Supports free-text range filtering over life span and weight."),
      (name = "Pets", description = "Pet profiles owned by users, filterable by species, age, vaccination status and owner."),
      (name = "Listings", description = "Marketplace listings, one per pet, joined against pet and organization criteria."),
      (name = "Users", description = "User accounts referenced by pets and listings."),
      (name = "Organizations", description = "Shelters and breeders operating on the platform."),
      (name = "Health", description = "Service health checks.")
    ),
    info(
        description = "Pet adoption and marketplace API",
        version = "1.0.0",
        title = "Ruchky API"
    ),
    paths(
        breed::list_breeds,
        breed::get_breed,
        breed::create_breed,
        breed::update_breed,
        breed::delete_breed,
        pet::list_pets,
        pet::get_pet,
        listing::list_listings,
        listing::get_listing,
        user::get_user,
        organization::get_organization,
        health::health,
    ),
    components(schemas(
        models::BreedResponse,
        models::BreedCreateRequest,
        models::BreedUpdateRequest,
        models::PetResponse,
        models::PetListingResponse,
        models::UserResponse,
        models::OrganizationResponse,
        models::PaginationMeta,
    ))
)]
pub struct ApiDoc;
