//! # Pet Controller
//!
//! Handles HTTP endpoints for pet profiles: filtered listing and details.
use crate::{
    api::controllers::resolve_owner_ids,
    models::{
        ApiError, ApiResponse, AppState, PaginationMeta, PaginationQuery, PetFilter,
        PetFilterQuery, PetResponse,
    },
    repositories::{PetRepository, Repository},
};
use actix_web::{web, HttpResponse};

pub async fn list_pets(
    query: PetFilterQuery,
    pagination: PaginationQuery,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let owner_ids = resolve_owner_ids(
        &state,
        query.owner_id,
        query.organization_id,
        None,
        None,
    )
    .await?;

    let filter = PetFilter {
        species: query.species,
        min_age: query.min_age,
        max_age: query.max_age,
        name: query.name,
        breed: query.breed,
        location: query.location,
        is_vaccinated: query.is_vaccinated,
        owner_ids,
    };

    let pets = state.pet_repository.list_filtered(&filter, pagination).await?;
    let items: Vec<PetResponse> = pets.items.into_iter().map(Into::into).collect();

    Ok(HttpResponse::Ok().json(ApiResponse::paginated(
        items,
        PaginationMeta {
            total_items: pets.total,
            current_page: pets.page,
            per_page: pets.per_page,
        },
    )))
}

pub async fn get_pet(
    pet_id: String,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let pet = state.pet_repository.get_by_id(pet_id).await?;
    let response: PetResponse = pet.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        models::{OrganizationProfile, Pet, Sex, Species, User},
        utils::generate_uuid,
    };
    use actix_web::body::to_bytes;
    use chrono::{NaiveDate, Utc};
    use serde_json::Value;

    fn pet(name: &str, species: Species, owner_id: &str) -> Pet {
        Pet {
            id: generate_uuid(),
            name: name.to_string(),
            species,
            breed: None,
            sex: Sex::Female,
            birth_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            location: None,
            is_vaccinated: true,
            description: None,
            health: None,
            profile_picture_url: None,
            gallery: vec![],
            owner_id: owner_id.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    async fn body_json(response: HttpResponse) -> Value {
        let bytes = to_bytes(response.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_list_pets_filters_by_species() {
        let state = web::ThinData(AppState::new());
        state.pet_repository.create(pet("Rex", Species::Dog, "u1")).await.unwrap();
        state.pet_repository.create(pet("Murka", Species::Cat, "u1")).await.unwrap();

        let query = PetFilterQuery {
            species: Some(Species::Cat),
            ..Default::default()
        };
        let response = list_pets(query, PaginationQuery::default(), state)
            .await
            .unwrap();
        let body = body_json(response).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Murka");
    }

    #[tokio::test]
    async fn test_list_pets_by_organization() {
        let state = web::ThinData(AppState::new());
        let organization = OrganizationProfile {
            id: generate_uuid(),
            name: "Shelter".to_string(),
            address: None,
            is_charity: true,
            logo_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let member = User {
            id: generate_uuid(),
            email: "member@example.com".to_string(),
            first_name: None,
            last_name: None,
            phone: None,
            organization_id: Some(organization.id.clone()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        state.organization_repository.create(organization.clone()).await.unwrap();
        state.user_repository.create(member.clone()).await.unwrap();
        state.pet_repository.create(pet("Rex", Species::Dog, &member.id)).await.unwrap();
        state.pet_repository.create(pet("Stray", Species::Dog, "someone")).await.unwrap();

        let query = PetFilterQuery {
            organization_id: Some(organization.id),
            ..Default::default()
        };
        let response = list_pets(query, PaginationQuery::default(), state)
            .await
            .unwrap();
        let body = body_json(response).await;
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["name"], "Rex");
    }

    #[tokio::test]
    async fn test_get_pet_embeds_age() {
        let state = web::ThinData(AppState::new());
        let created = state
            .pet_repository
            .create(pet("Rex", Species::Dog, "u1"))
            .await
            .unwrap();

        let response = get_pet(created.id, state).await.unwrap();
        let body = body_json(response).await;
        assert_eq!(body["data"]["name"], "Rex");
        assert!(body["data"]["age"].is_u64());
    }

    #[tokio::test]
    async fn test_get_missing_pet_is_not_found() {
        let state = web::ThinData(AppState::new());
        let result = get_pet("missing".to_string(), state).await;
        assert!(matches!(result, Err(ApiError::NotFound(_))));
    }
}
