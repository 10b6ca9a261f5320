//! Integration tests for the marketplace listing API.
use actix_web::{test, web, App};
use chrono::NaiveDate;
use ruchky_api::{
    api::routes::configure_routes,
    bootstrap::process_config_file,
    config::{
        ListingFileConfig, OrganizationFileConfig, PetFileConfig, SeedConfig, UserFileConfig,
    },
    models::{AppState, ListingStatus, Sex, Species},
};
use serde_json::Value;

fn seed() -> SeedConfig {
    SeedConfig {
        organizations: vec![OrganizationFileConfig {
            id: "org-1".to_string(),
            name: "Happy Paws Shelter".to_string(),
            address: None,
            is_charity: true,
            logo_url: None,
        }],
        users: vec![
            UserFileConfig {
                id: "user-shelter".to_string(),
                email: "shelter@example.com".to_string(),
                first_name: None,
                last_name: None,
                phone: None,
                organization_id: Some("org-1".to_string()),
            },
            UserFileConfig {
                id: "user-private".to_string(),
                email: "private@example.com".to_string(),
                first_name: None,
                last_name: None,
                phone: None,
                organization_id: None,
            },
        ],
        breeds: vec![],
        pets: vec![
            PetFileConfig {
                id: "pet-rex".to_string(),
                name: "Rex".to_string(),
                species: Species::Dog,
                breed: Some("Labrador Retriever".to_string()),
                sex: Sex::Male,
                birth_date: NaiveDate::from_ymd_opt(2021, 4, 1).unwrap(),
                location: Some("Kyiv".to_string()),
                is_vaccinated: true,
                description: None,
                health: None,
                profile_picture_url: None,
                gallery: vec![],
                owner_id: "user-shelter".to_string(),
            },
            PetFileConfig {
                id: "pet-murka".to_string(),
                name: "Murka".to_string(),
                species: Species::Cat,
                breed: Some("Siamese".to_string()),
                sex: Sex::Female,
                birth_date: NaiveDate::from_ymd_opt(2022, 8, 15).unwrap(),
                location: Some("Lviv".to_string()),
                is_vaccinated: false,
                description: None,
                health: None,
                profile_picture_url: None,
                gallery: vec![],
                owner_id: "user-private".to_string(),
            },
        ],
        listings: vec![
            ListingFileConfig {
                id: "listing-rex".to_string(),
                pet_id: "pet-rex".to_string(),
                title: "Rex is looking for a home".to_string(),
                status: ListingStatus::Active,
                price: None,
            },
            ListingFileConfig {
                id: "listing-murka".to_string(),
                pet_id: "pet-murka".to_string(),
                title: "Siamese kitten".to_string(),
                status: ListingStatus::Sold,
                price: Some(500),
            },
        ],
    }
}

async fn seeded_state() -> web::ThinData<AppState> {
    let state = web::ThinData(AppState::new());
    process_config_file(seed(), &state).await.unwrap();
    state
}

fn listing_ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_listings_default_to_active() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/listings").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(listing_ids(&body), vec!["listing-rex"]);
    // The pet record is embedded in the listing response.
    assert_eq!(body["data"][0]["pet"]["name"], "Rex");

    let req = test::TestRequest::get()
        .uri("/api/v1/listings?status=sold")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(listing_ids(&body), vec!["listing-murka"]);
}

#[actix_web::test]
async fn test_listings_join_organization_criteria() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/listings?organization_name=happy%20paws&is_charity=true")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(listing_ids(&body), vec!["listing-rex"]);

    // An unknown organization matches nothing rather than erroring.
    let req = test::TestRequest::get()
        .uri("/api/v1/listings?organization_name=nonexistent")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["total_items"], 0);
}

#[actix_web::test]
async fn test_get_listing_increments_views() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    for expected in 1..=3u64 {
        let req = test::TestRequest::get()
            .uri("/api/v1/listings/listing-rex")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["views_count"], expected);
    }
}
