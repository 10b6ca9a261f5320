//! Integration tests for the breed catalog API.
//!
//! These tests run the real route configuration against a seeded in-memory
//! state and exercise the free-text range filters through HTTP query
//! parameters, the way a storefront client would.
use actix_web::{test, web, App};
use ruchky_api::{
    api::routes::configure_routes,
    bootstrap::process_config_file,
    config::{BreedFileConfig, SeedConfig},
    models::{AppState, Species},
};
use serde_json::{json, Value};

fn breed_entry(
    id: &str,
    name: &str,
    species: Species,
    life_span: &str,
    weight: &str,
) -> BreedFileConfig {
    BreedFileConfig {
        id: id.to_string(),
        name: name.to_string(),
        species,
        description: Some(format!("{name} description")),
        origin: Some("United Kingdom".to_string()),
        life_span: Some(life_span.to_string()),
        weight: Some(weight.to_string()),
        is_active: true,
        image_url: None,
    }
}

async fn seeded_state() -> web::ThinData<AppState> {
    let state = web::ThinData(AppState::new());
    let config = SeedConfig {
        breeds: vec![
            breed_entry(
                "breed-1",
                "Labrador Retriever",
                Species::Dog,
                "10 - 12 years",
                "25 - 36 kg",
            ),
            breed_entry("breed-2", "Beagle", Species::Dog, "12 to 15 years", "9 - 11 kg"),
            breed_entry("breed-3", "Great Dane", Species::Dog, "7 - 10 years", "50 - 80 kg"),
            breed_entry("breed-4", "Siamese", Species::Cat, "15 - 20 years", "4 - 6 kg"),
        ],
        ..Default::default()
    };
    process_config_file(config, &state).await.unwrap();
    state
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["name"].as_str().unwrap().to_string())
        .collect()
}

#[actix_web::test]
async fn test_list_breeds_without_criteria_returns_catalog() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/v1/breeds").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["pagination"]["total_items"], 4);
    // Ordered by (species, name): cats before dogs.
    assert_eq!(
        names(&body),
        vec!["Siamese", "Beagle", "Great Dane", "Labrador Retriever"]
    );
}

#[actix_web::test]
async fn test_list_breeds_life_span_and_weight_filters() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/breeds?min_life_span=12")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(names(&body), vec!["Siamese", "Beagle"]);

    let req = test::TestRequest::get()
        .uri("/api/v1/breeds?species=dog&weight=5-10")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(names(&body), vec!["Beagle"]);

    // Malformed numeric input is dropped, not an error.
    let req = test::TestRequest::get()
        .uri("/api/v1/breeds?min_life_span=ten&weight=abc-def")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["total_items"], 4);
}

#[actix_web::test]
async fn test_breed_crud_round_trip() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/v1/breeds")
        .set_json(json!({
            "name": "Poodle",
            "species": "dog",
            "life_span": "12 - 15 years",
            "weight": "20 - 32 kg"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);
    let created: Value = test::read_body_json(resp).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    // Duplicate (name, species) is rejected.
    let req = test::TestRequest::post()
        .uri("/api/v1/breeds")
        .set_json(json!({ "name": "poodle", "species": "dog" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let req = test::TestRequest::patch()
        .uri(&format!("/api/v1/breeds/{id}"))
        .set_json(json!({ "is_active": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Inactive breeds drop out of the listing.
    let req = test::TestRequest::get()
        .uri("/api/v1/breeds?search=poodle")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["total_items"], 0);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/v1/breeds/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri(&format!("/api/v1/breeds/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn test_pagination_meta() {
    let state = seeded_state().await;
    let app = test::init_service(
        App::new()
            .app_data(state)
            .service(web::scope("/api/v1").configure(configure_routes)),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/breeds?page=2&per_page=3")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["pagination"]["current_page"], 2);
    assert_eq!(body["pagination"]["per_page"], 3);
    assert_eq!(body["pagination"]["total_items"], 4);
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}
