//! This module defines the HTTP route for user lookups.
use crate::{
    api::controllers::user,
    models::{ApiResponse, AppState, UserResponse},
};
use actix_web::{get, web, Responder};

/// Retrieves details of a specific user by ID.
#[utoipa::path(
    get,
    path = "/api/v1/users/{user_id}",
    tag = "Users",
    operation_id = "getUser",
    security(("bearer_auth" = [])),
    params(
        ("user_id" = String, Path, description = "The unique identifier of the user")
    ),
    responses(
        (status = 200, description = "User details retrieved successfully", body = ApiResponse<UserResponse>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "User not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/users/{user_id}")]
pub async fn get_user(user_id: web::Path<String>, data: web::ThinData<AppState>) -> impl Responder {
    user::get_user(user_id.into_inner(), data).await
}

/// Initializes the user routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_user);
}
