//! # User Controller
use crate::{
    models::{ApiError, ApiResponse, AppState, UserResponse},
    repositories::Repository,
};
use actix_web::{web, HttpResponse};

pub async fn get_user(
    user_id: String,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let user = state.user_repository.get_by_id(user_id).await?;
    let response: UserResponse = user.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
