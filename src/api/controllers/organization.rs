//! # Organization Controller
use crate::{
    models::{ApiError, ApiResponse, AppState, OrganizationResponse},
    repositories::Repository,
};
use actix_web::{web, HttpResponse};

pub async fn get_organization(
    organization_id: String,
    state: web::ThinData<AppState>,
) -> Result<HttpResponse, ApiError> {
    let organization = state
        .organization_repository
        .get_by_id(organization_id)
        .await?;
    let response: OrganizationResponse = organization.into();

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}
