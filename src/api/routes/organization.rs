//! This module defines the HTTP route for organization lookups.
use crate::{
    api::controllers::organization,
    models::{ApiResponse, AppState, OrganizationResponse},
};
use actix_web::{get, web, Responder};

/// Retrieves details of a specific organization by ID.
#[utoipa::path(
    get,
    path = "/api/v1/organizations/{organization_id}",
    tag = "Organizations",
    operation_id = "getOrganization",
    security(("bearer_auth" = [])),
    params(
        ("organization_id" = String, Path, description = "The unique identifier of the organization")
    ),
    responses(
        (status = 200, description = "Organization details retrieved successfully", body = ApiResponse<OrganizationResponse>),
        (status = 401, description = "Unauthorized", body = ApiResponse<String>),
        (status = 404, description = "Organization not found", body = ApiResponse<String>),
        (status = 500, description = "Internal server error", body = ApiResponse<String>),
    )
)]
#[get("/organizations/{organization_id}")]
pub async fn get_organization(
    organization_id: web::Path<String>,
    data: web::ThinData<AppState>,
) -> impl Responder {
    organization::get_organization(organization_id.into_inner(), data).await
}

/// Initializes the organization routes.
pub fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(get_organization);
}
