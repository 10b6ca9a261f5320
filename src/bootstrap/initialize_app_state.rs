//! Application state initialization
//!
//! This module contains functions for initializing the application state,
//! including setting up the per-entity repositories.
use crate::models::AppState;
use actix_web::web;
use color_eyre::Result;

/// Creates the application state shared across workers.
///
/// # Returns
///
/// * `Result<web::ThinData<AppState>>` - Initialized application state
pub async fn initialize_app_state() -> Result<web::ThinData<AppState>> {
    Ok(web::ThinData(AppState::new()))
}
