//! # API Routes Module
//!
//! Configures HTTP routes for the adoption service API.
//!
//! ## Routes
//!
//! * `/health` - Health check endpoint
//! * `/breeds` - Breed catalog endpoints
//! * `/pets` - Pet profile endpoints
//! * `/listings` - Marketplace listing endpoints
//! * `/users` - User lookup endpoint
//! * `/organizations` - Organization lookup endpoint

pub mod breed;
pub mod health;
pub mod listing;
pub mod organization;
pub mod pet;
pub mod user;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(health::init)
        .configure(breed::init)
        .configure(pet::init)
        .configure(listing::init)
        .configure(user::init)
        .configure(organization::init);
}
