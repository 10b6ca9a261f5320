//! Integration tests for the adoption service.

mod breed_api;
mod listing_api;
mod logging;
