//! Initialization routines for the adoption service
//!
//! This module contains functions for initializing the application state and
//! populating the repositories from the seed data file.
//!
//! # Submodules
//!
//! - `config_processor`: Functions for seeding repositories from the config file
//! - `initialize_app_state`: Functions for initializing application state
mod config_processor;
pub use config_processor::*;

mod initialize_app_state;
pub use initialize_app_state::*;
