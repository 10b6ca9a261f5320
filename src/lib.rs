//! Pet Adoption and Marketplace Service Library
//!
//! This library provides the backend for a pet adoption platform: a breed
//! catalog with free-text range filtering, pet profiles, marketplace
//! listings and the users and organizations behind them. It includes:
//!
//! - Configuration and seed data management through JSON files
//! - A predicate-based breed filter over loosely formatted catalog text
//! - In-memory repositories behind an extensible repository trait
//! - A REST API with a uniform response envelope
//!
//! # Module Structure
//!
//! - `api`: HTTP routes and controllers
//! - `bootstrap`: Application state initialization and seeding
//! - `config`: Configuration management
//! - `constants`: Shared constant values
//! - `domain`: Business logic, including the breed filter predicates
//! - `logging`: Logging setup
//! - `models`: Data structures for configuration and API payloads
//! - `repositories`: Entity storage and retrieval
//! - `utils`: Common utilities and helper functions

pub mod api;
pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod domain;
pub mod logging;
pub mod models;
pub mod openapi;
pub mod repositories;
pub mod utils;

pub use models::{ApiError, AppState};
