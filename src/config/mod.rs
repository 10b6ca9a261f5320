//! Configuration system for the adoption API.
//!
//! This module handles:
//! - Loading and parsing the seed data file
//! - Environment variable integration
//! - Configuration validation
//! - Type-safe config access
//!
//! # Structure
//!
//! Configuration is organized into sections:
//! - Organizations: Shelters and breeders operating on the platform
//! - Users: Accounts referenced by pets and listings
//! - Breeds: The breed catalog, including free-text life span and weight
//! - Pets: Pet profiles with owner references
//! - Listings: Marketplace listings, one per pet
mod server_config;
pub use server_config::*;

mod seed_file;
pub use seed_file::*;

mod rate_limit;
pub use rate_limit::*;

mod error;
pub use error::*;
