//! # Models Module
//!
//! Core data structures and type definitions for the pet marketplace service.

mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod breed;
pub use breed::*;

mod error;
pub use error::*;

mod listing;
pub use listing::*;

mod organization;
pub use organization::*;

mod pagination;
pub use pagination::*;

mod pet;
pub use pet::*;

mod secret_string;
pub use secret_string::*;

mod user;
pub use user::*;
