//! # Domain Module
//!
//! Business logic that sits between the HTTP layer and the repositories.

mod breed_filter;
pub use breed_filter::*;
