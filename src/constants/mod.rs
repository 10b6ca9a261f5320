//! This module contains all the constant values used in the system
mod authorization;
pub use authorization::*;

mod breed_filter;
pub use breed_filter::*;

mod public_endpoints;
pub use public_endpoints::*;

mod validation;
pub use validation::*;
