//! Property-based tests for the adoption service.

mod logging;
mod range_predicates;
