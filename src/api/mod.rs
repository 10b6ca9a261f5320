//! # API Module
//!
//! HTTP surface of the service: route registration and request handlers.

pub mod controllers;
pub mod routes;
