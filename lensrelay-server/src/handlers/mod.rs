//! HTTP request handlers
//!
//! This module contains all the request handlers for the API endpoints.

pub mod health;
pub mod search;

pub use health::{health, HealthResponse};
pub use search::{method_not_allowed, preflight, search_handler};
