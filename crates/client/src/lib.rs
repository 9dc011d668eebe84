//! HTTP client for the idolbase JSON API.

pub mod api;

pub use api::{ApiClient, ApiError};
