//! Idolbase application library.
//!
//! Ties the static catalog, the API client and the router together: a
//! navigation is resolved to a page view, which loads the page data.

pub mod app;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;

pub use app::{App, Rendered};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
