/// Default API origin for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000/api";

/// Default media origin for local development.
pub const DEFAULT_MEDIA_BASE: &str = "http://localhost:8000";

/// Base URLs the application talks to.
///
/// Both values are used verbatim: request paths and media paths are
/// appended to them without inserting or removing slashes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Origin of API reads (`GET {api_base}{path}`).
    pub api_base: String,
    /// Origin of media URLs (`{media_base}/media/...`).
    pub media_base: String,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var      | Default                       |
    /// |--------------|-------------------------------|
    /// | `API_BASE`   | `http://localhost:8000/api`   |
    /// | `MEDIA_BASE` | `http://localhost:8000`       |
    pub fn from_env() -> Self {
        let api_base = std::env::var("API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.into());
        let media_base =
            std::env::var("MEDIA_BASE").unwrap_or_else(|_| DEFAULT_MEDIA_BASE.into());

        Self {
            api_base,
            media_base,
        }
    }

    /// Load a `.env` file if one exists, then read the environment.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            media_base: DEFAULT_MEDIA_BASE.to_string(),
        }
    }
}
