use idolbase_client::ApiError;
use idolbase_core::CoreError;
use idolbase_router::RouterError;

/// Application-level error type for page loading and navigation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `idolbase_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The API request behind a page failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The route table could not be built.
    #[error(transparent)]
    Router(#[from] RouterError),

    /// The route table has no record for the path.
    #[error("No route matches '{path}'")]
    NoRoute { path: String },
}

/// Convenience type alias for page and navigation results.
pub type AppResult<T> = Result<T, AppError>;
