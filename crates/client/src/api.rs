//! REST API client for the idolbase backend.
//!
//! Every call is a single `GET {api_base}{path}` whose JSON body is parsed
//! into the caller's type, using [`reqwest`]. There is no retry, timeout or
//! caching layer; concurrent calls are fully independent.

use serde::de::DeserializeOwned;

/// HTTP client for the idolbase API.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_base: String,
}

/// Errors from the API client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The API answered with a non-success status code.
    ///
    /// Deliberately carries no status or body: callers only learn that
    /// the request failed.
    #[error("API error")]
    Api,

    /// The request could not be sent or its body could not be read or
    /// decoded. The transport error is passed through unchanged.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// * `api_base` - Base URL every request path is appended to, e.g.
    ///   `http://localhost:8000/api`.
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), api_base)
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, api_base: impl Into<String>) -> Self {
        Self {
            client,
            api_base: api_base.into(),
        }
    }

    /// Base URL requests are issued against.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch `path` and parse the JSON body into `T`.
    ///
    /// `path` is appended to the base URL verbatim, so it should start
    /// with `/` and carry any query string already encoded.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.api_base, path);
        tracing::debug!(%url, "API request");

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "API request failed");
            return Err(ApiError::Api);
        }

        Ok(response.json::<T>().await?)
    }

    /// Fetch `path` and return the untyped JSON body.
    pub async fn get_json(&self, path: &str) -> Result<serde_json::Value, ApiError> {
        self.get(path).await
    }
}
