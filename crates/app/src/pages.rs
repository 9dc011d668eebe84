//! Page views.
//!
//! Each route renders one page view. A view loads the data its page needs
//! from the static catalog and/or the API and returns it as a [`Page`].

use async_trait::async_trait;
use serde::Serialize;

use idolbase_client::ApiClient;
use idolbase_core::media::thumbnail200;
use idolbase_core::types::IdolId;
use idolbase_core::{idols, Idol};
use idolbase_router::{Location, RouteParams};

use crate::error::AppResult;

/// What a page view needs to load its data.
pub struct PageContext<'a> {
    pub client: &'a ApiClient,
    pub media_base: &'a str,
    pub params: &'a RouteParams,
    pub location: &'a Location,
}

/// A view rendered for a route.
#[async_trait]
pub trait PageView: Send + Sync {
    /// Stable view name, e.g. `landing`.
    fn name(&self) -> &'static str;

    async fn load(&self, ctx: &PageContext<'_>) -> AppResult<Page>;
}

/// Display data of one idol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IdolCard {
    pub id: IdolId,
    pub slug: &'static str,
    pub name: &'static str,
    pub name_native: Option<&'static str>,
    /// 200px thumbnail URL, when the idol has an image.
    pub thumbnail: Option<String>,
}

impl IdolCard {
    pub fn new(idol: &Idol, media_base: &str) -> Self {
        Self {
            id: idol.id,
            slug: idol.slug,
            name: idol.name,
            name_native: idol.name_native,
            thumbnail: idol.image.map(|path| thumbnail200(media_base, path)),
        }
    }
}

/// Loaded page data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum Page {
    Landing {
        idols: Vec<IdolCard>,
    },
    Search {
        query: String,
        /// Raw API response; `None` when no query was given.
        results: Option<serde_json::Value>,
    },
    Idol {
        idol: IdolCard,
        detail: serde_json::Value,
    },
    NotFound {
        path: String,
    },
}

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Lists the whole catalog in display order.
pub struct LandingView;

#[async_trait]
impl PageView for LandingView {
    fn name(&self) -> &'static str {
        "landing"
    }

    async fn load(&self, ctx: &PageContext<'_>) -> AppResult<Page> {
        let idols = idols()
            .iter()
            .map(|idol| IdolCard::new(idol, ctx.media_base))
            .collect();
        Ok(Page::Landing { idols })
    }
}

/// Forwards the route query to the search endpoint.
pub struct SearchView;

#[async_trait]
impl PageView for SearchView {
    fn name(&self) -> &'static str {
        "search"
    }

    async fn load(&self, ctx: &PageContext<'_>) -> AppResult<Page> {
        let query = ctx.location.query.clone();
        if query.is_empty() {
            return Ok(Page::Search {
                query,
                results: None,
            });
        }

        let results = ctx.client.get_json(&format!("/search?{query}")).await?;
        Ok(Page::Search {
            query,
            results: Some(results),
        })
    }
}

/// Detail page of one idol, keyed by the `slug` route param.
///
/// Slugs missing from the catalog render the not-found page without
/// touching the API.
pub struct IdolView;

#[async_trait]
impl PageView for IdolView {
    fn name(&self) -> &'static str {
        "idol"
    }

    async fn load(&self, ctx: &PageContext<'_>) -> AppResult<Page> {
        let slug = ctx.params.get("slug").unwrap_or_default();
        let Some(idol) = idols().iter().find(|idol| idol.slug == slug) else {
            tracing::debug!(slug, "Unknown idol slug");
            return Ok(Page::NotFound {
                path: ctx.location.path.clone(),
            });
        };

        let detail = ctx.client.get_json(&format!("/idols/{}", idol.slug)).await?;
        Ok(Page::Idol {
            idol: IdolCard::new(idol, ctx.media_base),
            detail,
        })
    }
}

pub struct NotFoundView;

#[async_trait]
impl PageView for NotFoundView {
    fn name(&self) -> &'static str {
        "not_found"
    }

    async fn load(&self, ctx: &PageContext<'_>) -> AppResult<Page> {
        Ok(Page::NotFound {
            path: ctx.location.path.clone(),
        })
    }
}
