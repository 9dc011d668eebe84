//! Navigation entry point.

use serde::Serialize;

use idolbase_client::ApiClient;
use idolbase_core::catalog::{idols, validate_catalog};
use idolbase_router::{Location, Navigation, RouteParams, Router, ScrollDecision};

use crate::config::AppConfig;
use crate::error::{AppError, AppResult};
use crate::pages::{Page, PageContext};
use crate::routes::{app_router, BoxedView};

/// The application: configuration, API client and route table.
///
/// `App` is `Send + Sync`; navigations may run concurrently and do not
/// share any state besides the lazily built route components.
pub struct App {
    config: AppConfig,
    client: ApiClient,
    router: Router<BoxedView>,
}

/// The result of a navigation, ready to be displayed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rendered {
    /// Name of the matched route, if it has one.
    pub route: Option<&'static str>,
    /// Name of the page view that loaded the page.
    pub view: &'static str,
    pub params: RouteParams,
    pub location: Location,
    pub scroll: ScrollDecision,
    pub page: Page,
}

impl App {
    /// Build the application.
    ///
    /// Fails if the compiled-in catalog breaks its invariants or the route
    /// table does not parse.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        Self::with_client(ApiClient::new(config.api_base.clone()), config)
    }

    /// Build the application from `.env` and the process environment.
    ///
    /// This is the entry point for hosts; see [`AppConfig::load`].
    pub fn from_env() -> AppResult<Self> {
        Self::new(AppConfig::load())
    }

    /// Build the application around an existing API client.
    pub fn with_client(client: ApiClient, config: AppConfig) -> AppResult<Self> {
        Self::with_router(client, config, app_router()?)
    }

    /// Build the application with a custom route table.
    ///
    /// Without a catch-all record, unmatched paths make [`App::navigate`]
    /// fail with [`AppError::NoRoute`].
    pub fn with_router(
        client: ApiClient,
        config: AppConfig,
        router: Router<BoxedView>,
    ) -> AppResult<Self> {
        validate_catalog(idols())?;

        tracing::info!(
            api_base = %config.api_base,
            media_base = %config.media_base,
            idols = idols().len(),
            "Application initialized"
        );

        Ok(Self {
            config,
            client,
            router,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn router(&self) -> &Router<BoxedView> {
        &self.router
    }

    /// Resolve a navigation, decide the scroll position and load the page.
    ///
    /// API failures of the page view are returned as is; a superseded
    /// navigation is not cancelled.
    pub async fn navigate(&self, navigation: &Navigation) -> AppResult<Rendered> {
        let navigated = self
            .router
            .navigate(navigation)
            .ok_or_else(|| AppError::NoRoute {
                path: navigation.to.path.clone(),
            })?;

        let route = &navigated.route;
        let view = route.component();
        let ctx = PageContext {
            client: &self.client,
            media_base: &self.config.media_base,
            params: route.params(),
            location: route.location(),
        };
        let page = view.load(&ctx).await?;

        tracing::debug!(
            path = %navigation.to.path,
            view = view.name(),
            scroll = ?navigated.scroll,
            "Navigation complete"
        );

        Ok(Rendered {
            route: route.name(),
            view: view.name(),
            params: route.params().clone(),
            location: route.location().clone(),
            scroll: navigated.scroll,
            page,
        })
    }

    /// Navigate from the current location to `url` (link click / push).
    pub async fn visit(&self, from: &Location, url: &str) -> AppResult<Rendered> {
        self.navigate(&Navigation::push(from.clone(), url)).await
    }
}
