//! The application's route table.

use idolbase_router::{Component, RouteRecord, Router, RouterError};

use crate::pages::{IdolView, LandingView, NotFoundView, PageView, SearchView};

/// Boxed page view stored in the route table.
pub type BoxedView = Box<dyn PageView>;

pub const LANDING_ROUTE: &str = "landing";
pub const NOT_FOUND_ROUTE: &str = "NotFound";

/// Build the route table.
///
/// | Path                | View      | Loading |
/// |---------------------|-----------|---------|
/// | `/`                 | landing   | eager   |
/// | `/search`           | search    | lazy    |
/// | `/idol/:slug`       | idol      | lazy    |
/// | anything else       | not found | lazy    |
pub fn app_router() -> Result<Router<BoxedView>, RouterError> {
    Ok(Router::new(vec![
        RouteRecord::new("/", Component::eager(Box::new(LandingView) as BoxedView))?
            .named(LANDING_ROUTE),
        RouteRecord::new("/search", Component::lazy(search_view))?,
        RouteRecord::new("/idol/:slug", Component::lazy(idol_view))?,
        RouteRecord::new("/:pathMatch(.*)*", Component::lazy(not_found_view))?
            .named(NOT_FOUND_ROUTE),
    ]))
}

fn search_view() -> BoxedView {
    Box::new(SearchView)
}

fn idol_view() -> BoxedView {
    Box::new(IdolView)
}

fn not_found_view() -> BoxedView {
    Box::new(NotFoundView)
}
