//! Route table and resolution.

use crate::component::Component;
use crate::error::RouterError;
use crate::location::{Location, Navigation};
use crate::pattern::{PathPattern, RouteParams};
use crate::scroll::{scroll_behavior, ScrollBehaviorFn, ScrollDecision};

/// One entry of the route table.
#[derive(Debug)]
pub struct RouteRecord<T> {
    pattern: PathPattern,
    name: Option<&'static str>,
    component: Component<T>,
}

impl<T> RouteRecord<T> {
    pub fn new(path: &str, component: Component<T>) -> Result<Self, RouterError> {
        Ok(Self {
            pattern: PathPattern::parse(path)?,
            name: None,
            component,
        })
    }

    /// Give the route a name.
    pub fn named(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    pub fn path(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn component(&self) -> &Component<T> {
        &self.component
    }
}

/// A location matched against a route record.
#[derive(Debug)]
pub struct RouteMatch<'a, T> {
    record: &'a RouteRecord<T>,
    params: RouteParams,
    location: Location,
}

impl<'a, T> RouteMatch<'a, T> {
    pub fn record(&self) -> &'a RouteRecord<T> {
        self.record
    }

    pub fn name(&self) -> Option<&'static str> {
        self.record.name
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name)
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// The matched component, loading it if the route is lazy.
    pub fn component(&self) -> &'a T {
        self.record.component.get()
    }
}

/// Outcome of a navigation: where it landed and how to scroll.
#[derive(Debug)]
pub struct Navigated<'a, T> {
    pub route: RouteMatch<'a, T>,
    pub scroll: ScrollDecision,
}

/// Maps paths to components and applies the scroll policy.
///
/// Records are tried in declaration order and the first match wins, so a
/// catch-all belongs at the end of the table.
pub struct Router<T> {
    routes: Vec<RouteRecord<T>>,
    scroll_behavior: ScrollBehaviorFn,
}

impl<T> Router<T> {
    pub fn new(routes: Vec<RouteRecord<T>>) -> Self {
        Self {
            routes,
            scroll_behavior,
        }
    }

    /// Replace the default scroll policy.
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehaviorFn) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    pub fn routes(&self) -> &[RouteRecord<T>] {
        &self.routes
    }

    /// Find the first record matching the location's path.
    pub fn resolve(&self, location: &Location) -> Option<RouteMatch<'_, T>> {
        let matched = self.routes.iter().find_map(|record| {
            record
                .pattern
                .matches(&location.path)
                .map(|params| RouteMatch {
                    record,
                    params,
                    location: location.clone(),
                })
        });

        match &matched {
            Some(m) => tracing::debug!(
                path = %location.path,
                route = m.record.path(),
                "Resolved route"
            ),
            None => tracing::debug!(path = %location.path, "No route matched"),
        }

        matched
    }

    /// Resolve the destination of a navigation and decide the scroll position.
    pub fn navigate(&self, navigation: &Navigation) -> Option<Navigated<'_, T>> {
        let route = self.resolve(&navigation.to)?;
        let scroll = (self.scroll_behavior)(
            &navigation.to,
            &navigation.from,
            navigation.saved_position,
        );
        Some(Navigated { route, scroll })
    }
}
