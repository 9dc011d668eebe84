//! Navigation targets.

use serde::Serialize;

use crate::scroll::ScrollPosition;

/// A URL split into the parts the router cares about.
///
/// Only `path` takes part in route matching; `query` and `hash` are kept
/// without their leading `?` / `#`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: String,
    pub hash: String,
}

impl Location {
    /// Split a URL such as `/idol/kizuki-nao?photo=3#top`.
    ///
    /// An empty path is normalized to `/`.
    pub fn parse(url: &str) -> Self {
        let (rest, hash) = url.split_once('#').unwrap_or((url, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Self {
            path: if path.is_empty() { "/" } else { path }.to_string(),
            query: query.to_string(),
            hash: hash.to_string(),
        }
    }

    /// Reassemble the location into a URL.
    pub fn full_path(&self) -> String {
        let mut url = self.path.clone();
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(&self.query);
        }
        if !self.hash.is_empty() {
            url.push('#');
            url.push_str(&self.hash);
        }
        url
    }
}

impl From<&str> for Location {
    fn from(url: &str) -> Self {
        Self::parse(url)
    }
}

/// A single navigation from one location to another.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub to: Location,
    pub from: Location,
    /// Scroll position remembered for `to`. Only present when the navigation
    /// is a history traversal (back / forward).
    pub saved_position: Option<ScrollPosition>,
}

impl Navigation {
    /// A regular navigation (link click, programmatic push or replace).
    pub fn push(from: impl Into<Location>, to: impl Into<Location>) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            saved_position: None,
        }
    }

    /// A back / forward traversal to an entry with a remembered position.
    pub fn traverse(
        from: impl Into<Location>,
        to: impl Into<Location>,
        saved_position: ScrollPosition,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            saved_position: Some(saved_position),
        }
    }

    /// The initial navigation when the application starts.
    pub fn initial(to: impl Into<Location>) -> Self {
        Self::push(Location::parse("/"), to)
    }
}
