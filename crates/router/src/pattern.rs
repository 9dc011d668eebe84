//! Route path patterns.
//!
//! Supported syntax:
//!
//! - `/search` static segments, compared ASCII case-insensitively;
//! - `/idol/:slug` a named parameter capturing exactly one non-empty segment;
//! - `/:pathMatch(.*)*` a catch-all capturing the rest of the path. It must
//!   be the last segment.
//!
//! One trailing slash on the matched path is tolerated.

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;
use serde::Serialize;

use crate::error::RouterError;

/// Suffix marking a parameter as catch-all.
const CATCH_ALL_SUFFIX: &str = "(.*)*";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

/// A parsed route pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

/// Parameters captured while matching a path, percent-decoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Store `raw` decoded. Escapes that do not decode to UTF-8 keep the
    /// raw text.
    fn insert(&mut self, name: &str, raw: &str) {
        let value = percent_decode_str(raw)
            .decode_utf8()
            .map(|decoded| decoded.into_owned())
            .unwrap_or_else(|_| raw.to_string());
        self.0.insert(name.to_string(), value);
    }
}

impl PathPattern {
    /// Parse a pattern such as `/idol/:slug`.
    pub fn parse(pattern: &str) -> Result<Self, RouterError> {
        let invalid = |reason| RouterError::InvalidPattern {
            pattern: pattern.to_string(),
            reason,
        };

        if !pattern.starts_with('/') {
            return Err(invalid("must start with '/'"));
        }

        let raw: Vec<&str> = split_segments(pattern);
        let mut segments = Vec::with_capacity(raw.len());

        for (index, part) in raw.iter().enumerate() {
            let segment = match part.strip_prefix(':') {
                Some(param) => match param.strip_suffix(CATCH_ALL_SUFFIX) {
                    Some(name) => {
                        if index + 1 != raw.len() {
                            return Err(invalid("catch-all must be the last segment"));
                        }
                        Segment::CatchAll(parse_name(name).ok_or_else(|| invalid("bad name"))?)
                    }
                    None => Segment::Param(parse_name(param).ok_or_else(|| invalid("bad name"))?),
                },
                None if part.is_empty() => return Err(invalid("empty segment")),
                None => Segment::Static(part.to_ascii_lowercase()),
            };
            segments.push(segment);
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match `path` (without query or hash), returning captured params.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let parts = split_segments(path);
        let mut params = RouteParams::default();

        for (index, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    let part = parts.get(index)?;
                    if !part.eq_ignore_ascii_case(expected) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let part = parts.get(index).filter(|p| !p.is_empty())?;
                    params.insert(name, part);
                }
                Segment::CatchAll(name) => {
                    let rest = parts.get(index..).unwrap_or_default().join("/");
                    params.insert(name, &rest);
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

/// Split a path into segments, ignoring the leading slash and one
/// trailing slash. The root path has no segments.
fn split_segments(path: &str) -> Vec<&str> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split('/').collect()
    }
}

fn parse_name(name: &str) -> Option<String> {
    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then(|| name.to_string())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn pattern(p: &str) -> PathPattern {
        PathPattern::parse(p).unwrap()
    }

    // -- parse ---------------------------------------------------------------

    #[test]
    fn rejects_relative_pattern() {
        assert_matches!(
            PathPattern::parse("search"),
            Err(RouterError::InvalidPattern { .. })
        );
    }

    #[test]
    fn rejects_catch_all_before_last_segment() {
        assert_matches!(
            PathPattern::parse("/:rest(.*)*/tail"),
            Err(RouterError::InvalidPattern { reason: "catch-all must be the last segment", .. })
        );
    }

    #[test]
    fn rejects_empty_param_name() {
        assert!(PathPattern::parse("/idol/:").is_err());
    }

    #[test]
    fn rejects_empty_segment() {
        assert!(PathPattern::parse("/idol//x").is_err());
    }

    // -- static --------------------------------------------------------------

    #[test]
    fn root_matches_only_root() {
        let root = pattern("/");
        assert!(root.matches("/").is_some());
        assert!(root.matches("/search").is_none());
    }

    #[test]
    fn static_match_ignores_case_and_trailing_slash() {
        let search = pattern("/search");
        assert!(search.matches("/search").is_some());
        assert!(search.matches("/Search/").is_some());
        assert!(search.matches("/search/more").is_none());
        assert!(search.matches("/searching").is_none());
    }

    // -- params --------------------------------------------------------------

    #[test]
    fn captures_named_param() {
        let params = pattern("/idol/:slug").matches("/idol/haruno-riri").unwrap();
        assert_eq!(params.get("slug"), Some("haruno-riri"));
    }

    #[test]
    fn param_requires_a_segment() {
        let idol = pattern("/idol/:slug");
        assert!(idol.matches("/idol").is_none());
        assert!(idol.matches("/idol/").is_none());
        assert!(idol.matches("/idol/a/b").is_none());
    }

    #[test]
    fn param_is_percent_decoded() {
        let params = pattern("/idol/:slug").matches("/idol/nao%20kizuki").unwrap();
        assert_eq!(params.get("slug"), Some("nao kizuki"));
    }

    #[test]
    fn undecodable_param_keeps_raw_text() {
        let params = pattern("/idol/:slug").matches("/idol/%FF").unwrap();
        assert_eq!(params.get("slug"), Some("%FF"));
    }

    #[test]
    fn undecodable_catch_all_keeps_raw_text() {
        let params = pattern("/:pathMatch(.*)*").matches("/a/%C3%28").unwrap();
        assert_eq!(params.get("pathMatch"), Some("a/%C3%28"));
    }

    // -- catch-all -----------------------------------------------------------

    #[test]
    fn catch_all_captures_rest() {
        let params = pattern("/:pathMatch(.*)*").matches("/unknown/path").unwrap();
        assert_eq!(params.get("pathMatch"), Some("unknown/path"));
    }

    #[test]
    fn catch_all_matches_root_with_empty_capture() {
        let params = pattern("/:pathMatch(.*)*").matches("/").unwrap();
        assert_eq!(params.get("pathMatch"), Some(""));
    }

    #[test]
    fn catch_all_after_static_prefix() {
        let files = pattern("/files/:rest(.*)*");
        assert_eq!(
            files.matches("/files/a/b.txt").unwrap().get("rest"),
            Some("a/b.txt")
        );
        assert!(files.matches("/other/a").is_none());
    }
}
