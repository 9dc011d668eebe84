//! Scroll restoration policy.

use serde::Serialize;

use crate::location::Location;

/// A scroll offset in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// What the host should do with the scroll position after a navigation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScrollDecision {
    /// Jump to a remembered position.
    Restore(ScrollPosition),
    /// Leave the page where it is.
    Keep,
    /// Scroll to the top, keeping the horizontal offset.
    Top,
}

impl ScrollDecision {
    /// The position the page ends up at when starting from `current`.
    pub fn apply(self, current: ScrollPosition) -> ScrollPosition {
        match self {
            Self::Restore(saved) => saved,
            Self::Keep => current,
            Self::Top => ScrollPosition::new(current.left, 0.0),
        }
    }
}

/// Signature of a scroll policy.
pub type ScrollBehaviorFn = fn(&Location, &Location, Option<ScrollPosition>) -> ScrollDecision;

/// Decide the scroll position for a navigation from `from` to `to`.
///
/// 1. A back / forward traversal with a remembered position restores it.
/// 2. Staying on the same path (only query or hash changed, e.g. an overlay
///    opened through the query) keeps the current position.
/// 3. Anything else scrolls to the top.
pub fn scroll_behavior(
    to: &Location,
    from: &Location,
    saved_position: Option<ScrollPosition>,
) -> ScrollDecision {
    if let Some(saved) = saved_position {
        return ScrollDecision::Restore(saved);
    }

    if to.path == from.path {
        return ScrollDecision::Keep;
    }

    ScrollDecision::Top
}
