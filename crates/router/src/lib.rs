//! Client-side router.
//!
//! Maps URL paths to route components and decides, for every navigation,
//! where the page should be scrolled.

pub mod component;
pub mod error;
pub mod location;
pub mod pattern;
pub mod router;
pub mod scroll;

pub use component::Component;
pub use error::RouterError;
pub use location::{Location, Navigation};
pub use pattern::{PathPattern, RouteParams};
pub use router::{Navigated, RouteMatch, RouteRecord, Router};
pub use scroll::{scroll_behavior, ScrollBehaviorFn, ScrollDecision, ScrollPosition};
