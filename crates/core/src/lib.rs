//! Idolbase domain core.
//!
//! Holds the static idol catalog, the rules its records obey, and the
//! media URL builder used to display idol thumbnails.

pub mod catalog;
pub mod error;
pub mod idol;
pub mod media;
pub mod slug;
pub mod types;

pub use catalog::{idols, IDOLS};
pub use error::CoreError;
pub use idol::Idol;
pub use media::thumbnail200;
