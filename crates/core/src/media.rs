//! Media URL builder.
//!
//! Stored image paths point at the original upload (`.jpg`, `.png`, ...).
//! The media server publishes resized WebP thumbnails under
//! `/media/thumbnails/{size}/`, keeping the original path but swapping the
//! extension.

use std::sync::LazyLock;

use regex::Regex;

/// Edge length of the thumbnails shown in listings.
pub const THUMBNAIL_SIZE_200: u32 = 200;

/// Extension of every published thumbnail.
pub const THUMBNAIL_EXTENSION: &str = "webp";

/// A trailing `.<ext>` made of non-dot characters.
static EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[^.]+$").expect("valid regex"));

/// Build the URL of a thumbnail of the given size.
///
/// `media_base` and `path` are concatenated verbatim; a path without a
/// trailing extension keeps its name unchanged.
pub fn thumbnail_url(media_base: &str, path: &str, size: u32) -> String {
    let webp = EXTENSION_RE.replace(path, format!(".{THUMBNAIL_EXTENSION}"));
    format!("{media_base}/media/thumbnails/{size}/{webp}")
}

/// Build the URL of the 200px thumbnail for a stored image path.
///
/// # Examples
///
/// ```
/// use idolbase_core::media::thumbnail200;
///
/// assert_eq!(
///     thumbnail200("https://cdn.example", "kizuki-nao_thumb.jpg"),
///     "https://cdn.example/media/thumbnails/200/kizuki-nao_thumb.webp"
/// );
/// ```
pub fn thumbnail200(media_base: &str, path: &str) -> String {
    thumbnail_url(media_base, path, THUMBNAIL_SIZE_200)
}
