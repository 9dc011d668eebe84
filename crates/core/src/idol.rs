use serde::Serialize;

use crate::types::IdolId;

/// A single idol record of the catalog.
///
/// Records are compiled into the binary, so every text field borrows
/// `'static` data and the whole record is `Copy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Idol {
    pub id: IdolId,
    /// Kebab-case routing key of the detail page (`/idol/{slug}`).
    pub slug: &'static str,
    /// Latin-script display name.
    pub name: &'static str,
    /// Display name in the idol's native script.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_native: Option<&'static str>,
    /// Relative path of the source image asset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<&'static str>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_optional_fields_only_when_present() {
        let idol = Idol {
            id: 42,
            slug: "test-idol",
            name: "Idol Test",
            name_native: None,
            image: None,
        };

        let json = serde_json::to_value(idol).unwrap();

        assert_eq!(json["id"], 42);
        assert_eq!(json["slug"], "test-idol");
        assert!(json.get("name_native").is_none());
        assert!(json.get("image").is_none());
    }
}
