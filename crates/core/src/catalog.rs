//! The static idol catalog.
//!
//! The catalog is a literal table compiled into the binary. Declaration
//! order is the canonical display order; nothing mutates it at runtime.
//! Lookups by slug or id are left to callers.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::idol::Idol;
use crate::slug::validate_slug;

/// Every idol known to the application, in display order.
pub static IDOLS: &[Idol] = &[
    Idol {
        id: 1,
        slug: "kizuki-nao",
        name: "Nao Kizuki",
        name_native: Some("城月菜央"),
        image: Some("/media/idols/kizuki-nao_thumb.jpg"),
    },
    Idol {
        id: 2,
        slug: "suzumi-su",
        name: "Su Suzumi",
        name_native: Some("涼海すう"),
        image: Some("/media/idols/suzumi-su_thumb.jpg"),
    },
    Idol {
        id: 3,
        slug: "hashimoto-momoko",
        name: "Momoko Hashimoto",
        name_native: Some("橋本桃呼"),
        image: Some("/media/idols/hashimoto-momoko_thumb.jpg"),
    },
    Idol {
        id: 4,
        slug: "hazuki-saara",
        name: "Saara Hazuki",
        name_native: Some("葉月紗蘭"),
        image: Some("/media/idols/hazuki-saara_thumb.jpg"),
    },
    Idol {
        id: 5,
        slug: "higashiyama-erisa",
        name: "Erisa Higashiyama",
        name_native: Some("東山恵里沙"),
        image: Some("/media/idols/higashiyama-erisa_thumb.jpg"),
    },
    Idol {
        id: 6,
        slug: "hinahata-hina",
        name: "Hina Hinahata",
        name_native: Some("日向端ひな"),
        image: Some("/media/idols/hinahata-hina_thumb.jpg"),
    },
    Idol {
        id: 7,
        slug: "hoshitani-mikuru",
        name: "Mikuru Hoshitani",
        name_native: Some("星谷美来"),
        image: Some("/media/idols/hoshitani-mikuru_thumb.jpg"),
    },
    Idol {
        id: 8,
        slug: "matsumoto-momona",
        name: "Momona Matsumoto",
        name_native: Some("松本ももな"),
        image: Some("/media/idols/matsumoto-momona_thumb.jpg"),
    },
    Idol {
        id: 9,
        slug: "momiyama-himeri",
        name: "Himeri Momiyama",
        name_native: Some("籾山ひめり"),
        image: Some("/media/idols/momiyama-himeri_thumb.jpg"),
    },
    Idol {
        id: 10,
        slug: "haruno-riri",
        name: "Riri Haruno",
        name_native: Some("春野莉々"),
        image: Some("/media/idols/haruno-riri_thumb.jpg"),
    },
];

/// The catalog as a slice, in display order.
pub fn idols() -> &'static [Idol] {
    IDOLS
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check the catalog invariants over `records`.
///
/// Every id must be positive and every slug valid; ids and slugs must
/// each be unique. The first violation found is returned.
pub fn validate_catalog(records: &[Idol]) -> Result<(), CoreError> {
    let mut ids = HashSet::with_capacity(records.len());
    let mut slugs = HashSet::with_capacity(records.len());

    for idol in records {
        if idol.id <= 0 {
            return Err(CoreError::Validation(format!(
                "idol id must be positive, got {} for '{}'",
                idol.id, idol.slug
            )));
        }
        validate_slug(idol.slug)?;

        if !ids.insert(idol.id) {
            return Err(CoreError::Validation(format!(
                "duplicate idol id {}",
                idol.id
            )));
        }
        if !slugs.insert(idol.slug) {
            return Err(CoreError::Validation(format!(
                "duplicate idol slug '{}'",
                idol.slug
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn idol(id: i64, slug: &'static str) -> Idol {
        Idol {
            id,
            slug,
            name: "Test Idol",
            name_native: None,
            image: None,
        }
    }

    // -- catalog contents ----------------------------------------------------

    #[test]
    fn catalog_satisfies_invariants() {
        assert!(validate_catalog(idols()).is_ok());
    }

    #[test]
    fn catalog_has_ten_records() {
        assert_eq!(idols().len(), 10);
    }

    #[test]
    fn first_record_is_kizuki_nao() {
        let first = idols().first().unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(first.slug, "kizuki-nao");
        assert_eq!(first.name, "Nao Kizuki");
    }

    #[test]
    fn last_record_is_haruno_riri() {
        let last = idols().last().unwrap();
        assert_eq!(last.id, 10);
        assert_eq!(last.slug, "haruno-riri");
        assert_eq!(last.name, "Riri Haruno");
    }

    #[test]
    fn order_follows_declaration() {
        let ids: Vec<i64> = idols().iter().map(|i| i.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn every_record_has_native_name_and_image() {
        for idol in idols() {
            assert!(idol.name_native.is_some(), "{} has no native name", idol.slug);
            let image = idol.image.unwrap();
            assert!(image.contains(idol.slug), "{image} does not match {}", idol.slug);
        }
    }

    // -- validate_catalog ----------------------------------------------------

    #[test]
    fn empty_catalog_is_valid() {
        assert!(validate_catalog(&[]).is_ok());
    }

    #[test]
    fn rejects_duplicate_id() {
        let records = [idol(1, "a"), idol(1, "b")];
        let err = validate_catalog(&records).unwrap_err();
        assert!(err.to_string().contains("duplicate idol id 1"));
    }

    #[test]
    fn rejects_duplicate_slug() {
        let records = [idol(1, "same"), idol(2, "same")];
        let err = validate_catalog(&records).unwrap_err();
        assert!(err.to_string().contains("duplicate idol slug 'same'"));
    }

    #[test]
    fn rejects_non_positive_id() {
        assert!(validate_catalog(&[idol(0, "zero")]).is_err());
        assert!(validate_catalog(&[idol(-3, "negative")]).is_err());
    }

    #[test]
    fn rejects_invalid_slug() {
        assert!(validate_catalog(&[idol(1, "Not A Slug")]).is_err());
    }
}
