//! Concern lookup.

use crate::catalog::{RemedyCatalog, RemedyRecord};

/// Result of resolving a free-text concern against the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome<'a> {
    /// The normalized concern is in the catalog
    Found {
        concern: String,
        remedies: &'a [RemedyRecord],
    },
    /// Non-empty concern with no catalog entry
    Unknown { concern: String },
    /// Nothing was entered
    Blank,
}

/// Trim and lowercase a user-entered concern
pub fn normalize_concern(raw: &str) -> String {
    raw.trim().to_lowercase()
}

impl RemedyCatalog {
    pub fn lookup(&self, raw_concern: &str) -> LookupOutcome<'_> {
        let concern = normalize_concern(raw_concern);
        if concern.is_empty() {
            return LookupOutcome::Blank;
        }

        match self.get(&concern) {
            Some(remedies) => {
                tracing::debug!("Found {} remedies for '{}'", remedies.len(), concern);
                LookupOutcome::Found { concern, remedies }
            }
            None => {
                tracing::debug!("No remedies for '{}'", concern);
                LookupOutcome::Unknown { concern }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> RemedyCatalog {
        RemedyCatalog::embedded().unwrap()
    }

    #[test]
    fn test_normalize_concern() {
        assert_eq!(normalize_concern("  Dry Skin \t"), "dry skin");
        assert_eq!(normalize_concern("ACNE"), "acne");
        assert_eq!(normalize_concern("   "), "");
    }

    #[test]
    fn test_lookup_ignores_case_and_whitespace() {
        let catalog = catalog();
        assert_eq!(catalog.lookup(" Acne "), catalog.lookup("acne"));
        assert_eq!(catalog.lookup("OILY SKIN"), catalog.lookup("oily skin"));
    }

    #[test]
    fn test_lookup_is_repeatable() {
        let catalog = catalog();
        let first = catalog.lookup("pigmentation");
        let second = catalog.lookup("pigmentation");
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_blackheads() {
        let catalog = catalog();
        match catalog.lookup("blackheads") {
            LookupOutcome::Found { concern, remedies } => {
                assert_eq!(concern, "blackheads");
                assert_eq!(remedies.len(), 2);
                assert_eq!(remedies[0].remedy, "Baking Soda Face Scrub");
                assert_eq!(remedies[0].ingredients, "1 tbsp baking soda, 1 tbsp water");
            }
            other => panic!("expected Found, got {:?}", other),
        }
    }

    #[test]
    fn test_every_known_concern_is_found() {
        let catalog = catalog();
        for key in ["acne", "dry skin", "pigmentation", "blackheads", "oily skin"] {
            assert!(
                matches!(catalog.lookup(key), LookupOutcome::Found { .. }),
                "{}",
                key
            );
        }
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = catalog();
        for raw in ["wrinkles", "acn", "dry  skin", "Eczema "] {
            assert!(
                matches!(catalog.lookup(raw), LookupOutcome::Unknown { .. }),
                "{}",
                raw
            );
        }
        assert_eq!(
            catalog.lookup("Eczema "),
            LookupOutcome::Unknown {
                concern: "eczema".to_string()
            }
        );
    }

    #[test]
    fn test_lookup_blank_is_not_unknown() {
        let catalog = catalog();
        assert_eq!(catalog.lookup(""), LookupOutcome::Blank);
        assert_eq!(catalog.lookup("  \n "), LookupOutcome::Blank);
    }
}
