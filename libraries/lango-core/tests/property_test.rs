//! Property-based tests for username and slug validation

use lango_core::username::USERNAME_FORMAT_MESSAGE;
use lango_core::{normalize_slug, Username};
use proptest::prelude::*;

proptest! {
    /// Property: every 3-20 char string over [a-z0-9_] is accepted unchanged
    #[test]
    fn valid_usernames_are_accepted(candidate in "[a-z0-9_]{3,20}") {
        let username = Username::parse(&candidate).unwrap();
        prop_assert_eq!(username.as_str(), candidate.as_str());
    }

    /// Property: case and surrounding whitespace never change the outcome
    #[test]
    fn normalization_ignores_case_and_padding(
        candidate in "[a-zA-Z0-9_]{3,20}",
        left in "[ \t\n]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let padded = format!("{left}{candidate}{right}");
        let username = Username::parse(&padded).unwrap();
        prop_assert_eq!(username.into_inner(), candidate.to_lowercase());
    }

    /// Property: a single disallowed character anywhere rejects the name
    #[test]
    fn disallowed_characters_are_rejected(
        prefix in "[a-z0-9_]{1,9}",
        bad in "[-.!@#$%^&*()+= /]",
        suffix in "[a-z0-9_]{1,9}",
    ) {
        let candidate = format!("{prefix}{bad}{suffix}");
        let err = Username::parse(&candidate).unwrap_err();
        prop_assert_eq!(err.to_string(), USERNAME_FORMAT_MESSAGE);
    }

    /// Property: lengths outside 3-20 are rejected
    #[test]
    fn out_of_range_lengths_are_rejected(
        candidate in prop_oneof!["[a-z0-9_]{0,2}", "[a-z0-9_]{21,40}"]
    ) {
        prop_assert!(Username::parse(&candidate).is_err());
    }

    /// Property: normalized slugs only contain [a-z0-9-] with no edge or doubled dashes
    #[test]
    fn normalized_slugs_are_clean(raw in "\\PC{0,80}") {
        if let Ok(slug) = normalize_slug(&raw) {
            prop_assert!(slug.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-'));
            prop_assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
            prop_assert!((2..=60).contains(&slug.len()));
        }
    }
}
