//! Property-based and statistical tests for device identifiers

use lango_identity::{
    generate, DeviceIdentity, FallbackRandom, KeyValueStorage, MemoryStorage, OsRandom, ALPHABET,
    ID_LENGTH, STORAGE_KEY,
};
use proptest::prelude::*;

proptest! {
    /// Property: every seed yields a well-formed identifier
    #[test]
    fn fallback_ids_are_well_formed(seed in any::<u64>()) {
        let id = generate(&mut FallbackRandom::from_seed(seed)).unwrap();
        prop_assert_eq!(id.len(), ID_LENGTH);
        prop_assert!(id.bytes().all(|b| ALPHABET.contains(&b)));
    }

    /// Property: any stored value of the wrong length is replaced, any value
    /// of the right length is kept
    #[test]
    fn stored_value_kept_iff_length_matches(stored in "[A-Za-z0-9]{0,30}") {
        let storage = MemoryStorage::with_entry(STORAGE_KEY, &stored);
        let mut identity = DeviceIdentity::new(storage, FallbackRandom::from_seed(1));

        let id = identity.get_or_create().unwrap();

        prop_assert_eq!(id.len(), ID_LENGTH);
        if stored.len() == ID_LENGTH {
            prop_assert_eq!(&id, &stored);
        }
        prop_assert_eq!(identity.storage().get(STORAGE_KEY), Some(id));
    }
}

/// Per-position symbol counts stay close to uniform
#[test]
fn test_symbols_are_near_uniform_per_position() {
    const TRIALS: usize = 6_200;
    // Expected count per symbol per position is 100; a 50..160 window is
    // more than five standard deviations wide on both sides.
    let mut counts = vec![[0usize; 62]; ID_LENGTH];

    let mut random = OsRandom;
    for _ in 0..TRIALS {
        let id = generate(&mut random).unwrap();
        for (position, byte) in id.bytes().enumerate() {
            let symbol = ALPHABET.iter().position(|&a| a == byte).unwrap();
            counts[position][symbol] += 1;
        }
    }

    for (position, row) in counts.iter().enumerate() {
        for (symbol, &count) in row.iter().enumerate() {
            assert!(
                (50..160).contains(&count),
                "position {position}, symbol {} seen {count} times",
                char::from(ALPHABET[symbol])
            );
        }
    }
}

/// Distinct devices get distinct identifiers
#[test]
fn test_ids_do_not_repeat() {
    let mut seen = std::collections::HashSet::new();
    let mut random = OsRandom;
    for _ in 0..10_000 {
        assert!(seen.insert(generate(&mut random).unwrap()));
    }
}
