//! Property-Based Tests for Cache Module
//!
//! Uses proptest to pin the write-gating policy and key derivation.

use proptest::prelude::*;

use crate::cache::{derive_cache_key, CacheOptions, KeyValueCache};

// == Test Configuration ==
const TEST_STALE_TIME_MS: u64 = 60_000;

// == Strategies ==
/// Generates valid cache keys (non-empty)
fn valid_key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_]{1,64}".prop_map(|s| s)
}

/// Generates JSON payloads of the shapes the gateway caches
fn payload_strategy() -> impl Strategy<Value = serde_json::Value> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,64}".prop_map(serde_json::Value::from),
        any::<i64>().prop_map(serde_json::Value::from),
        (valid_key_strategy(), any::<u32>()).prop_map(|(identifier, wave)| {
            serde_json::json!({ "identifier": identifier, "wave": wave })
        }),
    ]
}

fn test_cache() -> KeyValueCache<serde_json::Value> {
    KeyValueCache::new(CacheOptions::new(TEST_STALE_TIME_MS))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // **Property: Insert-Absent Round Trip**
    // *For any* key and payload, storing into an empty slot and reading back
    // SHALL return exactly the stored payload.
    #[test]
    fn prop_insert_absent_roundtrip(key in valid_key_strategy(), payload in payload_strategy()) {
        let mut cache = test_cache();

        cache.add_item(&key, payload.clone());

        prop_assert_eq!(cache.get_item(&key), Some(payload));
        prop_assert_eq!(cache.len(), 1);
    }

    // **Property: Fresh Entry Blocks Overwrite, Stale Entry Permits It**
    // *For any* two payloads, a second write inside the stale window SHALL
    // keep the first payload, and a write after the window SHALL replace it.
    // This pins the write-gating policy so it cannot silently regress.
    #[test]
    fn prop_fresh_entry_blocks_overwrite_stale_entry_permits_it(
        key in valid_key_strategy(),
        first in payload_strategy(),
        second in payload_strategy()
    ) {
        let mut cache = test_cache();

        cache.add_item(&key, first.clone());
        cache.add_item(&key, second.clone());
        prop_assert_eq!(cache.get_item(&key), Some(first), "fresh entry was replaced");

        cache.backdate(&key, TEST_STALE_TIME_MS);
        cache.add_item(&key, second.clone());
        prop_assert_eq!(cache.get_item(&key), Some(second), "stale entry was not replaced");
    }

    // **Property: Clear Cache Empties Everything**
    // *For any* set of stored entries, after `clear_cache` every previously
    // present key SHALL read back as absent.
    #[test]
    fn prop_clear_cache_empties_everything(
        entries in prop::collection::hash_map(valid_key_strategy(), payload_strategy(), 1..20)
    ) {
        let mut cache = test_cache();

        for (key, payload) in &entries {
            cache.add_item(key, payload.clone());
        }

        prop_assert!(cache.clear_cache());
        prop_assert!(cache.is_empty());
        for key in entries.keys() {
            prop_assert_eq!(cache.get_item(key), None);
        }
    }

    // **Property: Clear Cache Item Is Surgical**
    // *For any* set of stored entries, removing one key SHALL leave every
    // other key retrievable with its original payload.
    #[test]
    fn prop_clear_cache_item_is_surgical(
        entries in prop::collection::hash_map(valid_key_strategy(), payload_strategy(), 2..20)
    ) {
        let mut cache = test_cache();

        for (key, payload) in &entries {
            cache.add_item(key, payload.clone());
        }

        let removed = entries.keys().next().unwrap().clone();
        prop_assert!(cache.clear_cache_item(&removed));
        prop_assert_eq!(cache.get_item(&removed), None);

        for (key, payload) in &entries {
            if *key != removed {
                prop_assert_eq!(cache.get_item(key), Some(payload.clone()));
            }
        }
    }

    // **Property: Key Determinism**
    // *For any* parameter list, deriving the key twice SHALL agree, and
    // appending a differing parameter SHALL change the key.
    #[test]
    fn prop_key_determinism(params in prop::collection::vec("[a-zA-Z0-9]{1,16}", 1..6)) {
        let first = derive_cache_key(&params);
        let second = derive_cache_key(&params);
        prop_assert_eq!(&first, &second);

        let mut extended = params.clone();
        extended.push("extra".to_string());
        prop_assert_ne!(first, derive_cache_key(&extended));
    }

    // **Property: Key Order Sensitivity**
    // *For any* pair of distinct parameters, swapping their order SHALL
    // produce a different key.
    #[test]
    fn prop_key_order_sensitivity(a in "[a-z]{1,16}", b in "[a-z]{1,16}") {
        prop_assume!(a != b);
        prop_assert_ne!(derive_cache_key(&[&a, &b]), derive_cache_key(&[&b, &a]));
    }
}
