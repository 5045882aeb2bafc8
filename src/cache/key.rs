//! Cache Key Derivation
//!
//! Builds deterministic cache keys from ordered request parameters.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

// == Derive Cache Key ==
/// Derives the cache key for an ordered sequence of request parameters.
///
/// The key is the standard base64 encoding of the `"_"`-joined sequence, so
/// identical parameter lists always map to the same key and differing values
/// or orders map to different keys. Callers supply canonical strings; the
/// function performs no implicit stringification of structured data.
pub fn derive_cache_key<S: AsRef<str>>(hash_params: &[S]) -> String {
    let joined = hash_params
        .iter()
        .map(|param| param.as_ref())
        .collect::<Vec<_>>()
        .join("_");

    BASE64.encode(joined)
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_deterministic() {
        let first = derive_cache_key(&["search", "abc123"]);
        let second = derive_cache_key(&["search", "abc123"]);

        assert_eq!(first, second);
    }

    #[test]
    fn test_key_known_value() {
        // base64("block_abc")
        assert_eq!(derive_cache_key(&["block", "abc"]), "YmxvY2tfYWJj");
    }

    #[test]
    fn test_differing_values_differ() {
        assert_ne!(
            derive_cache_key(&["search", "abc"]),
            derive_cache_key(&["search", "abd"])
        );
    }

    #[test]
    fn test_parameter_order_matters() {
        assert_ne!(
            derive_cache_key(&["a", "b"]),
            derive_cache_key(&["b", "a"])
        );
    }

    #[test]
    fn test_empty_params() {
        assert_eq!(derive_cache_key::<&str>(&[]), "");
    }
}
