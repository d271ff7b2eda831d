//! Content fingerprinting for URL deduplication.

use sha2::{Digest, Sha256};

/// Computes the dedup fingerprint of an original URL.
///
/// SHA-256 over the raw input string, encoded as 64 lowercase hex
/// characters. Deterministic; the same URL always maps to the same digest.
pub fn fingerprint(url: &str) -> String {
    hex::encode(Sha256::digest(url.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_deterministic() {
        assert_eq!(fingerprint("http://x.com"), fingerprint("http://x.com"));
    }

    #[test]
    fn test_fingerprint_known_vector() {
        // SHA-256("abc")
        assert_eq!(
            fingerprint("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_length_and_charset() {
        let digest = fingerprint("https://example.com/some/long/path?with=query");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_distinct_inputs_produce_distinct_digests() {
        assert_ne!(fingerprint("http://x.com"), fingerprint("http://x.com/"));
    }
}
