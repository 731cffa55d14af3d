//! Content fingerprints for generated output.
//!
//! Generation is deterministic, so identical briefs must produce identical
//! fingerprints. Parts are separated by a NUL byte so `["ab", "c"]` and
//! `["a", "bc"]` hash differently.

/// Hash a sequence of text parts into a `blake3:<hex>` string
pub fn fingerprint<S: AsRef<str>>(parts: &[S]) -> String {
    let mut hasher = blake3::Hasher::new();
    for part in parts {
        hasher.update(part.as_ref().as_bytes());
        hasher.update(&[0u8]);
    }
    format!("blake3:{}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fingerprint_is_stable() {
        let a = fingerprint(&["headline", "body"]);
        let b = fingerprint(&["headline", "body"]);
        assert_eq!(a, b);
        assert!(a.starts_with("blake3:"));
    }

    #[test]
    fn test_fingerprint_respects_boundaries() {
        assert_ne!(fingerprint(&["ab", "c"]), fingerprint(&["a", "bc"]));
    }
}
