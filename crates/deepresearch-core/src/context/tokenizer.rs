//! Process-wide tokenizer.
//!
//! The o200k_base encoder is loaded once on first use and shared
//! read-only afterwards; concurrent counting needs no locking.

use std::sync::{Arc, LazyLock};

use tiktoken_rs::{CoreBPE, o200k_base};

static ENCODER: LazyLock<Arc<CoreBPE>> = LazyLock::new(|| {
    // The encoding data ships with tiktoken-rs; loading only fails on a
    // corrupted build.
    Arc::new(o200k_base().expect("failed to load o200k_base encoder"))
});

/// Shared handle to the process-wide encoder.
pub fn encoder() -> Arc<CoreBPE> {
    Arc::clone(&ENCODER)
}

/// Number of o200k_base tokens in `text`.
pub fn token_count(text: &str) -> usize {
    ENCODER.encode_ordinary(text).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_counts_zero() {
        assert_eq!(token_count(""), 0);
    }

    #[test]
    fn test_count_is_stable() {
        let text = "The quick brown fox jumps over the lazy dog.";
        assert_eq!(token_count(text), token_count(text));
        assert!(token_count(text) > 0);
    }

    #[test]
    fn test_encoder_is_shared() {
        let a = encoder();
        let b = encoder();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
