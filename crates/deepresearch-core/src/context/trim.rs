//! Recursive, token-aware prompt trimming.
//!
//! Shrinks a prompt until it tokenizes within a context budget. The
//! target size for each pass is estimated from the token overflow with a
//! 3-chars-per-token heuristic rather than re-tokenizing every trial,
//! then the cut is made at a natural text boundary by `text-splitter`
//! (paragraph, sentence, word, then character).
//!
//! Each recursive pass strictly shrinks the working text or hits the
//! 140-character floor, so trimming always terminates and never fails.

use text_splitter::TextSplitter;

use deepresearch_types::config::DEFAULT_CONTEXT_SIZE;

use super::tokenizer::token_count;

/// Character-length floor below which no further shrinking is attempted.
pub const MIN_CHUNK_SIZE: usize = 140;

/// Estimated average characters per token. Intentionally approximate;
/// the progress guard below covers the cases where it misses.
const CHARS_PER_TOKEN: usize = 3;

/// Trim `prompt` so it fits within `max_tokens`.
///
/// Returns the prompt unchanged when it already fits. Otherwise returns a
/// prefix cut at a natural boundary whose token count is at most
/// `max_tokens`, except when shrinking reaches the [`MIN_CHUNK_SIZE`]
/// floor: then the floor-length prefix is returned even if token-dense
/// input still exceeds the budget.
pub fn trim_prompt(prompt: &str, max_tokens: usize) -> String {
    if prompt.is_empty() {
        return String::new();
    }

    let length = token_count(prompt);
    if length <= max_tokens {
        return prompt.to_string();
    }

    let overflow_tokens = length - max_tokens;
    let char_len = prompt.chars().count();
    let chunk_size = char_len.saturating_sub(overflow_tokens * CHARS_PER_TOKEN);
    if chunk_size < MIN_CHUNK_SIZE {
        return prefix_chars(prompt, MIN_CHUNK_SIZE).to_string();
    }

    tracing::debug!(tokens = length, budget = max_tokens, chunk_size, "trimming prompt");

    let splitter = TextSplitter::new(chunk_size);
    let trimmed = splitter.chunks(prompt).next().unwrap_or("");

    // The splitter can hand back the whole input when the text has no
    // boundary below chunk_size; hard-slice instead so every pass makes
    // progress.
    if trimmed.len() == prompt.len() {
        return trim_prompt(prefix_chars(prompt, chunk_size), max_tokens);
    }

    trim_prompt(trimmed, max_tokens)
}

/// Trim `prompt` against the default context budget.
///
/// Callers with a configured `context_size` should pass it to
/// [`trim_prompt`] directly.
pub fn trim_prompt_default(prompt: &str) -> String {
    trim_prompt(prompt, DEFAULT_CONTEXT_SIZE)
}

/// The first `n` characters of `s`, cut on a char boundary.
fn prefix_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_prose(sentences: usize) -> String {
        (0..sentences)
            .map(|i| format!("This is sentence number {i} of a rather long research summary. "))
            .collect()
    }

    #[test]
    fn test_empty_prompt() {
        assert_eq!(trim_prompt("", 100), "");
    }

    #[test]
    fn test_default_budget_fast_path() {
        let prompt = "fits easily within the default budget";
        assert_eq!(trim_prompt_default(prompt), prompt);
    }

    #[test]
    fn test_fast_path_returns_prompt_unchanged() {
        let prompt = "Short prompt that easily fits.";
        assert_eq!(trim_prompt(prompt, 1_000), prompt);
    }

    #[test]
    fn test_trims_within_budget() {
        let prompt = long_prose(40);
        assert!(prompt.len() > 2_000);

        let trimmed = trim_prompt(&prompt, 100);
        assert!(trimmed.len() < prompt.len());
        assert!(token_count(&trimmed) <= 100);
    }

    #[test]
    fn test_idempotent() {
        let prompt = long_prose(40);
        let once = trim_prompt(&prompt, 100);
        let twice = trim_prompt(&once, 100);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_floor_returns_fixed_prefix() {
        // Small text against a budget of 1 pushes the estimated chunk
        // size below the floor.
        let prompt = "word ".repeat(40);
        let trimmed = trim_prompt(&prompt, 1);
        assert_eq!(trimmed.chars().count(), MIN_CHUNK_SIZE);
        assert_eq!(trimmed, prefix_chars(&prompt, MIN_CHUNK_SIZE));
    }

    #[test]
    fn test_floor_respects_char_boundaries() {
        let prompt = "é".repeat(300);
        let trimmed = trim_prompt(&prompt, 1);
        assert_eq!(trimmed.chars().count(), MIN_CHUNK_SIZE);
    }

    #[test]
    fn test_boundaryless_input_terminates() {
        // A single run with no paragraph, sentence or word boundaries
        // forces the hard-slice path; trimming must still terminate and
        // land within budget.
        let prompt = "a".repeat(5_000);
        let trimmed = trim_prompt(&prompt, 50);
        assert!(token_count(&trimmed) <= 50);
        assert!(trimmed.chars().count() >= MIN_CHUNK_SIZE);
    }

    #[test]
    fn test_prefers_sentence_boundaries() {
        let prompt = long_prose(100);
        let trimmed = trim_prompt(&prompt, 200);
        // The cut should land at a natural break, not mid-word.
        assert!(trimmed.ends_with('.') || trimmed.ends_with(' '));
    }

    #[test]
    fn test_prefix_chars() {
        assert_eq!(prefix_chars("hello", 3), "hel");
        assert_eq!(prefix_chars("hi", 10), "hi");
        assert_eq!(prefix_chars("héllo", 2), "hé");
    }
}
