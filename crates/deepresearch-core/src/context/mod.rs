//! Context-budget management for LLM prompts.
//!
//! - `tokenizer`: process-wide o200k_base token counter
//! - `trim`: recursive, token-aware prompt trimming

pub mod tokenizer;
pub mod trim;

pub use tokenizer::token_count;
pub use trim::{MIN_CHUNK_SIZE, trim_prompt, trim_prompt_default};
