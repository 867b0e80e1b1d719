//! Model-handle abstraction and context trimming.
//!
//! This crate defines the `LanguageModel` trait that concrete provider
//! clients implement, the object-safe `BoxLanguageModel` wrapper used for
//! runtime provider selection, the reasoning middleware, and the
//! token-aware prompt trimmer. It depends only on `deepresearch-types` --
//! never on any HTTP or provider crate.

pub mod context;
pub mod llm;
