//! Shared domain types for the deep-research LLM core.
//!
//! This crate contains the provider-agnostic types used across the
//! workspace: messages, generation options, completions, error types,
//! and the resolver settings.
//!
//! Zero infrastructure dependencies -- only serde, serde_json, thiserror.

pub mod config;
pub mod llm;
