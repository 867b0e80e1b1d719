//! Infrastructure implementations for the deep-research core.
//!
//! Concrete model handles (OpenAI-compatible direct API, Together
//! streaming) and the resolver that selects one from process settings.

pub mod llm;
