//! Concrete model handles and the provider resolver.

pub mod openai;
pub mod resolve;
pub mod together;

pub use resolve::resolve_model;
