//! Model-handle abstractions.
//!
//! - `LanguageModel`: RPITIT trait for concrete model handles
//! - `BoxLanguageModel`: object-safe wrapper for dynamic dispatch
//! - `ReasoningMiddleware`: splits tagged thinking segments out of output

pub mod box_model;
pub mod model;
pub mod reasoning;

pub use box_model::BoxLanguageModel;
pub use model::LanguageModel;
pub use reasoning::ReasoningMiddleware;
