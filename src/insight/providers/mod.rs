//! Insight provider implementations
//!
//! Concrete backends for the InsightProvider trait.

pub mod gemini;
pub mod openai;

pub use gemini::*;
pub use openai::*;
