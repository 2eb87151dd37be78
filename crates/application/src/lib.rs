//! Grambind Application - Generation use cases and ports
//!
//! This crate hosts the file-generation use case and the port traits it
//! depends on. Adapters for the ports live in the infrastructure crate.

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{GenerationError, GenerationResult};
pub use use_cases::GenerateGrammarFiles;
