//! Grambind Domain - Core grammar binding types
//!
//! This crate defines the domain model for the grambind glue generator.
//! All types here are pure Rust with no I/O dependencies.

pub mod artifacts;
pub mod config;
pub mod error;
pub mod render;
pub mod settings;

pub use artifacts::GeneratedArtifacts;
pub use config::{GrammarConfig, LanguageMethod};
pub use error::{ConfigError, ConfigResult};
pub use render::{render_cmake_lists, render_interop_def, render_source_stubs, SourceStub};
pub use settings::GrammarSettings;
