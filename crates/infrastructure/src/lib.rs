//! Grambind Infrastructure - Adapters for the application ports
//!
//! Provides the real filesystem adapter and the grammar manifest loader.

pub mod manifest;
pub mod persistence;

pub use manifest::{load_manifest, ManifestError};
pub use persistence::StdFileSystem;
