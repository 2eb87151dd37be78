//! Port definitions (interfaces)
//!
//! Ports define the boundary between the generation use case and the
//! host filesystem. Adapters live in the infrastructure crate.

mod file_system;

pub use file_system::{FileSystem, FileSystemError};
