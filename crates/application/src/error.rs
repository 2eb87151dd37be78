//! Generation error types

use std::path::PathBuf;

use thiserror::Error;

use crate::ports::FileSystemError;

/// Errors that abort a generation pass.
///
/// There is no partial-success mode: every variant is terminal for the
/// current invocation and carries enough context to fix the input.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A declared grammar source file does not exist.
    ///
    /// Surfaced rather than silently skipped, since a skipped source
    /// would corrupt the downstream native build.
    #[error("missing source file: {}", .path.display())]
    MissingSource {
        /// The source file that was not found.
        path: PathBuf,
    },

    /// The output location cannot be created or written.
    #[error("path conflict at {}: {source}", .path.display())]
    PathConflict {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying filesystem failure.
        source: FileSystemError,
    },
}

/// Result type alias for generation operations.
pub type GenerationResult<T> = Result<T, GenerationError>;
