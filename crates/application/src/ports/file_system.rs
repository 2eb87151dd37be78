//! File system port.

use std::path::{Path, PathBuf};

/// Error type for file system operations.
#[derive(Debug, thiserror::Error)]
pub enum FileSystemError {
    /// The path exists but is not accessible.
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Port for the synchronous file operations generation needs.
///
/// Generation is a single synchronous pass with ordinary file writes,
/// so the port is deliberately blocking.
pub trait FileSystem: Send + Sync {
    /// Writes `contents` to `path`, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if a parent directory or the file cannot be written.
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError>;

    /// Creates `path` and any missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError>;

    /// Returns whether `path` exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}
