//! Real file system implementation.

use std::fs;
use std::path::Path;

use grambind_application::ports::{FileSystem, FileSystemError};

/// Real file system implementation using `std::fs`.
///
/// Generation is a single synchronous pass, so plain blocking I/O is all
/// that is needed here.
#[derive(Debug, Clone, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Creates a new `StdFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSystemError::PermissionDenied(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), FileSystemError> {
        fs::create_dir_all(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::PermissionDenied {
                FileSystemError::PermissionDenied(path.to_path_buf())
            } else {
                FileSystemError::Io(e)
            }
        })
    }

    fn is_file(&self, path: &Path) -> bool {
        fs::metadata(path).is_ok_and(|m| m.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_file_creates_parents() {
        let dir = tempdir().unwrap();
        let fs = StdFileSystem::new();
        let path = dir.path().join("a/b/c.txt");

        fs.write_file(&path, b"content").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "content");
    }

    #[test]
    fn test_is_file_distinguishes_dirs() {
        let dir = tempdir().unwrap();
        let fs = StdFileSystem::new();
        let file = dir.path().join("file.c");
        std::fs::write(&file, "int main() {}").unwrap();

        assert!(fs.is_file(&file));
        assert!(!fs.is_file(dir.path()));
        assert!(!fs.is_file(&dir.path().join("missing.c")));
    }

    #[test]
    fn test_create_dir_all_on_existing_file_fails() {
        let dir = tempdir().unwrap();
        let fs = StdFileSystem::new();
        let file = dir.path().join("occupied");
        std::fs::write(&file, "not a directory").unwrap();

        assert!(fs.create_dir_all(&file).is_err());
    }
}
