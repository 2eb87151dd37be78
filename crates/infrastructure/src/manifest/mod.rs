//! Grammar manifest loader.
//!
//! A manifest is a JSON or YAML file whose keys mirror the original DSL
//! property names (`grammarName`, `sourceFiles`, `packageName`, ...).
//! The format is chosen by file extension.

use std::path::Path;

use grambind_domain::GrammarSettings;
use thiserror::Error;

/// Manifest loading error types.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file was not found at the specified path.
    #[error("manifest not found: {0}")]
    FileNotFound(String),

    /// JSON parsing failed.
    #[error("invalid JSON manifest: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// YAML parsing failed.
    #[error("invalid YAML manifest: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    /// The file extension maps to no supported format.
    #[error("unsupported manifest format: {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(String),

    /// IO operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads raw grammar settings from a JSON or YAML manifest file.
///
/// # Errors
///
/// Returns an error if the file is missing, has an unsupported
/// extension, or does not parse as the expected format.
pub fn load_manifest(path: &Path) -> Result<GrammarSettings, ManifestError> {
    let format = detect_format(path)?;

    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ManifestError::FileNotFound(path.display().to_string())
        } else {
            ManifestError::Io(e)
        }
    })?;

    match format {
        ManifestFormat::Json => Ok(serde_json::from_str(&content)?),
        ManifestFormat::Yaml => Ok(serde_yaml::from_str(&content)?),
    }
}

/// Supported manifest formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ManifestFormat {
    Json,
    Yaml,
}

fn detect_format(path: &Path) -> Result<ManifestFormat, ManifestError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(ManifestFormat::Json),
        Some("yaml" | "yml") => Ok(ManifestFormat::Yaml),
        _ => Err(ManifestError::UnsupportedFormat(path.display().to_string())),
    }
}
