//! Domain error types

use thiserror::Error;

/// Errors that can occur while resolving grammar settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required setting is absent or empty.
    ///
    /// The field name is reported in the manifest's camelCase spelling
    /// (e.g. `grammarName`) so it points at the key the user wrote.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Result type alias for configuration resolution.
pub type ConfigResult<T> = Result<T, ConfigError>;
