//! Resolved grammar configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A binding from a generated method name to a native entry-point symbol.
///
/// # Example
///
/// ```
/// use grambind_domain::LanguageMethod;
///
/// let method = LanguageMethod::new("language", "tree_sitter_json");
/// assert_eq!(method.name(), "language");
/// assert_eq!(method.symbol(), "tree_sitter_json");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageMethod {
    /// Method name as it appears on the generated class.
    name: String,
    /// Native symbol the method resolves to.
    symbol: String,
}

impl LanguageMethod {
    /// Creates a new method-to-symbol binding.
    pub fn new(name: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbol: symbol.into(),
        }
    }

    /// Returns the generated method name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the native symbol name.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

/// Fully resolved configuration for one grammar.
///
/// Produced by [`crate::GrammarSettings::resolve`]; immutable afterwards.
/// Every default has already been applied, so consumers never need to know
/// which values were explicit and which were derived.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarConfig {
    /// Root of the grammar's source layout.
    pub(crate) base_dir: PathBuf,
    /// Grammar identifier, e.g. `"json"`.
    pub(crate) grammar_name: String,
    /// Native compilation units, resolved against `base_dir`.
    pub(crate) source_files: Vec<PathBuf>,
    /// Header search directories for the native build.
    pub(crate) include_dirs: Vec<PathBuf>,
    /// Header names included by the generated glue, in order.
    pub(crate) include_headers: Vec<String>,
    /// Base name of the interop definition file.
    pub(crate) interop_name: String,
    /// Name of the shared library the native build produces.
    pub(crate) library_name: String,
    /// Package the generated class lives in.
    pub(crate) package_name: String,
    /// Name of the generated class.
    pub(crate) class_name: String,
    /// Method-to-symbol bindings, in insertion order.
    pub(crate) language_methods: Vec<LanguageMethod>,
}

impl GrammarConfig {
    /// Returns the grammar source root.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Returns the grammar identifier.
    #[must_use]
    pub fn grammar_name(&self) -> &str {
        &self.grammar_name
    }

    /// Returns the native compilation units in declaration order.
    #[must_use]
    pub fn source_files(&self) -> &[PathBuf] {
        &self.source_files
    }

    /// Returns the header search directories.
    #[must_use]
    pub fn include_dirs(&self) -> &[PathBuf] {
        &self.include_dirs
    }

    /// Returns the headers the generated glue includes, in order.
    #[must_use]
    pub fn include_headers(&self) -> &[String] {
        &self.include_headers
    }

    /// Returns the interop definition base name.
    #[must_use]
    pub fn interop_name(&self) -> &str {
        &self.interop_name
    }

    /// Returns the shared library name.
    #[must_use]
    pub fn library_name(&self) -> &str {
        &self.library_name
    }

    /// Returns the package of the generated class.
    #[must_use]
    pub fn package_name(&self) -> &str {
        &self.package_name
    }

    /// Returns the name of the generated class.
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the method-to-symbol bindings in insertion order.
    #[must_use]
    pub fn language_methods(&self) -> &[LanguageMethod] {
        &self.language_methods
    }
}
