//! Raw grammar settings and their resolution into a [`GrammarConfig`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::config::{GrammarConfig, LanguageMethod};
use crate::error::{ConfigError, ConfigResult};

/// Unresolved grammar settings, as supplied by a manifest or a caller.
///
/// Every field is optional at the type level so that "absent" can be told
/// apart from "explicitly empty": an explicitly empty `include_dirs` or
/// `include_headers` is honored as-is, while an absent one gets the
/// documented default during [`resolve`](Self::resolve).
///
/// # Example
///
/// ```
/// use grambind_domain::GrammarSettings;
/// use std::path::Path;
///
/// let config = GrammarSettings::default()
///     .grammar_name("json")
///     .source_files(["src/parser.c"])
///     .package_name("com.example.json")
///     .class_name("TreeSitterJson")
///     .resolve(Path::new("."))
///     .unwrap();
///
/// assert_eq!(config.library_name(), "klyx-treesitter-json");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct GrammarSettings {
    /// Root of the grammar's source layout.
    base_dir: Option<PathBuf>,
    /// Grammar identifier, e.g. `"json"`. Required.
    grammar_name: Option<String>,
    /// Native compilation units. Required, non-empty.
    source_files: Option<Vec<PathBuf>>,
    /// Header search directories.
    include_dirs: Option<Vec<PathBuf>>,
    /// Header names included by the generated glue.
    include_headers: Option<Vec<String>>,
    /// Base name of the interop definition file.
    interop_name: Option<String>,
    /// Name of the shared library to build.
    library_name: Option<String>,
    /// Package the generated class lives in. Required.
    package_name: Option<String>,
    /// Name of the generated class. Required.
    class_name: Option<String>,
    /// Method-to-symbol bindings.
    language_methods: Option<Vec<LanguageMethod>>,
}

impl GrammarSettings {
    /// Sets the grammar source root.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Sets the grammar identifier.
    #[must_use]
    pub fn grammar_name(mut self, name: impl Into<String>) -> Self {
        self.grammar_name = Some(name.into());
        self
    }

    /// Sets the native compilation units.
    #[must_use]
    pub fn source_files<I, P>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.source_files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the header search directories.
    #[must_use]
    pub fn include_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.include_dirs = Some(dirs.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the headers the generated glue includes.
    #[must_use]
    pub fn include_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.include_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the interop definition base name.
    #[must_use]
    pub fn interop_name(mut self, name: impl Into<String>) -> Self {
        self.interop_name = Some(name.into());
        self
    }

    /// Sets the shared library name.
    #[must_use]
    pub fn library_name(mut self, name: impl Into<String>) -> Self {
        self.library_name = Some(name.into());
        self
    }

    /// Sets the package of the generated class.
    #[must_use]
    pub fn package_name(mut self, name: impl Into<String>) -> Self {
        self.package_name = Some(name.into());
        self
    }

    /// Sets the name of the generated class.
    #[must_use]
    pub fn class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    /// Sets the method-to-symbol bindings.
    #[must_use]
    pub fn language_methods<I>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = LanguageMethod>,
    {
        self.language_methods = Some(methods.into_iter().collect());
        self
    }

    /// Resolves these settings into an immutable [`GrammarConfig`].
    ///
    /// Resolution happens in two phases: required fields are validated
    /// first, then every default is computed from the already-validated
    /// record, so defaults derived from `grammar_name` always see its
    /// final value.
    ///
    /// `invocation_dir` anchors the `base_dir` default, which is two
    /// levels above it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `grammarName`,
    /// `sourceFiles`, `packageName`, or `className` is absent or empty.
    pub fn resolve(&self, invocation_dir: &Path) -> ConfigResult<GrammarConfig> {
        let grammar_name = require_str(self.grammar_name.as_deref(), "grammarName")?;
        let source_files = match self.source_files.as_deref() {
            Some(files) if !files.is_empty() => files,
            _ => return Err(ConfigError::MissingRequiredField("sourceFiles")),
        };
        let package_name = require_str(self.package_name.as_deref(), "packageName")?;
        let class_name = require_str(self.class_name.as_deref(), "className")?;

        let base_dir = self
            .base_dir
            .clone()
            .unwrap_or_else(|| invocation_dir.join("..").join(".."));

        let source_files = source_files
            .iter()
            .map(|file| {
                if file.is_absolute() {
                    file.clone()
                } else {
                    base_dir.join(file)
                }
            })
            .collect();

        let include_dirs = self
            .include_dirs
            .clone()
            .unwrap_or_else(|| vec![base_dir.join("bindings").join("c")]);

        let include_headers = self
            .include_headers
            .clone()
            .unwrap_or_else(|| vec![format!("tree-sitter-{grammar_name}.h")]);

        let interop_name = self
            .interop_name
            .clone()
            .unwrap_or_else(|| "grammar".to_string());

        let library_name = self
            .library_name
            .clone()
            .unwrap_or_else(|| format!("klyx-treesitter-{grammar_name}"));

        let language_methods = self.language_methods.clone().unwrap_or_else(|| {
            vec![LanguageMethod::new(
                "language",
                format!("tree_sitter_{grammar_name}"),
            )]
        });

        Ok(GrammarConfig {
            base_dir,
            grammar_name: grammar_name.to_string(),
            source_files,
            include_dirs,
            include_headers,
            interop_name,
            library_name,
            package_name: package_name.to_string(),
            class_name: class_name.to_string(),
            language_methods,
        })
    }
}

fn require_str<'a>(value: Option<&'a str>, field: &'static str) -> ConfigResult<&'a str> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingRequiredField(field)),
    }
}
