//! Grammar glue generation use case.

use std::path::Path;

use grambind_domain::{
    render_cmake_lists, render_interop_def, render_source_stubs, GeneratedArtifacts,
    GrammarConfig,
};

use crate::error::{GenerationError, GenerationResult};
use crate::ports::FileSystem;

/// Use case that turns a resolved [`GrammarConfig`] into glue files on disk.
///
/// The pass is all-or-nothing: every declared source file is checked
/// before anything is written, and the first filesystem failure aborts
/// the invocation. Output bytes are a pure function of the configuration,
/// so re-running over the same inputs is idempotent.
pub struct GenerateGrammarFiles<F: FileSystem> {
    fs: F,
}

impl<F: FileSystem> GenerateGrammarFiles<F> {
    /// Creates a new `GenerateGrammarFiles` use case.
    #[must_use]
    pub const fn new(fs: F) -> Self {
        Self { fs }
    }

    /// Generates the interop definition, the build descriptor, and the
    /// source stubs for `config` under `output_root`.
    ///
    /// # Errors
    /// - [`GenerationError::MissingSource`] if any declared source file
    ///   does not exist; nothing is written in that case
    /// - [`GenerationError::PathConflict`] if the output tree cannot be
    ///   created or a file cannot be written
    pub fn execute(
        &self,
        config: &GrammarConfig,
        output_root: &Path,
    ) -> GenerationResult<GeneratedArtifacts> {
        for source in config.source_files() {
            if !self.fs.is_file(source) {
                return Err(GenerationError::MissingSource {
                    path: source.clone(),
                });
            }
        }

        let artifacts = GeneratedArtifacts::for_output_root(output_root, config.interop_name());

        self.fs
            .create_dir_all(artifacts.generated_src_dir())
            .map_err(|source| GenerationError::PathConflict {
                path: artifacts.generated_src_dir().to_path_buf(),
                source,
            })?;

        self.write(artifacts.interop_file(), render_interop_def(config))?;
        self.write(artifacts.cmake_lists_file(), render_cmake_lists(config))?;

        for stub in render_source_stubs(config) {
            self.write(artifacts.generated_src_dir().join(&stub.path), stub.content)?;
        }

        tracing::info!(
            grammar = config.grammar_name(),
            library = config.library_name(),
            "generated grammar glue files"
        );

        Ok(artifacts)
    }

    fn write(&self, path: impl AsRef<Path>, content: String) -> GenerationResult<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "writing generated file");

        self.fs
            .write_file(path, content.as_bytes())
            .map_err(|source| GenerationError::PathConflict {
                path: path.to_path_buf(),
                source,
            })
    }
}
