//! Declared outputs of a generation pass.

use serde::Serialize;
use std::path::{Path, PathBuf};

/// The full output surface of one generation pass.
///
/// Created fresh per invocation and returned to the caller, which decides
/// any caching or up-to-date policy. Generated source stubs live under
/// [`generated_src_dir`](Self::generated_src_dir); no files are written
/// outside these locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifacts {
    /// Root of the generated source tree, `{output_root}/generated/src`.
    pub(crate) generated_src_dir: PathBuf,
    /// Build descriptor, `{output_root}/generated/CMakeLists.txt`.
    pub(crate) cmake_lists_file: PathBuf,
    /// Interop definition, `{generated_src_dir}/nativeInterop/{interop_name}.def`.
    pub(crate) interop_file: PathBuf,
}

impl GeneratedArtifacts {
    /// Computes the artifact locations for `output_root` and the given
    /// interop base name.
    #[must_use]
    pub fn for_output_root(output_root: &Path, interop_name: &str) -> Self {
        let generated = output_root.join("generated");
        let generated_src_dir = generated.join("src");
        let interop_file = generated_src_dir
            .join("nativeInterop")
            .join(format!("{interop_name}.def"));

        Self {
            generated_src_dir,
            cmake_lists_file: generated.join("CMakeLists.txt"),
            interop_file,
        }
    }

    /// Returns the root of the generated source tree.
    #[must_use]
    pub fn generated_src_dir(&self) -> &Path {
        &self.generated_src_dir
    }

    /// Returns the path of the generated build descriptor.
    #[must_use]
    pub fn cmake_lists_file(&self) -> &Path {
        &self.cmake_lists_file
    }

    /// Returns the path of the generated interop definition.
    #[must_use]
    pub fn interop_file(&self) -> &Path {
        &self.interop_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_artifact_layout() {
        let artifacts = GeneratedArtifacts::for_output_root(Path::new("/tmp/out"), "grammar");

        assert_eq!(
            artifacts.generated_src_dir(),
            Path::new("/tmp/out/generated/src")
        );
        assert_eq!(
            artifacts.cmake_lists_file(),
            Path::new("/tmp/out/generated/CMakeLists.txt")
        );
        assert_eq!(
            artifacts.interop_file(),
            Path::new("/tmp/out/generated/src/nativeInterop/grammar.def")
        );
    }

    #[test]
    fn test_interop_name_flows_into_path() {
        let artifacts = GeneratedArtifacts::for_output_root(Path::new("/tmp/out"), "bindings");

        assert_eq!(
            artifacts.interop_file(),
            Path::new("/tmp/out/generated/src/nativeInterop/bindings.def")
        );
    }
}
