//! CMake build descriptor renderer.

use std::fmt::Write;

use super::stubs::jni_stub_src_path;
use crate::config::GrammarConfig;

const CMAKE_MINIMUM: &str = "3.22.1";

/// Renders the `CMakeLists.txt` that compiles the grammar's native sources
/// (plus the generated JNI glue) into a shared library.
///
/// Paths inside the descriptor are relative to the `generated/` directory
/// the file lives in, except for the grammar sources and include dirs,
/// which are emitted as resolved.
#[must_use]
pub fn render_cmake_lists(config: &GrammarConfig) -> String {
    let mut out = String::new();
    let library = config.library_name();

    let _ = writeln!(out, "cmake_minimum_required(VERSION {CMAKE_MINIMUM})");
    out.push('\n');
    let _ = writeln!(out, "project({library} LANGUAGES C)");
    out.push('\n');
    let _ = writeln!(
        out,
        "set(GRAMBIND_INTEROP_DEF src/nativeInterop/{}.def)",
        config.interop_name()
    );
    out.push('\n');

    let _ = writeln!(out, "add_library({library} SHARED");
    for source in config.source_files() {
        let _ = writeln!(out, "    {}", source.display());
    }
    let _ = writeln!(
        out,
        "    src/{}",
        jni_stub_src_path(config.grammar_name()).display()
    );
    let _ = writeln!(out, ")");

    if !config.include_dirs().is_empty() {
        out.push('\n');
        let _ = writeln!(out, "target_include_directories({library} PRIVATE");
        for dir in config.include_dirs() {
            let _ = writeln!(out, "    {}", dir.display());
        }
        let _ = writeln!(out, ")");
    }

    out
}
