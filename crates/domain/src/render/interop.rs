//! Interop definition renderer.

use std::fmt::Write;

use crate::config::GrammarConfig;

/// Renders the cinterop definition file for `config`.
///
/// The file is a flat key block (package, headers, static library) followed
/// by one `method = symbol` line per language method, in insertion order.
#[must_use]
pub fn render_interop_def(config: &GrammarConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "package = {}.internal", config.package_name());
    let _ = writeln!(out, "headers = {}", config.include_headers().join(" "));
    let _ = writeln!(out, "staticLibraries = lib{}.a", config.library_name());

    out.push('\n');
    for method in config.language_methods() {
        let _ = writeln!(out, "{} = {}", method.name(), method.symbol());
    }

    out
}
