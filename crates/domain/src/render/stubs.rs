//! Generated source stub renderers.
//!
//! One Kotlin file per source set (common expect, JVM actual, native
//! actual) plus the JNI C glue the JVM actual loads. Stub paths are
//! relative to the generated source directory.

use std::fmt::Write;
use std::path::PathBuf;

use crate::config::GrammarConfig;

/// One generated source file, path relative to the generated src dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceStub {
    /// Path relative to the generated source directory.
    pub path: PathBuf,
    /// Full file content.
    pub content: String,
}

/// Path of the JNI glue file, relative to the generated source directory.
pub(crate) fn jni_stub_src_path(grammar_name: &str) -> PathBuf {
    PathBuf::from("jvmMain")
        .join("jni")
        .join(format!("{grammar_name}.c"))
}

/// Renders every source stub for `config`, in a fixed order.
#[must_use]
pub fn render_source_stubs(config: &GrammarConfig) -> Vec<SourceStub> {
    let class_file = format!("{}.kt", config.class_name());
    let package_path: PathBuf = config.package_name().split('.').collect();

    let kotlin_path = |source_set: &str| -> PathBuf {
        [source_set, "kotlin"]
            .iter()
            .collect::<PathBuf>()
            .join(&package_path)
            .join(&class_file)
    };

    vec![
        SourceStub {
            path: kotlin_path("commonMain"),
            content: render_common_stub(config),
        },
        SourceStub {
            path: kotlin_path("jvmMain"),
            content: render_jvm_stub(config),
        },
        SourceStub {
            path: kotlin_path("nativeMain"),
            content: render_native_stub(config),
        },
        SourceStub {
            path: jni_stub_src_path(config.grammar_name()),
            content: render_jni_glue(config),
        },
    ]
}

fn render_common_stub(config: &GrammarConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "package {}", config.package_name());
    out.push('\n');
    let _ = writeln!(out, "expect object {} {{", config.class_name());
    for method in config.language_methods() {
        let _ = writeln!(out, "    fun {}(): Long", method.name());
    }
    let _ = writeln!(out, "}}");

    out
}

fn render_jvm_stub(config: &GrammarConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "package {}", config.package_name());
    out.push('\n');
    let _ = writeln!(out, "actual object {} {{", config.class_name());
    let _ = writeln!(out, "    init {{");
    let _ = writeln!(
        out,
        "        System.loadLibrary(\"{}\")",
        config.library_name()
    );
    let _ = writeln!(out, "    }}");
    for method in config.language_methods() {
        out.push('\n');
        let _ = writeln!(out, "    actual external fun {}(): Long", method.name());
    }
    let _ = writeln!(out, "}}");

    out
}

fn render_native_stub(config: &GrammarConfig) -> String {
    let mut out = String::new();
    let package = config.package_name();

    let _ = writeln!(out, "package {package}");
    out.push('\n');
    for method in config.language_methods() {
        let _ = writeln!(out, "import {package}.internal.{}", method.symbol());
    }
    let _ = writeln!(out, "import kotlinx.cinterop.rawValue");
    out.push('\n');
    let _ = writeln!(out, "actual object {} {{", config.class_name());
    for (index, method) in config.language_methods().iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let _ = writeln!(
            out,
            "    actual fun {}(): Long = {}()!!.rawValue.toLong()",
            method.name(),
            method.symbol()
        );
    }
    let _ = writeln!(out, "}}");

    out
}

fn render_jni_glue(config: &GrammarConfig) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "#include <jni.h>");
    for header in config.include_headers() {
        let _ = writeln!(out, "#include \"{header}\"");
    }

    for method in config.language_methods() {
        out.push('\n');
        let _ = writeln!(out, "JNIEXPORT jlong JNICALL");
        let _ = writeln!(
            out,
            "{}(JNIEnv *env, jclass clazz) {{",
            jni_function_name(config.package_name(), config.class_name(), method.name())
        );
        let _ = writeln!(out, "    return (jlong){}();", method.symbol());
        let _ = writeln!(out, "}}");
    }

    out
}

/// Builds the mangled JNI function name for `package.class.method`.
///
/// Underscores in any component escape to `_1` per the JNI naming rules
/// before the components are joined with `_`.
fn jni_function_name(package: &str, class: &str, method: &str) -> String {
    let mangled: Vec<String> = package
        .split('.')
        .chain([class, method])
        .map(|part| part.replace('_', "_1"))
        .collect();

    format!("Java_{}", mangled.join("_"))
}
