//! Integration tests for the full generation flow.
//!
//! These tests drive the manifest loader, the configuration resolver, and
//! the generation use case against a real temporary filesystem.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use grambind_application::{GenerateGrammarFiles, GenerationError};
use grambind_domain::{ConfigError, GrammarSettings};
use grambind_infrastructure::{load_manifest, StdFileSystem};

/// Lays out a minimal grammar source tree and returns its base dir.
fn write_grammar_sources(root: &Path) -> PathBuf {
    let base_dir = root.join("tree-sitter-toml");
    std::fs::create_dir_all(base_dir.join("src")).unwrap();
    std::fs::write(base_dir.join("src/parser.c"), "/* parser */").unwrap();
    base_dir
}

fn toml_settings(base_dir: &Path) -> GrammarSettings {
    GrammarSettings::default()
        .grammar_name("toml")
        .base_dir(base_dir)
        .source_files(["src/parser.c"])
        .package_name("com.example.toml")
        .class_name("TomlLanguage")
}

/// Reads every file under `dir` into a path-to-bytes map.
fn snapshot(dir: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    let mut pending = vec![dir.to_path_buf()];

    while let Some(current) = pending.pop() {
        for entry in std::fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                let content = std::fs::read(&path).unwrap();
                files.insert(path, content);
            }
        }
    }

    files
}

#[test]
fn test_end_to_end_toml_scenario() {
    let temp_dir = tempdir().unwrap();
    let base_dir = write_grammar_sources(temp_dir.path());
    let output_root = temp_dir.path().join("out");

    let config = toml_settings(&base_dir).resolve(temp_dir.path()).unwrap();
    let use_case = GenerateGrammarFiles::new(StdFileSystem::new());
    let artifacts = use_case.execute(&config, &output_root).unwrap();

    // Declared artifact locations
    assert_eq!(
        artifacts.interop_file(),
        output_root.join("generated/src/nativeInterop/grammar.def")
    );
    assert!(artifacts.interop_file().is_file());
    assert!(artifacts.cmake_lists_file().is_file());

    // Interop definition binds the method to its native symbol
    let def = std::fs::read_to_string(artifacts.interop_file()).unwrap();
    assert!(def.contains("language = tree_sitter_toml"));
    assert!(def.contains("staticLibraries = libklyx-treesitter-toml.a"));

    // Build descriptor compiles the grammar into the shared library
    let cmake = std::fs::read_to_string(artifacts.cmake_lists_file()).unwrap();
    assert!(cmake.contains("project(klyx-treesitter-toml LANGUAGES C)"));
    assert!(cmake.contains("src/parser.c"));

    // Generated class lives in the configured package
    let common_stub = artifacts
        .generated_src_dir()
        .join("commonMain/kotlin/com/example/toml/TomlLanguage.kt");
    let stub = std::fs::read_to_string(common_stub).unwrap();
    assert!(stub.contains("package com.example.toml"));
    assert!(stub.contains("expect object TomlLanguage"));
    assert!(stub.contains("fun language(): Long"));
}

#[test]
fn test_manifest_driven_generation() {
    let temp_dir = tempdir().unwrap();
    let base_dir = write_grammar_sources(temp_dir.path());
    let output_root = temp_dir.path().join("out");

    let manifest_path = temp_dir.path().join("grammar.json");
    std::fs::write(
        &manifest_path,
        format!(
            r#"{{
                "grammarName": "toml",
                "baseDir": "{}",
                "sourceFiles": ["src/parser.c"],
                "packageName": "com.example.toml",
                "className": "TomlLanguage"
            }}"#,
            base_dir.display()
        ),
    )
    .unwrap();

    let settings = load_manifest(&manifest_path).unwrap();
    let config = settings.resolve(temp_dir.path()).unwrap();
    let use_case = GenerateGrammarFiles::new(StdFileSystem::new());
    let artifacts = use_case.execute(&config, &output_root).unwrap();

    assert!(artifacts.interop_file().is_file());
}

#[test]
fn test_rerun_is_idempotent() {
    let temp_dir = tempdir().unwrap();
    let base_dir = write_grammar_sources(temp_dir.path());
    let output_root = temp_dir.path().join("out");

    let config = toml_settings(&base_dir).resolve(temp_dir.path()).unwrap();
    let use_case = GenerateGrammarFiles::new(StdFileSystem::new());

    use_case.execute(&config, &output_root).unwrap();
    let first = snapshot(&output_root);

    use_case.execute(&config, &output_root).unwrap();
    let second = snapshot(&output_root);

    assert_eq!(first, second);
}

#[test]
fn test_missing_source_file_writes_nothing() {
    let temp_dir = tempdir().unwrap();
    let base_dir = temp_dir.path().join("tree-sitter-toml");
    std::fs::create_dir_all(&base_dir).unwrap();
    let output_root = temp_dir.path().join("out");

    let settings = toml_settings(&base_dir).source_files(["src/missing.c"]);
    let config = settings.resolve(temp_dir.path()).unwrap();
    let use_case = GenerateGrammarFiles::new(StdFileSystem::new());

    let err = use_case.execute(&config, &output_root).unwrap_err();

    match err {
        GenerationError::MissingSource { path } => {
            assert_eq!(path, base_dir.join("src/missing.c"));
        }
        other => panic!("expected MissingSource, got {other}"),
    }
    assert!(!output_root.exists());
}

#[test]
fn test_missing_required_field_from_manifest() {
    let temp_dir = tempdir().unwrap();
    let manifest_path = temp_dir.path().join("grammar.yaml");
    std::fs::write(
        &manifest_path,
        "grammarName: toml\nsourceFiles:\n  - src/parser.c\npackageName: com.example.toml\n",
    )
    .unwrap();

    let settings = load_manifest(&manifest_path).unwrap();
    let err = settings.resolve(temp_dir.path()).unwrap_err();

    assert_eq!(err, ConfigError::MissingRequiredField("className"));
}
