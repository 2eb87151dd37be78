//! Grambind binary.
//!
//! Usage: `grambind <manifest> <output-root>`. Loads a grammar manifest,
//! resolves its settings, and generates the glue files under the output
//! root.

use std::path::{Path, PathBuf};

use grambind_application::GenerateGrammarFiles;
use grambind_infrastructure::{load_manifest, StdFileSystem};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args_os().skip(1);
    let (Some(manifest_path), Some(output_root)) = (args.next(), args.next()) else {
        eprintln!("usage: grambind <manifest> <output-root>");
        std::process::exit(2);
    };
    let manifest_path = PathBuf::from(manifest_path);
    let output_root = PathBuf::from(output_root);

    // Defaults anchor on the directory the manifest lives in.
    let invocation_dir = manifest_path.parent().unwrap_or_else(|| Path::new("."));

    let settings = load_manifest(&manifest_path)?;
    let config = settings.resolve(invocation_dir)?;

    tracing::info!(
        grammar = config.grammar_name(),
        manifest = %manifest_path.display(),
        "resolved grammar configuration"
    );

    let use_case = GenerateGrammarFiles::new(StdFileSystem::new());
    let artifacts = use_case.execute(&config, &output_root)?;

    tracing::info!(path = %artifacts.interop_file().display(), "interop definition");
    tracing::info!(path = %artifacts.cmake_lists_file().display(), "build descriptor");
    tracing::info!(path = %artifacts.generated_src_dir().display(), "generated sources");

    Ok(())
}
