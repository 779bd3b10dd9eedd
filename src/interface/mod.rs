pub mod cli;
pub mod config;
pub mod output;

use crate::generators::generate_solid_js_types;
use crate::models::Manifest;
use std::path::{Path, PathBuf};

pub use cli::*;
pub use config::*;
pub use output::*;

/// Parse the manifest at `options.manifest`, reporting a missing file as a config error
pub fn load_manifest(options: &config::Options) -> crate::Result<Manifest> {
    let manifest_path = Path::new(&options.manifest);
    if !manifest_path.exists() {
        return Err(ConfigError::InvalidConfig(format!(
            "Manifest not found: {}",
            manifest_path.display()
        ))
        .into());
    }
    Manifest::from_file(manifest_path)
}

/// Read the manifest named by the configuration and write the declaration file
pub fn generate_from_config(
    config: &config::GenerateConfig,
    logger: &output::Logger,
) -> crate::Result<PathBuf> {
    config.validate()?;

    let options = config.resolve();
    logger.verbose(&format!("🔍 Reading manifest: {}", options.manifest));
    let manifest = load_manifest(&options)?;

    if config.is_verbose() {
        logger.verbose(&format!("📦 {} modules in manifest", manifest.modules.len()));
        if !options.exclude.is_empty() {
            logger.verbose(&format!("🚫 Excluding: {}", options.exclude.join(", ")));
        }
    }

    generate_solid_js_types(&manifest, config, logger)
}
