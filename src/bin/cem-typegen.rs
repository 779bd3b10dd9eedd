use clap::Parser;
use custom_elements_typegen::interface::cli::{Cli, Commands};
use custom_elements_typegen::interface::config::{ConfigError, GenerateConfig};
use custom_elements_typegen::interface::output::{Logger, ProgressReporter, Stage};
use custom_elements_typegen::interface::load_manifest;
use custom_elements_typegen::{analysis, generate_solid_js_types};
use std::path::Path;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate { config_file, .. } => run_generate(&cli.command, config_file.as_deref()),
        Commands::Init { output_path, force } => run_init(output_path, *force),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(cmd: &Commands, config_file: Option<&Path>) -> custom_elements_typegen::Result<()> {
    let cli_config = GenerateConfig::from(cmd);
    let logger = Logger::new(cli_config.is_verbose(), false);
    let mut reporter = ProgressReporter::new(logger.clone());

    reporter.start(Stage::LoadConfig);
    let mut config = match config_file {
        Some(path) => reporter.check(GenerateConfig::from_file(path))?,
        None => GenerateConfig::new(),
    };
    config.merge(&cli_config);
    reporter.check(config.validate())?;
    let options = config.resolve();
    reporter.complete(Some(&format!("manifest {}", options.manifest)));

    reporter.start(Stage::ReadManifest);
    let manifest = reporter.check(load_manifest(&options))?;
    let component_count = analysis::get_components(&manifest, &options.exclude)
        .iter()
        .filter(|c| c.has_tag_name())
        .count();
    reporter.complete(Some(&format!("{} custom elements", component_count)));

    reporter.start(Stage::Generate);
    let output_path = reporter.check(generate_solid_js_types(&manifest, &config, &logger))?;
    reporter.complete(None);

    reporter.finish(&output_path.to_string_lossy(), component_count);
    Ok(())
}

fn run_init(output_path: &Path, force: bool) -> custom_elements_typegen::Result<()> {
    if output_path.exists() && !force {
        return Err(ConfigError::AlreadyExists(output_path.display().to_string()).into());
    }

    GenerateConfig::with_defaults().save_to_file(output_path)?;
    println!("✓ Wrote configuration to {}", output_path.display());
    Ok(())
}
