pub mod generator;
pub mod templates;

pub use generator::SolidTypeGenerator;

use crate::analysis::get_components;
use crate::generators::base::FileWriter;
use crate::interface::config::GenerateConfig;
use crate::interface::output::Logger;
use crate::models::Manifest;
use std::path::PathBuf;

/// Resolve options, render the declaration file and write it to `outdir/fileName`.
///
/// Returns the path of the written file.
pub fn generate_solid_js_types(
    manifest: &Manifest,
    config: &GenerateConfig,
    logger: &Logger,
) -> crate::Result<PathBuf> {
    let options = config.resolve();

    let components = get_components(manifest, &options.exclude);
    logger.verbose(&format!("Found {} custom elements:", components.len()));
    for component in &components {
        match component.tag() {
            Some(tag) => logger.verbose(&format!("  - {} <{}>", component.name, tag)),
            None => logger.verbose(&format!("  - {} (no tag name, not mapped)", component.name)),
        }
    }

    let template = SolidTypeGenerator::new(&options)?.get_type_template(&components)?;

    let mut writer = FileWriter::new(&options.outdir)?;
    let output_path = writer.write_file(&options.file_name, &template)?;

    logger.info(&format!(
        "[solidjs-type-generator] - Generated \"{}\".",
        output_path.display()
    ));
    Ok(output_path)
}
