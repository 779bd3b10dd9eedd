use crate::interface::config::{ComponentTypePath, GenerateConfig};
use crate::models::{DescriptionSource, TypeSource};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cem-typegen")]
#[command(about = "Generate SolidJS type declarations from a Custom Elements Manifest")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the declaration file from a custom-elements.json manifest
    Generate {
        /// Path to the manifest (default: ./custom-elements.json)
        #[arg(short = 'm', long = "manifest")]
        manifest: Option<PathBuf>,

        /// Output directory (default: ./)
        #[arg(short = 'o', long = "outdir")]
        outdir: Option<PathBuf>,

        /// Output file name (default: solid-js.d.ts)
        #[arg(long = "file-name")]
        file_name: Option<String>,

        /// Component class names to exclude
        #[arg(short = 'e', long = "exclude", value_delimiter = ',')]
        exclude: Vec<String>,

        /// Prefix added to every tag name
        #[arg(long)]
        prefix: Option<String>,

        /// Suffix added to every tag name
        #[arg(long)]
        suffix: Option<String>,

        /// Per-component import path, `{name}` and `{tagName}` are substituted
        #[arg(long = "component-type-path")]
        component_type_path: Option<String>,

        /// Import path exporting every component type
        #[arg(long = "global-type-path")]
        global_type_path: Option<String>,

        /// Manifest field to read type text from (type, parsedType, expandedType)
        #[arg(long = "types-src")]
        types_src: Option<TypeSource>,

        /// Import component classes as default exports
        #[arg(long, action = clap::ArgAction::SetTrue)]
        default_export: bool,

        /// Type literal body inserted into BaseEvents
        #[arg(long = "global-events")]
        global_events: Option<String>,

        /// Component field used as description (description or summary)
        #[arg(long = "description-src")]
        description_src: Option<DescriptionSource>,

        #[arg(long, action = clap::ArgAction::SetTrue)]
        hide_slot_docs: bool,

        #[arg(long, action = clap::ArgAction::SetTrue)]
        hide_event_docs: bool,

        #[arg(long, action = clap::ArgAction::SetTrue)]
        hide_css_properties_docs: bool,

        #[arg(long, action = clap::ArgAction::SetTrue)]
        hide_css_parts_docs: bool,

        #[arg(long, action = clap::ArgAction::SetTrue)]
        hide_method_docs: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
    /// Write a configuration file with the default settings
    Init {
        /// Output path for the configuration file
        #[arg(short = 'o', long = "output", default_value = "cem-typegen.json")]
        output_path: PathBuf,

        /// Force overwrite existing configuration
        #[arg(long, action = clap::ArgAction::SetTrue)]
        force: bool,
    },
}

/// Flags left unset on the command line stay `None` so they do not override a config file
impl From<&Commands> for GenerateConfig {
    fn from(cmd: &Commands) -> Self {
        let flag = |set: bool| if set { Some(true) } else { None };

        match cmd {
            Commands::Generate {
                manifest,
                outdir,
                file_name,
                exclude,
                prefix,
                suffix,
                component_type_path,
                global_type_path,
                types_src,
                default_export,
                global_events,
                description_src,
                hide_slot_docs,
                hide_event_docs,
                hide_css_properties_docs,
                hide_css_parts_docs,
                hide_method_docs,
                verbose,
                ..
            } => GenerateConfig {
                manifest: manifest.as_ref().map(|p| p.to_string_lossy().to_string()),
                outdir: outdir.as_ref().map(|p| p.to_string_lossy().to_string()),
                file_name: file_name.clone(),
                exclude: if exclude.is_empty() {
                    None
                } else {
                    Some(exclude.clone())
                },
                prefix: prefix.clone(),
                suffix: suffix.clone(),
                component_type_path: component_type_path.clone().map(ComponentTypePath::Template),
                global_type_path: global_type_path.clone(),
                types_src: *types_src,
                default_export: flag(*default_export),
                global_events: global_events.clone(),
                description_src: *description_src,
                hide_slot_docs: flag(*hide_slot_docs),
                hide_event_docs: flag(*hide_event_docs),
                hide_css_properties_docs: flag(*hide_css_properties_docs),
                hide_css_parts_docs: flag(*hide_css_parts_docs),
                hide_method_docs: flag(*hide_method_docs),
                labels: None,
                verbose: flag(*verbose),
            },
            Commands::Init { .. } => GenerateConfig::with_defaults(),
        }
    }
}
