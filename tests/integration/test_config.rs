//! Integration tests for configuration files and CLI merging

use crate::common;
use crate::fixtures;

use clap::Parser;
use common::TestProject;
use custom_elements_typegen::interface::cli::Cli;
use custom_elements_typegen::interface::config::ConfigError;
use custom_elements_typegen::{generate_from_config, GenerateConfig, Logger, TypeSource};

#[test]
fn test_config_file_drives_generation() {
    let project = TestProject::new();
    project.write_manifest(fixtures::BUTTON);
    project.write_file(
        "cem-typegen.json",
        &format!(
            r#"{{
              "manifest": {:?},
              "outdir": {:?},
              "fileName": "elements.d.ts",
              "prefix": "x-",
              "globalTypePath": "my-library"
            }}"#,
            project.path("custom-elements.json"),
            project.path("out"),
        ),
    );

    let config = GenerateConfig::from_file(project.path("cem-typegen.json")).unwrap();
    let (output, content) = project.generate(&config);

    assert!(output.ends_with("out/elements.d.ts"));
    assert!(content.contains("import type { Button } from \"my-library\";"));
    assert!(content.contains("  \"x-my-button\": Partial<ButtonProps | BaseProps | BaseEvents>;"));
}

#[test]
fn test_cli_flags_override_config_file() {
    let project = TestProject::new();
    project.write_file(
        "cem-typegen.json",
        r#"{ "prefix": "x-", "suffix": "-el", "typesSrc": "parsedType" }"#,
    );

    let cli = Cli::try_parse_from([
        "cem-typegen",
        "generate",
        "--prefix",
        "y-",
        "--types-src",
        "expandedType",
    ])
    .unwrap();

    let mut config = GenerateConfig::from_file(project.path("cem-typegen.json")).unwrap();
    config.merge(&GenerateConfig::from(&cli.command));
    let options = config.resolve();

    assert_eq!(options.prefix, "y-");
    assert_eq!(options.suffix, "-el");
    assert_eq!(options.types_src, Some(TypeSource::ExpandedType));
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let project = TestProject::new();
    project.write_file("cem-typegen.json", r#"{ "prefix": "bad\"quote" }"#);

    let result = GenerateConfig::from_file(project.path("cem-typegen.json"));
    assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
}

#[test]
fn test_init_config_round_trips_defaults() {
    let project = TestProject::new();
    let path = project.path("cem-typegen.json");

    GenerateConfig::with_defaults().save_to_file(&path).unwrap();
    let loaded = GenerateConfig::from_file(&path).unwrap();
    let options = loaded.resolve();

    assert_eq!(options.manifest, "./custom-elements.json");
    assert_eq!(options.outdir, "./");
    assert_eq!(options.file_name, "solid-js.d.ts");
    assert!(options.exclude.is_empty());
}

#[test]
fn test_malformed_manifest_reports_parse_error() {
    let project = TestProject::new();
    project.write_manifest("{ \"modules\": [");

    let err = generate_from_config(&project.config(), &Logger::quiet()).unwrap_err();
    assert!(matches!(err, custom_elements_typegen::Error::ManifestParse(_)));
}
