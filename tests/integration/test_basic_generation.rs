//! Integration tests for the generated declaration file
//! Tests the complete pipeline from manifest to `.d.ts` output

use crate::common;
use crate::fixtures;

use common::{render, TestProject};
use custom_elements_typegen::GenerateConfig;

#[test]
fn test_single_component_generates_props_and_mapping() {
    let project = TestProject::new();
    project.write_manifest(fixtures::BUTTON);

    let (output, content) = project.generate(&project.config());

    assert!(output.ends_with("types/solid-js.d.ts"));
    assert!(content.starts_with("import type { JSX } from \"solid-js\";"));
    assert!(content.contains("type ButtonProps = {\n  /** */\n  \"disabled\"?: boolean;\n};"));
    assert!(content.contains("  \"my-button\": Partial<ButtonProps | BaseProps | BaseEvents>;"));
}

#[test]
fn test_custom_file_name() {
    let project = TestProject::new();
    project.write_manifest(fixtures::BUTTON);

    let config = GenerateConfig {
        file_name: Some("custom-element-solidjs.d.ts".to_string()),
        ..project.config()
    };
    let (output, _) = project.generate(&config);
    assert!(output.ends_with("custom-element-solidjs.d.ts"));
}

#[test]
fn test_prefix_and_suffix_wrap_tag_names() {
    let content = render(
        fixtures::BUTTON,
        GenerateConfig {
            prefix: Some("x-".to_string()),
            suffix: Some("-el".to_string()),
            ..Default::default()
        },
    );
    assert!(content.contains("  \"x-my-button-el\": Partial<ButtonProps | BaseProps | BaseEvents>;"));
    assert!(!content.contains("  \"my-button\":"));
}

#[test]
fn test_excluded_component_is_left_out() {
    let content = render(
        fixtures::LIBRARY,
        GenerateConfig {
            exclude: Some(vec!["InternalThing".to_string()]),
            ..Default::default()
        },
    );
    assert!(content.contains("\"my-dialog\":"));
    assert!(!content.contains("internal-thing"));
    assert!(!content.contains("InternalThingProps"));
}

#[test]
fn test_event_handlers() {
    let content = render(fixtures::SWITCH_EVENTS, GenerateConfig::default());
    assert!(content.contains(
        "  /** Fired on toggle */\n  \"on:change\"?: (e: CustomEvent<string>) => void;"
    ));
    assert!(content.contains("  \"on:focus-lost\"?: (e: CustomEvent<never>) => void;"));
}

#[test]
fn test_public_fields_become_prop_entries() {
    let content = render(fixtures::LIBRARY, GenerateConfig::default());
    assert!(content.contains("  \"open\"?: boolean;"));
    assert!(content.contains("  \"prop:open\"?: boolean;"));
    assert!(content.contains("  /** Value passed to close() */\n  \"prop:returnValue\"?: string;"));
    assert!(!content.contains("prop:internals"));
    assert!(!content.contains("prop:styles"));
    assert!(!content.contains("prop:show"));
}

#[test]
fn test_deprecated_attribute_is_marked() {
    let content = render(fixtures::LIBRARY, GenerateConfig::default());
    assert!(content.contains("  /** @deprecated use label */\n  \"close-label\"?: string;"));
}

#[test]
fn test_tagless_component_has_no_entry() {
    let content = render(fixtures::LIBRARY, GenerateConfig::default());
    assert!(!content.contains("FocusMixin"));
    assert!(!content.contains("register"));
}

#[test]
fn test_global_events_are_inlined() {
    let content = render(
        fixtures::BUTTON,
        GenerateConfig {
            global_events: Some("\"on:my-click\"?: (e: MouseEvent) => void;".to_string()),
            ..Default::default()
        },
    );
    assert!(content.contains("type BaseEvents = {\"on:my-click\"?: (e: MouseEvent) => void;};"));
}

#[test]
fn test_empty_manifest_still_produces_scaffolding() {
    let content = render(r#"{"schemaVersion": "1.0.0", "modules": []}"#, GenerateConfig::default());
    assert!(content.contains("export type ScopedElements<"));
    assert!(content.contains("type BaseProps = {"));
    assert!(content.contains("type BaseEvents = {};"));
    assert!(content.contains("export type CustomElements = {};"));
}

#[test]
fn test_generation_is_idempotent() {
    let project = TestProject::new();
    project.write_manifest(fixtures::LIBRARY);

    let (_, first) = project.generate(&project.config());
    let (_, second) = project.generate(&project.config());
    assert_eq!(first, second);
}

#[test]
fn test_excluding_the_only_component_leaves_an_empty_mapping() {
    let content = render(
        fixtures::BUTTON,
        GenerateConfig {
            exclude: Some(vec!["Button".to_string()]),
            ..Default::default()
        },
    );
    assert!(content.contains("export type CustomElements = {};"));
    assert!(!content.contains("ButtonProps"));
}

#[test]
fn test_mapping_keeps_manifest_order() {
    let manifest = r#"{
      "modules": [
        { "declarations": [{ "name": "Zebra", "tagName": "z-el", "customElement": true }] },
        { "declarations": [{ "name": "Aardvark", "tagName": "a-el", "customElement": true }] }
      ]
    }"#;

    let content = render(manifest, GenerateConfig::default());
    assert!(content.find("\"z-el\":").unwrap() < content.find("\"a-el\":").unwrap());
    assert!(content.find("type ZebraProps").unwrap() < content.find("type AardvarkProps").unwrap());

    let wrapped = render(
        manifest,
        GenerateConfig {
            prefix: Some("x-".to_string()),
            suffix: Some("-v2".to_string()),
            ..Default::default()
        },
    );
    assert!(wrapped.find("\"x-z-el-v2\":").unwrap() < wrapped.find("\"x-a-el-v2\":").unwrap());
}
