//! Integration tests for component type imports

use crate::common;
use crate::fixtures;

use common::render;
use custom_elements_typegen::{ComponentTypePath, GenerateConfig, TypeSource};

fn import_lines(content: &str) -> usize {
    content.lines().filter(|line| line.starts_with("import type")).count()
}

#[test]
fn test_no_imports_without_type_paths() {
    let content = render(fixtures::LIBRARY, GenerateConfig::default());
    assert_eq!(import_lines(&content), 1);
    assert!(content.contains("  \"open\"?: boolean;"));
}

#[test]
fn test_per_component_imports_include_event_payload_types() {
    let content = render(
        fixtures::LIBRARY,
        GenerateConfig {
            component_type_path: Some(ComponentTypePath::template("./src/{tagName}.js")),
            ..Default::default()
        },
    );

    assert!(content.contains("import type { Dialog, DialogCloseDetail } from \"./src/my-dialog.js\";"));
    assert!(content.contains("import type { InternalThing } from \"./src/internal-thing.js\";"));
    assert!(content.contains("  \"open\"?: Dialog['open'];"));
    assert!(content.contains("  \"close-label\"?: Dialog['closeLabel'];"));
    assert!(content.contains("  \"prop:returnValue\"?: Dialog['returnValue'];"));
}

#[test]
fn test_resolver_receives_name_and_tag() {
    let content = render(
        fixtures::BUTTON,
        GenerateConfig {
            component_type_path: Some(ComponentTypePath::resolver(|name, tag| {
                format!("./{}/{}.js", tag.unwrap_or("shared"), name.to_lowercase())
            })),
            ..Default::default()
        },
    );
    assert!(content.contains("import type { Button } from \"./my-button/button.js\";"));
}

#[test]
fn test_global_import_is_a_single_statement() {
    let content = render(
        fixtures::LIBRARY,
        GenerateConfig {
            global_type_path: Some("my-library".to_string()),
            ..Default::default()
        },
    );

    assert!(content.contains(
        "import type { Dialog, DialogCloseDetail, FocusMixin, InternalThing } from \"my-library\";"
    ));
    assert_eq!(import_lines(&content), 2);
}

#[test]
fn test_default_export_imports() {
    let content = render(
        fixtures::BUTTON,
        GenerateConfig {
            global_type_path: Some("my-library".to_string()),
            default_export: Some(true),
            ..Default::default()
        },
    );
    assert!(content.contains("import type { default as Button } from \"my-library\";"));
    assert!(content.contains("  \"disabled\"?: Button['disabled'];"));
}

#[test]
fn test_types_src_without_imports() {
    let manifest = r#"{
      "modules": [{
        "declarations": [{
          "name": "Field",
          "tagName": "my-field",
          "customElement": true,
          "attributes": [
            { "name": "size", "type": { "text": "Size" }, "expandedType": { "text": "'s' | 'm' | 'l'" } },
            { "name": "label", "type": { "text": "string" } },
            { "name": "hint" }
          ]
        }]
      }]
    }"#;

    let content = render(
        manifest,
        GenerateConfig {
            types_src: Some(TypeSource::ExpandedType),
            ..Default::default()
        },
    );
    assert!(content.contains("  \"size\"?: 's' | 'm' | 'l';"));
    assert!(content.contains("  \"label\"?: string;"));
    assert!(content.contains("  \"hint\"?: string;"));
}

#[test]
fn test_union_event_payload_members_are_imported() {
    let manifest = r#"{
      "modules": [{
        "declarations": [{
          "name": "Select",
          "tagName": "my-select",
          "customElement": true,
          "events": [
            { "name": "change", "type": { "text": "SelectChangeDetail | undefined" } },
            { "name": "pick", "type": { "text": "CustomEvent<SelectItem & Selectable>" } }
          ]
        }]
      }]
    }"#;

    let content = render(
        manifest,
        GenerateConfig {
            global_type_path: Some("my-library".to_string()),
            ..Default::default()
        },
    );
    assert!(content.contains(
        "import type { Select, SelectChangeDetail, SelectItem, Selectable } from \"my-library\";"
    ));
}
