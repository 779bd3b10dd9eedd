//! Integration tests for the hover documentation on `CustomElements` entries

use crate::common;
use crate::fixtures;

use common::render;
use custom_elements_typegen::{DescriptionSource, GenerateConfig, Labels};

fn dialog_docs(config: GenerateConfig) -> String {
    let content = render(fixtures::LIBRARY, config);
    let end = content.find("  \"my-dialog\":").unwrap();
    let start = content[..end].rfind("  /**").unwrap();
    content[start..end].to_string()
}

#[test]
fn test_summary_is_preferred_with_escaped_newlines() {
    let docs = dialog_docs(GenerateConfig::default());
    assert!(docs.contains("   * A modal dialog.\n   * Closes on escape.\n"));
    assert!(!docs.contains("Long form"));
    assert!(docs.contains("   * ---\n"));
}

#[test]
fn test_description_source_override() {
    let docs = dialog_docs(GenerateConfig {
        description_src: Some(DescriptionSource::Description),
        ..Default::default()
    });
    assert!(docs.contains("Long form dialog description"));
    assert!(!docs.contains("A modal dialog."));
}

#[test]
fn test_sections_in_order() {
    let docs = dialog_docs(GenerateConfig::default());
    let headings = [
        "### **Events:**",
        "### **Methods:**",
        "### **Slots:**",
        "### **CSS Properties:**",
        "### **CSS Parts:**",
    ];
    let positions: Vec<usize> = headings.iter().map(|h| docs.find(h).unwrap()).collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_section_lines() {
    let docs = dialog_docs(GenerateConfig::default());
    assert!(docs.contains("- **dialog-close** - Emitted after closing"));
    assert!(docs.contains("- **show(modal: _boolean_): _void_** - Opens the dialog"));
    assert!(docs.contains("- **close()**"));
    assert!(docs.contains("- _default_ - Dialog body"));
    assert!(docs.contains("- **footer** - Action buttons"));
    assert!(docs.contains("- **--dialog-width** - Panel width _(default: 32rem)_"));
    assert!(docs.contains("- **panel** - The dialog panel"));
}

#[test]
fn test_hidden_sections() {
    let docs = dialog_docs(GenerateConfig {
        hide_event_docs: Some(true),
        hide_method_docs: Some(true),
        hide_slot_docs: Some(true),
        hide_css_properties_docs: Some(true),
        hide_css_parts_docs: Some(true),
        ..Default::default()
    });
    assert!(!docs.contains("###"));
    assert!(docs.contains("   * A modal dialog."));
}

#[test]
fn test_custom_labels() {
    let docs = dialog_docs(GenerateConfig {
        labels: Some(Labels {
            events: Some("Ereignisse".to_string()),
            css_parts: Some("Parts".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    });
    assert!(docs.contains("### **Ereignisse:**"));
    assert!(docs.contains("### **Parts:**"));
    assert!(docs.contains("### **Methods:**"));
}

#[test]
fn test_component_without_docs_still_gets_a_comment() {
    let content = render(fixtures::BUTTON, GenerateConfig::default());
    assert!(content.contains("  /**\n   *\n   *\n   *\n   * ---\n   *\n   *\n   */\n  \"my-button\":"));
}
