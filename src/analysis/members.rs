use crate::models::{type_text, ClassMember, Component, Deprecation, DescriptionSource};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Names that never need an import next to a component class
const BUILT_IN_TYPES: &[&str] = &[
    "any", "bigint", "boolean", "never", "null", "number", "object", "string", "symbol",
    "undefined", "unknown", "void", "Array", "Blob", "Boolean", "CustomEvent", "Date", "Element",
    "Error", "Event", "File", "FocusEvent", "Function", "InputEvent", "KeyboardEvent", "Map",
    "MouseEvent", "Node", "Number", "Object", "PointerEvent", "Promise", "Record", "Set", "String",
];

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is valid")
    })
}

/// Public field members, rendered as `prop:` entries
pub fn get_component_properties(component: &Component) -> Option<&[ClassMember]> {
    component.properties.as_deref()
}

/// Public method members
pub fn get_component_methods(component: &Component) -> Option<&[ClassMember]> {
    component.methods.as_deref()
}

/// Named event payload types that have to be imported alongside the component class.
///
/// Union and intersection payloads are split into their members. Only plain
/// identifiers survive: structural types, literals, generics and built-ins are
/// skipped, as are `known_components` (those are already imported as classes).
/// Returns `None` when nothing needs importing.
pub fn get_custom_event_types(component: &Component, known_components: &[String]) -> Option<String> {
    let events = component.events.as_ref()?;
    let mut seen = HashSet::new();

    let types: Vec<&str> = events
        .iter()
        .filter_map(|event| type_text(event.type_ref.as_ref()))
        .flat_map(payload_type_names)
        .filter(|name| identifier_pattern().is_match(name))
        .filter(|name| !is_built_in(name))
        .filter(|name| !known_components.iter().any(|known| known == name))
        .filter(|name| seen.insert(*name))
        .collect();

    if types.is_empty() {
        None
    } else {
        Some(types.join(", "))
    }
}

/// `CustomEvent<Detail[] | null>` -> `Detail`, `null`
fn payload_type_names(text: &str) -> impl Iterator<Item = &str> {
    let mut payload = text.trim();
    if let Some(inner) = payload
        .strip_prefix("CustomEvent<")
        .and_then(|rest| rest.strip_suffix('>'))
    {
        payload = inner.trim();
    }
    payload.split(['|', '&']).map(element_type_name)
}

/// `(Detail)[]` -> `Detail`
fn element_type_name(part: &str) -> &str {
    let mut name = part.trim();
    loop {
        let unwrapped = name.trim_start_matches('(').trim_end_matches(')').trim();
        let element = unwrapped
            .strip_suffix("[]")
            .map(str::trim_end)
            .unwrap_or(unwrapped);
        if element == name {
            return name;
        }
        name = element;
    }
}

fn is_built_in(name: &str) -> bool {
    BUILT_IN_TYPES.contains(&name) || name.starts_with("HTML") || name.starts_with("SVG")
}

/// Member description with a visible `@deprecated` marker when the member is deprecated.
///
/// A deprecation reason follows the marker; the description follows after ` - `.
pub fn get_member_description(description: Option<&str>, deprecated: Option<&Deprecation>) -> String {
    let description = description.filter(|text| !text.trim().is_empty());

    match deprecated.filter(|deprecation| deprecation.is_deprecated()) {
        None => description.unwrap_or_default().to_string(),
        Some(deprecation) => {
            let mut text = String::from("@deprecated");
            if let Some(reason) = deprecation.reason() {
                text.push(' ');
                text.push_str(reason);
            }
            if let Some(description) = description {
                text.push_str(" - ");
                text.push_str(description);
            }
            text
        }
    }
}

/// Component description from the configured source.
///
/// Without a source the summary wins over the description. Escaped `\n`
/// sequences are turned into real line breaks.
pub fn get_description(component: &Component, source: Option<DescriptionSource>) -> String {
    let non_empty = |text: &Option<String>| text.clone().filter(|t| !t.trim().is_empty());

    let text = match source {
        Some(DescriptionSource::Description) => non_empty(&component.description),
        Some(DescriptionSource::Summary) => non_empty(&component.summary),
        None => non_empty(&component.summary).or_else(|| non_empty(&component.description)),
    };

    text.map(|t| t.replace("\\n", "\n")).unwrap_or_default()
}
