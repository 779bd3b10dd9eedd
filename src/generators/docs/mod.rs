//! Markdown documentation for a single component.
//!
//! The output is embedded in the doc comment of each `CustomElements` entry so
//! editors show it on hover.

pub mod section;

use crate::analysis::{get_component_methods, get_description};
use crate::interface::config::Options;
use crate::models::{type_text, ClassMember, Component, CssPart, CssProperty, Event, Parameter, Slot};

pub use section::{DocumentBuilder, Section};

pub const DEFAULT_EVENTS_LABEL: &str = "Events";
pub const DEFAULT_METHODS_LABEL: &str = "Methods";
pub const DEFAULT_SLOTS_LABEL: &str = "Slots";
pub const DEFAULT_CSS_PROPERTIES_LABEL: &str = "CSS Properties";
pub const DEFAULT_CSS_PARTS_LABEL: &str = "CSS Parts";

/// Component description, a rule, then Events, Methods, Slots, CSS Properties and CSS Parts
pub fn get_component_details_template(component: &Component, options: &Options) -> String {
    let labels = &options.labels;

    DocumentBuilder::new(get_description(component, options.description_src))
        .section(get_events_template(
            component.events.as_deref(),
            options.hide_event_docs,
            labels.events.as_deref(),
        ))
        .section(get_methods_template(
            get_component_methods(component),
            options.hide_method_docs,
            labels.methods.as_deref(),
        ))
        .section(get_slots_template(
            component.slots.as_deref(),
            options.hide_slot_docs,
            labels.slots.as_deref(),
        ))
        .section(get_css_props_template(
            component.css_properties.as_deref(),
            options.hide_css_properties_docs,
            labels.css_properties.as_deref(),
        ))
        .section(get_parts_template(
            component.css_parts.as_deref(),
            options.hide_css_parts_docs,
            labels.css_parts.as_deref(),
        ))
        .build()
}

pub fn get_events_template(events: Option<&[Event]>, hide: bool, label: Option<&str>) -> Section {
    Section::from_items(events, hide, label.unwrap_or(DEFAULT_EVENTS_LABEL), |event| {
        bullet(&format!("**{}**", event.name), event.description.as_deref())
    })
}

pub fn get_methods_template(
    methods: Option<&[ClassMember]>,
    hide: bool,
    label: Option<&str>,
) -> Section {
    Section::from_items(methods, hide, label.unwrap_or(DEFAULT_METHODS_LABEL), |method| {
        let return_type = type_text(
            method
                .return_value
                .as_ref()
                .and_then(|r| r.type_ref.as_ref()),
        )
        .map(|text| format!(": _{}_", text))
        .unwrap_or_default();

        bullet(
            &format!(
                "**{}{}{}**",
                method.name,
                get_parameters(method.parameters.as_deref()),
                return_type
            ),
            method.description.as_deref(),
        )
    })
}

pub fn get_slots_template(slots: Option<&[Slot]>, hide: bool, label: Option<&str>) -> Section {
    Section::from_items(slots, hide, label.unwrap_or(DEFAULT_SLOTS_LABEL), |slot| {
        let name = match slot.name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) => format!("**{}**", name),
            None => "_default_".to_string(),
        };
        bullet(&name, slot.description.as_deref())
    })
}

pub fn get_css_props_template(
    properties: Option<&[CssProperty]>,
    hide: bool,
    label: Option<&str>,
) -> Section {
    Section::from_items(
        properties,
        hide,
        label.unwrap_or(DEFAULT_CSS_PROPERTIES_LABEL),
        |property| {
            let mut line = bullet(
                &format!("**{}**", property.name),
                property.description.as_deref(),
            );
            if let Some(default) = property.default.as_deref() {
                line.push_str(&format!(" _(default: {})_", default));
            }
            line
        },
    )
}

pub fn get_parts_template(parts: Option<&[CssPart]>, hide: bool, label: Option<&str>) -> Section {
    Section::from_items(parts, hide, label.unwrap_or(DEFAULT_CSS_PARTS_LABEL), |part| {
        bullet(&format!("**{}**", part.name), part.description.as_deref())
    })
}

/// `(a: _string_, b)`; `()` without parameters
fn get_parameters(parameters: Option<&[Parameter]>) -> String {
    let parameters = parameters
        .unwrap_or_default()
        .iter()
        .map(|parameter| match type_text(parameter.type_ref.as_ref()) {
            Some(text) => format!("{}: _{}_", parameter.name, text),
            None => parameter.name.clone(),
        })
        .collect::<Vec<_>>()
        .join(", ");
    format!("({})", parameters)
}

fn bullet(name: &str, description: Option<&str>) -> String {
    match description.filter(|d| !d.trim().is_empty()) {
        Some(description) => format!("- {} - {}", name, description),
        None => format!("- {}", name),
    }
}
