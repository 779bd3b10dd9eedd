use crate::models::{ClassMember, Component, Declaration, Manifest};

/// Collect every custom-element declaration across all modules, in manifest order.
///
/// A declaration qualifies when it is flagged as a custom element or carries a
/// tag name. Declarations listed in `exclude` are dropped. Components without a
/// tag name are kept so they can still be referenced by name.
pub fn get_components(manifest: &Manifest, exclude: &[String]) -> Vec<Component> {
    manifest
        .modules
        .iter()
        .filter_map(|module| module.declarations.as_ref())
        .flatten()
        .filter(|declaration| is_custom_element(declaration))
        .filter(|declaration| {
            let name = declaration.name.as_deref().unwrap_or_default();
            !exclude.iter().any(|excluded| excluded == name)
        })
        .map(normalize)
        .collect()
}

fn is_custom_element(declaration: &Declaration) -> bool {
    declaration.custom_element.unwrap_or(false) || declaration.tag_name.is_some()
}

fn normalize(declaration: &Declaration) -> Component {
    Component {
        name: declaration.name.clone().unwrap_or_default(),
        tag_name: declaration.tag_name.clone(),
        custom_element: declaration.custom_element.unwrap_or(false),
        description: declaration.description.clone(),
        summary: declaration.summary.clone(),
        deprecated: declaration.deprecated.clone(),
        attributes: declaration.attributes.clone(),
        properties: public_members(declaration, ClassMember::is_field),
        methods: public_members(declaration, ClassMember::is_method),
        events: declaration.events.clone(),
        slots: declaration.slots.clone(),
        css_properties: declaration.css_properties.clone(),
        css_parts: declaration.css_parts.clone(),
    }
}

fn public_members(
    declaration: &Declaration,
    kind: fn(&ClassMember) -> bool,
) -> Option<Vec<ClassMember>> {
    declaration.members.as_ref().map(|members| {
        members
            .iter()
            .filter(|member| kind(member) && member.is_public())
            .cloned()
            .collect()
    })
}
