use crate::analysis::{get_component_properties, get_components, get_custom_event_types, get_member_description};
use crate::generators::base::{ComponentContext, ImportContext, MemberEntryContext, TemplateHelpers};
use crate::generators::docs::get_component_details_template;
use crate::generators::solid::templates::{self, create_template_engine, DECLARATION_TEMPLATE};
use crate::interface::config::{ComponentTypePath, Options};
use crate::models::{type_text, Component, Deprecation, Manifest, TypeSource, TypedMember};
use std::collections::HashSet;
use tera::{Context, Tera};

/// How component classes get into scope, in order of precedence
enum ImportStrategy<'a> {
    PerComponent(&'a ComponentTypePath),
    Global(&'a str),
    Literal,
}

/// Renders the SolidJS declaration file for a manifest
pub struct SolidTypeGenerator<'a> {
    options: &'a Options,
    tera: Tera,
}

impl<'a> SolidTypeGenerator<'a> {
    pub fn new(options: &'a Options) -> crate::Result<Self> {
        Ok(Self {
            options,
            tera: create_template_engine()?,
        })
    }

    pub fn render(&self, manifest: &Manifest) -> crate::Result<String> {
        let components = get_components(manifest, &self.options.exclude);
        self.get_type_template(&components)
    }

    /// Render the file from already extracted components.
    ///
    /// Every component takes part in imports and cross-references; only
    /// tag-bearing ones get a props type and a `CustomElements` entry.
    pub fn get_type_template(&self, components: &[Component]) -> crate::Result<String> {
        let component_names: Vec<String> = components
            .iter()
            .filter(|c| c.custom_element)
            .map(|c| c.name.clone())
            .collect();
        let tagged: Vec<ComponentContext> = components
            .iter()
            .filter(|c| c.has_tag_name())
            .map(|c| self.component_context(c))
            .collect();

        let mut context = Context::new();
        context.insert("imports", &self.import_contexts(components, &component_names));
        context.insert("global_events", &self.options.global_events);
        context.insert("components", &tagged);

        let rendered = templates::render(&self.tera, DECLARATION_TEMPLATE, &context)?;
        let mut output = rendered.trim_end().to_string();
        output.push('\n');
        Ok(output)
    }

    fn import_strategy(&self) -> ImportStrategy<'_> {
        if let Some(path) = &self.options.component_type_path {
            ImportStrategy::PerComponent(path)
        } else if let Some(path) = &self.options.global_type_path {
            ImportStrategy::Global(path)
        } else {
            ImportStrategy::Literal
        }
    }

    fn import_contexts(&self, components: &[Component], component_names: &[String]) -> Vec<ImportContext> {
        match self.import_strategy() {
            ImportStrategy::PerComponent(path) => components
                .iter()
                .map(|c| ImportContext {
                    specifiers: self.import_specifiers(c, component_names),
                    path: path.resolve(&c.name, c.tag()),
                })
                .collect(),
            ImportStrategy::Global(path) => {
                let mut seen = HashSet::new();
                let specifiers: Vec<String> = components
                    .iter()
                    .flat_map(|c| self.import_specifiers(c, component_names))
                    .filter(|s| seen.insert(s.clone()))
                    .collect();

                if specifiers.is_empty() {
                    Vec::new()
                } else {
                    vec![ImportContext {
                        specifiers,
                        path: path.to_string(),
                    }]
                }
            }
            ImportStrategy::Literal => Vec::new(),
        }
    }

    /// The component class followed by the event payload types it needs
    fn import_specifiers(&self, component: &Component, component_names: &[String]) -> Vec<String> {
        let class = if self.options.default_export {
            format!("default as {}", component.name)
        } else {
            component.name.clone()
        };

        let mut specifiers = vec![class];
        if let Some(types) = get_custom_event_types(component, component_names) {
            specifiers.extend(types.split(", ").map(str::to_string));
        }
        specifiers
    }

    fn component_context(&self, component: &Component) -> ComponentContext {
        ComponentContext {
            name: component.name.clone(),
            props_type_name: component.props_type_name(),
            tag_key: format!(
                "{}{}{}",
                self.options.prefix,
                component.tag().unwrap_or_default(),
                self.options.suffix
            ),
            docs: get_component_details_template(component, self.options),
            entries: self.member_entries(component),
        }
    }

    fn member_entries(&self, component: &Component) -> Vec<MemberEntryContext> {
        let mut entries = Vec::new();

        for attribute in component.attributes.iter().flatten() {
            let field = attribute
                .field_name
                .as_deref()
                .filter(|f| !f.is_empty())
                .unwrap_or(&attribute.name);
            entries.push(member_entry(
                attribute.description.as_deref(),
                attribute.deprecated.as_ref(),
                attribute.name.clone(),
                self.member_type(component, field, attribute),
            ));
        }

        for property in get_component_properties(component).unwrap_or_default() {
            entries.push(member_entry(
                property.description.as_deref(),
                property.deprecated.as_ref(),
                format!("prop:{}", property.name),
                self.member_type(component, &property.name, property),
            ));
        }

        for event in component.events.iter().flatten() {
            let payload = type_text(event.type_ref.as_ref()).unwrap_or("never");
            entries.push(member_entry(
                event.description.as_deref(),
                event.deprecated.as_ref(),
                format!("on:{}", event.name),
                format!("(e: CustomEvent<{}>) => void", payload),
            ));
        }

        entries
    }

    /// `Component['field']` when classes are imported, manifest type text otherwise
    fn member_type<M: TypedMember>(&self, component: &Component, field: &str, member: &M) -> String {
        if self.options.uses_type_imports() {
            return format!("{}[{}]", component.name, TemplateHelpers::quote_single(field));
        }

        let source = self.options.types_src.unwrap_or_default();
        type_text(member.type_field(source))
            .or_else(|| type_text(member.type_field(TypeSource::Type)))
            .unwrap_or("string")
            .to_string()
    }
}

fn member_entry(
    description: Option<&str>,
    deprecated: Option<&Deprecation>,
    key: String,
    type_text: String,
) -> MemberEntryContext {
    MemberEntryContext {
        description: get_member_description(description, deprecated),
        key,
        type_text,
    }
}
