use crate::models::{DescriptionSource, TypeSource};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

pub const DEFAULT_FILE_NAME: &str = "solid-js.d.ts";
pub const DEFAULT_OUTDIR: &str = "./";
pub const DEFAULT_MANIFEST: &str = "./custom-elements.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Configuration file already exists: {0}. Use --force to overwrite")]
    AlreadyExists(String),
}

type PathResolver = dyn Fn(&str, Option<&str>) -> String + Send + Sync;

/// Import path for a single component's type.
///
/// Config files and the CLI can only express the template form, where `{name}`
/// and `{tagName}` are substituted. Library callers may pass a closure.
#[derive(Clone)]
pub enum ComponentTypePath {
    Template(String),
    Resolver(Arc<PathResolver>),
}

impl ComponentTypePath {
    pub fn template(template: impl Into<String>) -> Self {
        ComponentTypePath::Template(template.into())
    }

    pub fn resolver<F>(resolver: F) -> Self
    where
        F: Fn(&str, Option<&str>) -> String + Send + Sync + 'static,
    {
        ComponentTypePath::Resolver(Arc::new(resolver))
    }

    pub fn resolve(&self, name: &str, tag_name: Option<&str>) -> String {
        match self {
            ComponentTypePath::Template(template) => template
                .replace("{name}", name)
                .replace("{tagName}", tag_name.unwrap_or_default()),
            ComponentTypePath::Resolver(resolver) => resolver(name, tag_name),
        }
    }
}

impl fmt::Debug for ComponentTypePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentTypePath::Template(template) => {
                f.debug_tuple("Template").field(template).finish()
            }
            ComponentTypePath::Resolver(_) => f.write_str("Resolver(..)"),
        }
    }
}

impl Serialize for ComponentTypePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ComponentTypePath::Template(template) => serializer.serialize_str(template),
            // closures have no JSON form
            ComponentTypePath::Resolver(_) => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for ComponentTypePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        String::deserialize(deserializer).map(ComponentTypePath::Template)
    }
}

/// Heading overrides for the documentation sections
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Labels {
    #[serde(default)]
    pub slots: Option<String>,
    #[serde(default)]
    pub events: Option<String>,
    #[serde(default)]
    pub css_properties: Option<String>,
    #[serde(default)]
    pub css_parts: Option<String>,
    #[serde(default)]
    pub methods: Option<String>,
}

impl Labels {
    fn merge(&mut self, other: &Labels) {
        if other.slots.is_some() {
            self.slots = other.slots.clone();
        }
        if other.events.is_some() {
            self.events = other.events.clone();
        }
        if other.css_properties.is_some() {
            self.css_properties = other.css_properties.clone();
        }
        if other.css_parts.is_some() {
            self.css_parts = other.css_parts.clone();
        }
        if other.methods.is_some() {
            self.methods = other.methods.clone();
        }
    }
}

/// User supplied configuration. Every field is optional; see [`GenerateConfig::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateConfig {
    /// Path to the Custom Elements Manifest
    #[serde(default)]
    pub manifest: Option<String>,

    /// Name of the generated declaration file
    #[serde(default)]
    pub file_name: Option<String>,

    /// Directory the declaration file is written to
    #[serde(default)]
    pub outdir: Option<String>,

    /// Component class names to leave out
    #[serde(default)]
    pub exclude: Option<Vec<String>>,

    /// Prepended to every tag name in `CustomElements`
    #[serde(default)]
    pub prefix: Option<String>,

    /// Appended to every tag name in `CustomElements`
    #[serde(default)]
    pub suffix: Option<String>,

    /// Per-component import path; takes precedence over `global_type_path`
    #[serde(default)]
    pub component_type_path: Option<ComponentTypePath>,

    /// Single import path exporting every component type
    #[serde(default)]
    pub global_type_path: Option<String>,

    /// Alternate manifest type field used when no import path is configured
    #[serde(default)]
    pub types_src: Option<TypeSource>,

    /// Import component classes as default exports
    #[serde(default)]
    pub default_export: Option<bool>,

    /// Inserted verbatim into the body of `BaseEvents`
    #[serde(default)]
    pub global_events: Option<String>,

    #[serde(default)]
    pub description_src: Option<DescriptionSource>,

    #[serde(default)]
    pub hide_slot_docs: Option<bool>,

    #[serde(default)]
    pub hide_event_docs: Option<bool>,

    #[serde(default)]
    pub hide_css_properties_docs: Option<bool>,

    #[serde(default)]
    pub hide_css_parts_docs: Option<bool>,

    #[serde(default)]
    pub hide_method_docs: Option<bool>,

    #[serde(default)]
    pub labels: Option<Labels>,

    /// Enable verbose output
    #[serde(default)]
    pub verbose: Option<bool>,
}

/// Fully populated options, produced by [`GenerateConfig::resolve`]
#[derive(Debug, Clone)]
pub struct Options {
    pub manifest: String,
    pub file_name: String,
    pub outdir: String,
    pub exclude: Vec<String>,
    pub prefix: String,
    pub suffix: String,
    pub component_type_path: Option<ComponentTypePath>,
    pub global_type_path: Option<String>,
    pub types_src: Option<TypeSource>,
    pub default_export: bool,
    pub global_events: String,
    pub description_src: Option<DescriptionSource>,
    pub hide_slot_docs: bool,
    pub hide_event_docs: bool,
    pub hide_css_properties_docs: bool,
    pub hide_css_parts_docs: bool,
    pub hide_method_docs: bool,
    pub labels: Labels,
    pub verbose: bool,
}

impl Options {
    /// Member types are expressed as lookups into imported component classes
    pub fn uses_type_imports(&self) -> bool {
        self.component_type_path.is_some() || self.global_type_path.is_some()
    }
}

impl Default for Options {
    fn default() -> Self {
        GenerateConfig::default().resolve()
    }
}

impl GenerateConfig {
    /// Create a new configuration with nothing set
    pub fn new() -> Self {
        Self::default()
    }

    /// A configuration with every defaultable value filled in, used by `init`
    pub fn with_defaults() -> Self {
        Self {
            manifest: Some(DEFAULT_MANIFEST.to_string()),
            file_name: Some(DEFAULT_FILE_NAME.to_string()),
            outdir: Some(DEFAULT_OUTDIR.to_string()),
            exclude: Some(Vec::new()),
            prefix: Some(String::new()),
            suffix: Some(String::new()),
            ..Default::default()
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(file_name) = &self.file_name {
            if file_name.trim().is_empty() {
                return Err(ConfigError::InvalidConfig(
                    "fileName must not be empty".to_string(),
                ));
            }
        }

        for (key, value) in [("prefix", &self.prefix), ("suffix", &self.suffix)] {
            if let Some(value) = value {
                if value.contains(['"', '\\', '\n']) {
                    return Err(ConfigError::InvalidConfig(format!(
                        "{} contains characters that cannot appear in a tag name: {:?}",
                        key, value
                    )));
                }
            }
        }

        Ok(())
    }

    /// Merge with another configuration, with other taking precedence
    pub fn merge(&mut self, other: &GenerateConfig) {
        macro_rules! take {
            ($($field:ident),*) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field.clone();
                    }
                )*
            };
        }

        take!(
            manifest,
            file_name,
            outdir,
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
            verbose
        );

        if let Some(labels) = &other.labels {
            self.labels
                .get_or_insert_with(Labels::default)
                .merge(labels);
        }
    }

    /// Apply defaults to every unset value. Set values, empty or not, are kept.
    pub fn resolve(&self) -> Options {
        Options {
            manifest: self
                .manifest
                .clone()
                .unwrap_or_else(|| DEFAULT_MANIFEST.to_string()),
            file_name: self
                .file_name
                .clone()
                .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string()),
            outdir: self
                .outdir
                .clone()
                .unwrap_or_else(|| DEFAULT_OUTDIR.to_string()),
            exclude: self.exclude.clone().unwrap_or_default(),
            prefix: self.prefix.clone().unwrap_or_default(),
            suffix: self.suffix.clone().unwrap_or_default(),
            component_type_path: self.component_type_path.clone(),
            global_type_path: self.global_type_path.clone(),
            types_src: self.types_src,
            default_export: self.default_export.unwrap_or(false),
            global_events: self.global_events.clone().unwrap_or_default(),
            description_src: self.description_src,
            hide_slot_docs: self.hide_slot_docs.unwrap_or(false),
            hide_event_docs: self.hide_event_docs.unwrap_or(false),
            hide_css_properties_docs: self.hide_css_properties_docs.unwrap_or(false),
            hide_css_parts_docs: self.hide_css_parts_docs.unwrap_or(false),
            hide_method_docs: self.hide_method_docs.unwrap_or(false),
            labels: self.labels.clone().unwrap_or_default(),
            verbose: self.verbose.unwrap_or(false),
        }
    }

    /// Get effective verbose setting
    pub fn is_verbose(&self) -> bool {
        self.verbose.unwrap_or(false)
    }
}
