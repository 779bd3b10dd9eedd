use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Root of a Custom Elements Manifest (`custom-elements.json`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub schema_version: Option<String>,
    #[serde(default)]
    pub modules: Vec<Module>,
}

impl Manifest {
    /// Parse a manifest from its JSON text
    pub fn from_json(content: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Read and parse a manifest file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Module {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub declarations: Option<Vec<Declaration>>,
}

/// A raw module declaration. Only class declarations flagged as custom elements
/// (or carrying a tag name) become components.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Declaration {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tag_name: Option<String>,
    #[serde(default)]
    pub custom_element: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub deprecated: Option<Deprecation>,
    #[serde(default)]
    pub attributes: Option<Vec<Attribute>>,
    #[serde(default)]
    pub members: Option<Vec<ClassMember>>,
    #[serde(default)]
    pub events: Option<Vec<Event>>,
    #[serde(default)]
    pub slots: Option<Vec<Slot>>,
    #[serde(default)]
    pub css_properties: Option<Vec<CssProperty>>,
    #[serde(default)]
    pub css_parts: Option<Vec<CssPart>>,
}

/// `deprecated` is either a plain flag or a reason string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Deprecation {
    Flag(bool),
    Reason(String),
}

impl Deprecation {
    pub fn is_deprecated(&self) -> bool {
        match self {
            Deprecation::Flag(flag) => *flag,
            Deprecation::Reason(_) => true,
        }
    }

    pub fn reason(&self) -> Option<&str> {
        match self {
            Deprecation::Reason(reason) if !reason.trim().is_empty() => Some(reason),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeRef {
    #[serde(default)]
    pub text: String,
}

impl TypeRef {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Returns the type text when a type reference is present and non-blank
pub fn type_text(type_ref: Option<&TypeRef>) -> Option<&str> {
    type_ref
        .map(|t| t.text.as_str())
        .filter(|text| !text.trim().is_empty())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub field_name: Option<String>,
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub parsed_type: Option<TypeRef>,
    #[serde(default)]
    pub expanded_type: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: Option<Deprecation>,
    #[serde(default)]
    pub default: Option<String>,
}

/// A class member: `kind` is `field` for properties and `method` for methods
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassMember {
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "static")]
    pub is_static: Option<bool>,
    #[serde(default)]
    pub privacy: Option<String>,
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub parsed_type: Option<TypeRef>,
    #[serde(default)]
    pub expanded_type: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: Option<Deprecation>,
    #[serde(default)]
    pub attribute: Option<String>,
    #[serde(default)]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(default, rename = "return")]
    pub return_value: Option<ReturnValue>,
}

impl ClassMember {
    pub fn is_field(&self) -> bool {
        self.kind.as_deref() == Some("field")
    }

    pub fn is_method(&self) -> bool {
        self.kind.as_deref() == Some("method")
    }

    /// Public, instance-level and not an ECMAScript `#private` name
    pub fn is_public(&self) -> bool {
        !matches!(self.privacy.as_deref(), Some("private") | Some("protected"))
            && !self.is_static.unwrap_or(false)
            && !self.name.starts_with('#')
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub optional: Option<bool>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReturnValue {
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub type_ref: Option<TypeRef>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deprecated: Option<Deprecation>,
}

/// A slot without a name is the default slot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssProperty {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub syntax: Option<String>,
    #[serde(default)]
    pub default: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CssPart {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Manifest field a member's type text is read from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeSource {
    #[default]
    Type,
    ParsedType,
    ExpandedType,
}

impl FromStr for TypeSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "type" => Ok(TypeSource::Type),
            "parsedType" => Ok(TypeSource::ParsedType),
            "expandedType" => Ok(TypeSource::ExpandedType),
            other => Err(format!(
                "unknown type source '{}'. Use 'type', 'parsedType' or 'expandedType'",
                other
            )),
        }
    }
}

impl fmt::Display for TypeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSource::Type => write!(f, "type"),
            TypeSource::ParsedType => write!(f, "parsedType"),
            TypeSource::ExpandedType => write!(f, "expandedType"),
        }
    }
}

/// Members that carry the standard and alternate type fields
pub trait TypedMember {
    fn type_field(&self, source: TypeSource) -> Option<&TypeRef>;
}

impl TypedMember for Attribute {
    fn type_field(&self, source: TypeSource) -> Option<&TypeRef> {
        match source {
            TypeSource::Type => self.type_ref.as_ref(),
            TypeSource::ParsedType => self.parsed_type.as_ref(),
            TypeSource::ExpandedType => self.expanded_type.as_ref(),
        }
    }
}

impl TypedMember for ClassMember {
    fn type_field(&self, source: TypeSource) -> Option<&TypeRef> {
        match source {
            TypeSource::Type => self.type_ref.as_ref(),
            TypeSource::ParsedType => self.parsed_type.as_ref(),
            TypeSource::ExpandedType => self.expanded_type.as_ref(),
        }
    }
}

/// Component field used as the documentation description
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DescriptionSource {
    Description,
    Summary,
}

impl FromStr for DescriptionSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "description" => Ok(DescriptionSource::Description),
            "summary" => Ok(DescriptionSource::Summary),
            other => Err(format!(
                "unknown description source '{}'. Use 'description' or 'summary'",
                other
            )),
        }
    }
}

/// Normalized custom element, built from a manifest declaration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub name: String,
    pub tag_name: Option<String>,
    pub custom_element: bool,
    pub description: Option<String>,
    pub summary: Option<String>,
    pub deprecated: Option<Deprecation>,
    pub attributes: Option<Vec<Attribute>>,
    /// Public `field` members
    pub properties: Option<Vec<ClassMember>>,
    /// Public `method` members
    pub methods: Option<Vec<ClassMember>>,
    pub events: Option<Vec<Event>>,
    pub slots: Option<Vec<Slot>>,
    pub css_properties: Option<Vec<CssProperty>>,
    pub css_parts: Option<Vec<CssPart>>,
}

impl Component {
    /// The tag name, when present and non-empty
    pub fn tag(&self) -> Option<&str> {
        self.tag_name.as_deref().filter(|tag| !tag.is_empty())
    }

    pub fn has_tag_name(&self) -> bool {
        self.tag().is_some()
    }

    /// Name of the generated properties type, e.g. `ButtonProps`
    pub fn props_type_name(&self) -> String {
        format!("{}Props", self.name)
    }
}
