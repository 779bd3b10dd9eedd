use serde::Serialize;

/// One `import type { ... } from "path";` line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportContext {
    pub specifiers: Vec<String>,
    pub path: String,
}

/// One optional key of a props type, with its doc comment text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberEntryContext {
    pub description: String,
    pub key: String,
    pub type_text: String,
}

/// A tag-bearing component as the declaration templates see it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentContext {
    pub name: String,
    pub props_type_name: String,
    /// `prefix + tagName + suffix`
    pub tag_key: String,
    /// Markdown details rendered into the mapping entry's doc comment
    pub docs: String,
    pub entries: Vec<MemberEntryContext>,
}
