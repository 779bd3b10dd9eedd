/// Helpers for emitting TypeScript declaration text
pub struct TemplateHelpers;

impl TemplateHelpers {
    /// Keep text from terminating the surrounding `/** */` block
    pub fn escape_comment(text: &str) -> String {
        text.replace("*/", "*\\/")
    }

    /// Single-line JSDoc comment: `/** text */`
    pub fn inline_doc_comment(text: &str) -> String {
        let text = Self::escape_comment(text.trim());
        if text.is_empty() {
            "/** */".to_string()
        } else {
            format!("/** {} */", text)
        }
    }

    /// Multi-line JSDoc comment, every line prefixed with `indent` and ` * `
    pub fn block_doc_comment(text: &str, indent: &str) -> String {
        let mut result = format!("{}/**\n", indent);
        for line in Self::escape_comment(text).lines() {
            let line = line.trim_end();
            if line.is_empty() {
                result.push_str(&format!("{} *\n", indent));
            } else {
                result.push_str(&format!("{} * {}\n", indent, line));
            }
        }
        result.push_str(&format!("{} */", indent));
        result
    }

    /// Double-quoted TypeScript string literal, usable as a property key
    pub fn quote(s: &str) -> String {
        format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
    }

    /// Single-quoted string literal, used for indexed access like `Button['value']`
    pub fn quote_single(s: &str) -> String {
        format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'"))
    }
}
