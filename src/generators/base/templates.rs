use crate::generators::base::TemplateHelpers;
use std::collections::HashMap;
use tera::{Tera, Value};

/// Register the comment and quoting filters shared by declaration templates
pub fn register_common_filters(tera: &mut Tera) {
    tera.register_filter("inline_doc", inline_doc_filter);
    tera.register_filter("block_doc", block_doc_filter);
    tera.register_filter("quote", quote_filter);
}

fn string_arg<'a>(value: &'a Value, filter: &str) -> tera::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg(format!("{} filter expects a string", filter)))
}

/// `{{ text | inline_doc }}` -> `/** text */`
fn inline_doc_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = string_arg(value, "inline_doc")?;
    Ok(Value::String(TemplateHelpers::inline_doc_comment(text)))
}

/// `{{ text | block_doc(indent="  ") }}`
fn block_doc_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = string_arg(value, "block_doc")?;
    let indent = args.get("indent").and_then(Value::as_str).unwrap_or_default();
    Ok(Value::String(TemplateHelpers::block_doc_comment(text, indent)))
}

fn quote_filter(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let text = string_arg(value, "quote")?;
    Ok(Value::String(TemplateHelpers::quote(text)))
}
