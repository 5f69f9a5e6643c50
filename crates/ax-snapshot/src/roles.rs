//! Implicit ARIA roles of common HTML elements

use std::collections::BTreeMap;

use serde_json::Value;

/// Role implied by `tag` when no explicit role is given
pub fn implicit_role(tag: &str, attributes: &BTreeMap<String, Value>) -> Option<&'static str> {
    let role = match tag.to_ascii_lowercase().as_str() {
        "a" | "area" if attributes.contains_key("href") => "link",
        "article" => "article",
        "aside" => "complementary",
        "button" => "button",
        "dialog" => "dialog",
        "footer" => "contentinfo",
        "form" => "form",
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => "heading",
        "header" => "banner",
        "hr" => "separator",
        "img" => "img",
        "input" => return input_role(attributes),
        "li" => "listitem",
        "main" => "main",
        "menu" | "ol" | "ul" => "list",
        "nav" => "navigation",
        "option" => "option",
        "progress" => "progressbar",
        "section" => "region",
        "select" => "combobox",
        "table" => "table",
        "td" => "cell",
        "textarea" => "textbox",
        "th" => "columnheader",
        "tr" => "row",
        _ => return None,
    };
    Some(role)
}

fn input_role(attributes: &BTreeMap<String, Value>) -> Option<&'static str> {
    let kind = attributes
        .get("type")
        .and_then(Value::as_str)
        .map(|t| t.trim().to_ascii_lowercase())
        .unwrap_or_else(|| "text".to_string());
    let role = match kind.as_str() {
        "button" | "image" | "reset" | "submit" => "button",
        "checkbox" => "checkbox",
        "radio" => "radio",
        "range" => "slider",
        "number" => "spinbutton",
        "search" => "searchbox",
        "email" | "tel" | "text" | "url" => "textbox",
        _ => return None,
    };
    Some(role)
}

/// Heading level implied by `h1`..`h6`
pub fn implicit_level(tag: &str) -> Option<String> {
    let tag = tag.to_ascii_lowercase();
    let digit = tag.strip_prefix('h')?;
    match digit {
        "1" | "2" | "3" | "4" | "5" | "6" => Some(digit.to_string()),
        _ => None,
    }
}
