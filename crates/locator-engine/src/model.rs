//! Locator model
//!
//! A [`SemanticLocator`] is the parsed form of locator text such as
//! `{list 'Cities'} outer {listitem checked:true}`. It is split at the
//! `outer` operator into two node sequences.

use std::fmt;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::errors::LocatorError;

/// Parsed semantic locator
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticLocator {
    /// Nodes left of `outer` (or the whole locator). Never empty.
    pub pre_outer: Vec<SemanticNode>,

    /// Nodes right of `outer`. Empty when the locator has no `outer`.
    pub post_outer: Vec<SemanticNode>,
}

impl SemanticLocator {
    /// Create a locator, rejecting an empty leading sequence
    pub fn new(
        pre_outer: Vec<SemanticNode>,
        post_outer: Vec<SemanticNode>,
    ) -> Result<Self, LocatorError> {
        if pre_outer.is_empty() {
            return Err(LocatorError::invalid(0, "locator has no nodes"));
        }
        Ok(Self {
            pre_outer,
            post_outer,
        })
    }

    /// Locator without an `outer` operator
    pub fn single(nodes: Vec<SemanticNode>) -> Result<Self, LocatorError> {
        Self::new(nodes, Vec::new())
    }

    pub fn has_outer(&self) -> bool {
        !self.post_outer.is_empty()
    }

    /// Total number of nodes across both sequences
    pub fn len(&self) -> usize {
        self.pre_outer.len() + self.post_outer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Render a sequence of already-formatted nodes, where `items[i]` stands for
    /// the i-th node of the full locator. `outer` is placed where it belongs.
    pub(crate) fn join_rendered(&self, items: &[String]) -> String {
        let mut out = String::new();
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                if self.has_outer() && index == self.pre_outer.len() {
                    out.push_str(" outer ");
                } else {
                    out.push(' ');
                }
            }
            out.push_str(item);
        }
        out
    }
}

impl fmt::Display for SemanticLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .pre_outer
            .iter()
            .chain(self.post_outer.iter())
            .map(ToString::to_string)
            .collect();
        f.write_str(&self.join_rendered(&rendered))
    }
}

/// One `{role attr:value 'name'}` node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemanticNode {
    pub role: String,
    /// List order is kept so diagnostics can report the first failing attribute
    pub attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<NameMatcher>,
}

impl SemanticNode {
    pub fn new(role: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            attributes: Vec::new(),
            name: None,
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_name(mut self, name: NameMatcher) -> Self {
        self.name = Some(name);
        self
    }
}

impl fmt::Display for SemanticNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.role)?;
        for attribute in &self.attributes {
            write!(f, " {attribute}")?;
        }
        if let Some(name) = &self.name {
            write!(f, " {name}")?;
        }
        f.write_str("}")
    }
}

/// Expected value of a resolved ARIA attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name, self.value)
    }
}

/// Accessible name predicate: exact text, or a pattern where `*` matches any run
#[derive(Debug, Clone)]
pub enum NameMatcher {
    Exact(String),
    Wildcard { source: String, regex: Regex },
}

impl NameMatcher {
    /// Build a matcher from the raw (unquoted) name in a locator
    pub fn new(raw: &str) -> Result<Self, LocatorError> {
        let source = normalize_whitespace(raw);
        if !source.contains('*') {
            return Ok(NameMatcher::Exact(source));
        }

        let body = source
            .split('*')
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join(".*");
        let regex = Regex::new(&format!("(?s)^{body}$"))
            .map_err(|err| LocatorError::internal(format!("bad name pattern: {err}")))?;
        Ok(NameMatcher::Wildcard { source, regex })
    }

    /// The name as written in the locator
    pub fn source(&self) -> &str {
        match self {
            NameMatcher::Exact(text) => text,
            NameMatcher::Wildcard { source, .. } => source,
        }
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, NameMatcher::Wildcard { .. })
    }

    /// Test a computed accessible name
    pub fn matches(&self, accessible_name: &str) -> bool {
        let name = normalize_whitespace(accessible_name);
        match self {
            NameMatcher::Exact(text) => *text == name,
            NameMatcher::Wildcard { regex, .. } => regex.is_match(&name),
        }
    }
}

impl PartialEq for NameMatcher {
    fn eq(&self, other: &Self) -> bool {
        self.is_wildcard() == other.is_wildcard() && self.source() == other.source()
    }
}

impl Serialize for NameMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.source())
    }
}

impl fmt::Display for NameMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("'")?;
        for ch in self.source().chars() {
            if ch == '\'' || ch == '\\' {
                f.write_str("\\")?;
            }
            write!(f, "{ch}")?;
        }
        f.write_str("'")
    }
}

/// Trim and collapse whitespace runs to a single space
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exact_name_normalizes_whitespace() {
        let matcher = NameMatcher::new("  Sign   in ").unwrap();
        assert!(!matcher.is_wildcard());
        assert!(matcher.matches("Sign\n in"));
        assert!(!matcher.matches("Sign in now"));
    }

    #[test]
    fn test_wildcard_name() {
        let matcher = NameMatcher::new("Send*").unwrap();
        assert!(matcher.matches("Send"));
        assert!(matcher.matches("Send message"));
        assert!(!matcher.matches("Resend"));

        let infix = NameMatcher::new("*a.b*").unwrap();
        assert!(infix.matches("xa.by"));
        assert!(!infix.matches("xaxby"));
    }

    #[test]
    fn test_display_round_trips_quotes() {
        let node = SemanticNode::new("button")
            .with_attribute("pressed", "true")
            .with_name(NameMatcher::new("Don't").unwrap());
        assert_eq!(node.to_string(), r"{button pressed:true 'Don\'t'}");
    }

    #[test]
    fn test_locator_display_places_outer() {
        let locator = SemanticLocator::new(
            vec![SemanticNode::new("list")],
            vec![SemanticNode::new("listitem"), SemanticNode::new("link")],
        )
        .unwrap();
        assert_eq!(locator.to_string(), "{list} outer {listitem} {link}");
        assert_eq!(locator.len(), 3);
    }

    #[test]
    fn test_empty_locator_rejected() {
        assert!(SemanticLocator::new(Vec::new(), vec![SemanticNode::new("list")]).is_err());
    }
}
