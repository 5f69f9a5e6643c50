//! Locator text parser
//!
//! ```text
//! locator   := sequence ( "outer" sequence )?
//! sequence  := node+
//! node      := "{" role ( attribute | name )* "}"
//! attribute := IDENT ":" VALUE
//! name      := '...' | "..."
//! ```

use crate::errors::LocatorError;
use crate::model::{Attribute, NameMatcher, SemanticLocator, SemanticNode};

const OUTER_KEYWORD: &str = "outer";

#[derive(Clone, Copy)]
enum AttributeKind {
    Boolean,
    Tristate,
    Current,
    Level,
}

const SUPPORTED_ATTRIBUTES: &[(&str, AttributeKind)] = &[
    ("checked", AttributeKind::Tristate),
    ("current", AttributeKind::Current),
    ("disabled", AttributeKind::Boolean),
    ("expanded", AttributeKind::Boolean),
    ("level", AttributeKind::Level),
    ("pressed", AttributeKind::Tristate),
    ("readonly", AttributeKind::Boolean),
    ("selected", AttributeKind::Boolean),
];

/// Names of the attributes a locator may constrain
pub fn supported_attributes() -> impl Iterator<Item = &'static str> {
    SUPPORTED_ATTRIBUTES.iter().map(|(name, _)| *name)
}

/// Parse locator text into a [`SemanticLocator`]
pub fn parse(input: &str) -> Result<SemanticLocator, LocatorError> {
    Parser::new(input).parse_locator()
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn parse_locator(mut self) -> Result<SemanticLocator, LocatorError> {
        let pre_outer = self.parse_sequence()?;
        self.skip_whitespace();
        if self.at_end() {
            return SemanticLocator::single(pre_outer);
        }

        let keyword_at = self.pos;
        let word = self.identifier();
        if word != OUTER_KEYWORD {
            return Err(LocatorError::invalid(
                keyword_at,
                format!("expected `{{` or `{OUTER_KEYWORD}`"),
            ));
        }

        self.skip_whitespace();
        if self.at_end() {
            return Err(LocatorError::invalid(
                self.pos,
                format!("expected a node after `{OUTER_KEYWORD}`"),
            ));
        }
        let post_outer = self.parse_sequence()?;

        self.skip_whitespace();
        if !self.at_end() {
            let message = if self.src[self.pos..].starts_with(OUTER_KEYWORD) {
                format!("`{OUTER_KEYWORD}` may appear only once")
            } else {
                "unexpected trailing input".to_string()
            };
            return Err(LocatorError::invalid(self.pos, message));
        }

        SemanticLocator::new(pre_outer, post_outer)
    }

    fn parse_sequence(&mut self) -> Result<Vec<SemanticNode>, LocatorError> {
        let mut nodes = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() != Some('{') {
                break;
            }
            nodes.push(self.parse_node()?);
        }
        if nodes.is_empty() {
            return Err(LocatorError::invalid(self.pos, "expected `{`"));
        }
        Ok(nodes)
    }

    fn parse_node(&mut self) -> Result<SemanticNode, LocatorError> {
        let open_at = self.pos;
        self.bump();
        self.skip_whitespace();

        let role_at = self.pos;
        let role = self.identifier();
        if role.is_empty() {
            return Err(LocatorError::invalid(role_at, "expected a role"));
        }
        let mut node = SemanticNode::new(role.to_ascii_lowercase());

        loop {
            self.skip_whitespace();
            match self.peek() {
                Some('}') => {
                    self.bump();
                    return Ok(node);
                }
                Some(quote @ ('\'' | '"')) => {
                    let name_at = self.pos;
                    if node.name.is_some() {
                        return Err(LocatorError::invalid(
                            name_at,
                            "a node may have only one accessible name",
                        ));
                    }
                    let raw = self.quoted(quote)?;
                    node.name = Some(NameMatcher::new(&raw)?);
                }
                Some(ch) if is_identifier_char(ch) => {
                    node.attributes.push(self.attribute()?);
                }
                Some(ch) => {
                    return Err(LocatorError::invalid(
                        self.pos,
                        format!("unexpected character `{ch}`"),
                    ));
                }
                None => {
                    return Err(LocatorError::invalid(open_at, "unterminated node"));
                }
            }
        }
    }

    fn attribute(&mut self) -> Result<Attribute, LocatorError> {
        let name_at = self.pos;
        let name = self.identifier().to_ascii_lowercase();
        self.skip_whitespace();
        if self.peek() != Some(':') {
            return Err(LocatorError::invalid(
                self.pos,
                format!("expected `:` after attribute `{name}`"),
            ));
        }
        self.bump();
        self.skip_whitespace();

        let value_at = self.pos;
        let value = self.identifier().to_ascii_lowercase();
        if value.is_empty() {
            return Err(LocatorError::invalid(
                value_at,
                format!("expected a value for attribute `{name}`"),
            ));
        }

        let kind = SUPPORTED_ATTRIBUTES
            .iter()
            .find(|(supported, _)| *supported == name)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| {
                LocatorError::invalid(name_at, format!("unsupported attribute `{name}`"))
            })?;
        if !value_is_valid(kind, &value) {
            return Err(LocatorError::invalid(
                value_at,
                format!("invalid value `{value}` for attribute `{name}`"),
            ));
        }
        Ok(Attribute::new(name, value))
    }

    fn quoted(&mut self, quote: char) -> Result<String, LocatorError> {
        let open_at = self.pos;
        self.bump();
        let mut text = String::new();
        while let Some(ch) = self.bump() {
            match ch {
                '\\' => match self.bump() {
                    Some(escaped) => text.push(escaped),
                    None => break,
                },
                c if c == quote => return Ok(text),
                c => text.push(c),
            }
        }
        Err(LocatorError::invalid(open_at, "unterminated accessible name"))
    }

    fn identifier(&mut self) -> &'a str {
        let start = self.pos;
        while matches!(self.peek(), Some(ch) if is_identifier_char(ch)) {
            self.bump();
        }
        &self.src[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(ch) if ch.is_whitespace()) {
            self.bump();
        }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }
}

fn is_identifier_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '-' || ch == '_'
}

fn value_is_valid(kind: AttributeKind, value: &str) -> bool {
    match kind {
        AttributeKind::Boolean => matches!(value, "true" | "false"),
        AttributeKind::Tristate => matches!(value, "true" | "false" | "mixed"),
        AttributeKind::Current => matches!(
            value,
            "true" | "false" | "page" | "step" | "location" | "date" | "time"
        ),
        AttributeKind::Level => value.parse::<u32>().map(|n| n > 0).unwrap_or(false),
    }
}
