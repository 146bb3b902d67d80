//! A small selector language for matching elements.
//!
//! Supported syntax is a comma-separated list of compound selectors, each made
//! of an optional tag (or `*`) followed by any number of `#id`, `.class`,
//! `[attr]`, `[attr=value]`, `:hidden` and `:visible` parts. Combinators are
//! not supported: selectors only ever test a single element.

use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

use thiserror::Error;

use crate::element::Element;

/// Errors produced while parsing a selector.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectorError {
    #[error("selector is empty")]
    Empty,
    #[error("empty selector in list at position {position}")]
    EmptyCompound { position: usize },
    #[error("unexpected character {ch:?} at position {position}")]
    UnexpectedChar { ch: char, position: usize },
    #[error("expected a name at position {position}")]
    ExpectedName { position: usize },
    #[error("unknown pseudo-class :{0}")]
    UnknownPseudo(String),
    #[error("unterminated attribute selector starting at position {position}")]
    UnterminatedAttribute { position: usize },
}

/// Visibility filter from `:hidden` / `:visible`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AttrMatch {
    Exists(String),
    Equals(String, String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Compound {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
    attributes: Vec<AttrMatch>,
    visibility: Option<Visibility>,
}

impl Compound {
    fn matches(&self, element: &Element) -> bool {
        if let Some(tag) = &self.tag {
            if !element.tag.eq_ignore_ascii_case(tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if element.id != *id {
                return false;
            }
        }
        if !self.classes.iter().all(|c| element.has_class(c)) {
            return false;
        }
        let attrs_match = self.attributes.iter().all(|attr| match attr {
            AttrMatch::Exists(name) => element.get_attr(name).is_some(),
            AttrMatch::Equals(name, value) => element.get_attr(name) == Some(value.as_str()),
        });
        if !attrs_match {
            return false;
        }
        match self.visibility {
            Some(Visibility::Hidden) => element.hidden,
            Some(Visibility::Visible) => !element.hidden,
            None => true,
        }
    }
}

/// A parsed selector list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    source: String,
    alternatives: Vec<Compound>,
}

impl Selector {
    /// Parse a selector list such as `li.item, div[data-row]`.
    pub fn parse(source: &str) -> Result<Self, SelectorError> {
        if source.trim().is_empty() {
            return Err(SelectorError::Empty);
        }

        let mut alternatives = Vec::new();
        let mut offset = 0;
        for part in source.split(',') {
            let leading = part.len() - part.trim_start().len();
            let trimmed = part.trim();
            if trimmed.is_empty() {
                return Err(SelectorError::EmptyCompound { position: offset });
            }
            alternatives.push(parse_compound(trimmed, offset + leading)?);
            offset += part.len() + 1;
        }

        Ok(Self {
            source: source.trim().to_string(),
            alternatives,
        })
    }

    /// Selector matching every element.
    pub fn any() -> Self {
        Self {
            source: "*".to_string(),
            alternatives: vec![Compound::default()],
        }
    }

    /// Selector matching elements with the given tag.
    pub fn tag(tag: impl Into<String>) -> Self {
        let tag = tag.into().to_ascii_lowercase();
        Self {
            source: tag.clone(),
            alternatives: vec![Compound {
                tag: Some(tag),
                ..Default::default()
            }],
        }
    }

    /// Narrow every alternative to the given visibility, like appending
    /// `:hidden` or `:visible` to each one.
    pub fn with_visibility(&self, visibility: Visibility) -> Self {
        let pseudo = match visibility {
            Visibility::Hidden => ":hidden",
            Visibility::Visible => ":visible",
        };
        let source = self
            .source
            .split(',')
            .map(|part| format!("{}{pseudo}", part.trim()))
            .collect::<Vec<_>>()
            .join(", ");
        let alternatives = self
            .alternatives
            .iter()
            .cloned()
            .map(|mut compound| {
                compound.visibility = Some(visibility);
                compound
            })
            .collect();
        Self {
            source,
            alternatives,
        }
    }

    /// Returns true if any alternative matches the element.
    pub fn matches(&self, element: &Element) -> bool {
        self.alternatives.iter().any(|c| c.matches(element))
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl FromStr for Selector {
    type Err = SelectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '-' || ch == '_'
}

struct Cursor<'a> {
    chars: Peekable<CharIndices<'a>>,
    base: usize,
    len: usize,
}

impl<'a> Cursor<'a> {
    fn new(input: &'a str, base: usize) -> Self {
        Self {
            chars: input.char_indices().peekable(),
            base,
            len: input.len(),
        }
    }

    fn position(&mut self) -> usize {
        self.base + self.chars.peek().map(|(i, _)| *i).unwrap_or(self.len)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn bump(&mut self) -> Option<char> {
        self.chars.next().map(|(_, c)| c)
    }

    fn name(&mut self) -> Result<String, SelectorError> {
        let position = self.position();
        let mut name = String::new();
        while let Some(ch) = self.peek() {
            if !is_name_char(ch) {
                break;
            }
            name.push(ch);
            self.bump();
        }
        if name.is_empty() {
            return Err(SelectorError::ExpectedName { position });
        }
        Ok(name)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }
}

fn parse_compound(input: &str, base: usize) -> Result<Compound, SelectorError> {
    let mut cursor = Cursor::new(input, base);
    let mut compound = Compound::default();

    match cursor.peek() {
        Some('*') => {
            cursor.bump();
        }
        Some(ch) if is_name_char(ch) => {
            compound.tag = Some(cursor.name()?.to_ascii_lowercase());
        }
        _ => {}
    }

    while let Some(ch) = cursor.peek() {
        let position = cursor.position();
        match ch {
            '#' => {
                cursor.bump();
                compound.id = Some(cursor.name()?);
            }
            '.' => {
                cursor.bump();
                compound.classes.push(cursor.name()?);
            }
            '[' => {
                cursor.bump();
                compound.attributes.push(parse_attribute(&mut cursor, position)?);
            }
            ':' => {
                cursor.bump();
                let pseudo = cursor.name()?;
                compound.visibility = Some(match pseudo.as_str() {
                    "hidden" => Visibility::Hidden,
                    "visible" => Visibility::Visible,
                    _ => return Err(SelectorError::UnknownPseudo(pseudo)),
                });
            }
            _ => return Err(SelectorError::UnexpectedChar { ch, position }),
        }
    }

    Ok(compound)
}

fn parse_attribute(cursor: &mut Cursor<'_>, start: usize) -> Result<AttrMatch, SelectorError> {
    cursor.skip_whitespace();
    let name = cursor.name()?;
    cursor.skip_whitespace();

    match cursor.bump() {
        Some(']') => Ok(AttrMatch::Exists(name)),
        Some('=') => {
            cursor.skip_whitespace();
            let value = match cursor.peek() {
                Some(quote @ ('"' | '\'')) => {
                    cursor.bump();
                    let mut value = String::new();
                    loop {
                        match cursor.bump() {
                            Some(ch) if ch == quote => break,
                            Some(ch) => value.push(ch),
                            None => {
                                return Err(SelectorError::UnterminatedAttribute {
                                    position: start,
                                })
                            }
                        }
                    }
                    value
                }
                _ => cursor.name()?,
            };
            cursor.skip_whitespace();
            match cursor.bump() {
                Some(']') => Ok(AttrMatch::Equals(name, value)),
                Some(ch) => Err(SelectorError::UnexpectedChar {
                    ch,
                    position: cursor.position().saturating_sub(ch.len_utf8()),
                }),
                None => Err(SelectorError::UnterminatedAttribute { position: start }),
            }
        }
        Some(ch) => Err(SelectorError::UnexpectedChar {
            ch,
            position: cursor.position().saturating_sub(ch.len_utf8()),
        }),
        None => Err(SelectorError::UnterminatedAttribute { position: start }),
    }
}
