//! Markup templates.
//!
//! A template is a markup fragment with exactly one root element, for example
//! `<div class="toggle">Show More</div>`. It is parsed once into an
//! [`Element`] tree and copied with [`Element::instantiate`] wherever it is
//! inserted.

use quick_xml::events::attributes::AttrError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use thiserror::Error;

use crate::element::{Content, Element};

/// Errors produced while parsing a markup template.
#[derive(Debug, Error)]
pub enum MarkupError {
    #[error("markup contains no element")]
    Empty,
    #[error("markup must have exactly one root element")]
    MultipleRoots,
    #[error("text {0:?} outside the root element")]
    StrayText(String),
    #[error("unexpected closing tag </{0}>")]
    UnexpectedClose(String),
    #[error("unclosed element <{0}>")]
    Unclosed(String),
    #[error("malformed markup: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("malformed attribute: {0}")]
    Attribute(#[from] AttrError),
}

/// Parse a markup fragment into an element tree.
///
/// Attributes follow HTML rules, so valueless attributes such as `disabled`
/// are accepted with an empty value. The `class` attribute becomes the
/// element's classes and `hidden` hides it. `id` sets the element id and is
/// also kept as an attribute, which survives [`Element::instantiate`].
///
/// Runs of whitespace in text collapse to a single space. Text that is only
/// whitespace is dropped, and text filling a whole element is trimmed.
pub fn parse_markup(markup: &str) -> Result<Element, MarkupError> {
    let mut reader = Reader::from_str(markup);

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                if stack.is_empty() && root.is_some() {
                    return Err(MarkupError::MultipleRoots);
                }
                stack.push(start_element(&start)?);
            }
            Event::Empty(start) => {
                let element = start_element(&start)?;
                attach(&mut stack, &mut root, element)?;
            }
            Event::End(end) => {
                let Some(mut element) = stack.pop() else {
                    let name = String::from_utf8_lossy(end.name().as_ref()).to_string();
                    return Err(MarkupError::UnexpectedClose(name));
                };
                if let Content::Text(text) = &mut element.content {
                    *text = text.trim().to_string();
                }
                attach(&mut stack, &mut root, element)?;
            }
            Event::Text(text) => {
                let text = text.unescape()?;
                if text.trim().is_empty() {
                    continue;
                }
                let text = collapse_whitespace(&text);
                match stack.last_mut() {
                    Some(parent) => append_text(parent, &text),
                    None => return Err(MarkupError::StrayText(text.trim().to_string())),
                }
            }
            Event::Eof => break,
            // Comments, declarations and processing instructions carry no
            // template content.
            _ => {}
        }
    }

    if let Some(open) = stack.pop() {
        return Err(MarkupError::Unclosed(open.tag));
    }

    root.ok_or(MarkupError::Empty)
}

fn start_element(start: &BytesStart<'_>) -> Result<Element, MarkupError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).to_string();
    let mut element = Element::new(name);

    for attr in start.html_attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).to_ascii_lowercase();
        let value = attr.unescape_value()?.into_owned();
        match key.as_str() {
            "class" => {
                for class in value.split_whitespace() {
                    element = element.class(class);
                }
            }
            "id" => {
                element.id = value.clone();
                element.attributes.insert(key, value);
            }
            "hidden" => element.hidden = true,
            _ => {
                element.attributes.insert(key, value);
            }
        }
    }

    Ok(element)
}

fn attach(
    stack: &mut [Element],
    root: &mut Option<Element>,
    element: Element,
) -> Result<(), MarkupError> {
    match stack.last_mut() {
        Some(parent) => {
            parent.content = match std::mem::take(&mut parent.content) {
                Content::None => Content::Children(vec![element]),
                Content::Text(text) => Content::Children(vec![Element::text(text), element]),
                Content::Children(mut children) => {
                    children.push(element);
                    Content::Children(children)
                }
            };
            Ok(())
        }
        None if root.is_some() => Err(MarkupError::MultipleRoots),
        None => {
            *root = Some(element);
            Ok(())
        }
    }
}

fn append_text(parent: &mut Element, text: &str) {
    match &mut parent.content {
        Content::None => parent.content = Content::Text(text.to_string()),
        Content::Text(existing) => existing.push_str(text),
        Content::Children(children) => children.push(Element::text(text)),
    }
}

fn collapse_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
            }
            in_space = true;
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_after_child_becomes_span_and_keeps_word_gap() {
        let el = parse_markup("<p><b>More</b> items</p>").unwrap();
        let children = el.child_elements();
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].tag, "b");
        assert_eq!(children[1].tag, "span");
        assert_eq!(el.text_content(), "More items");
    }

    #[test]
    fn whitespace_collapses() {
        let el = parse_markup("<div>\n    Show\t\tmore\n</div>").unwrap();
        assert_eq!(el.content, Content::Text("Show more".to_string()));
    }
}
