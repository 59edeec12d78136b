use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::trace;

use super::{Element, ElementTree, Node};
use crate::error::{NfoError, Result};

/// Parse raw bytes into an element tree
///
/// Only well-formedness is checked: matching end tags, a single root element,
/// no stray text outside of it, valid entities. Whitespace-only text between
/// child elements is dropped, inside a leaf element it is kept. On error no
/// tree is returned at all.
pub fn parse(bytes: &[u8]) -> Result<ElementTree> {
    let mut reader = Reader::from_reader(bytes);
    let mut buf = Vec::new();

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event_into(&mut buf).map_err(|e| {
            NfoError::MalformedXml(format!("{} (at byte {})", e, reader.buffer_position()))
        })?;

        match event {
            Event::Start(e) => {
                stack.push(start_element(&e)?);
            }
            Event::Empty(e) => {
                let element = start_element(&e)?;
                attach(element, &mut stack, &mut root)?;
            }
            Event::End(_) => {
                let mut element = stack
                    .pop()
                    .ok_or_else(|| NfoError::MalformedXml("unexpected closing tag".to_string()))?;
                drop_blank_text(&mut element);
                attach(element, &mut stack, &mut root)?;
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| NfoError::MalformedXml(format!("invalid text content: {}", err)))?;
                push_text(&text, &mut stack)?;
            }
            Event::CData(e) => {
                let text = std::str::from_utf8(&e)
                    .map_err(|err| NfoError::MalformedXml(format!("invalid CDATA section: {}", err)))?;
                match stack.last_mut() {
                    Some(parent) => parent.push_text(text),
                    None => {
                        return Err(NfoError::MalformedXml(
                            "CDATA section outside of the root element".to_string(),
                        ))
                    }
                }
            }
            Event::Eof => break,
            // Declaration, comments, processing instructions, doctype
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(NfoError::MalformedXml(format!(
            "unexpected end of document, <{}> is not closed",
            open.name
        )));
    }

    let root = root.ok_or_else(|| NfoError::MalformedXml("document has no root element".to_string()))?;
    trace!(root = %root.name, "Parsed XML document");
    Ok(ElementTree::new(root))
}

fn start_element(start: &BytesStart<'_>) -> Result<Element> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| NfoError::MalformedXml(format!("invalid element name: {}", e)))?
        .to_string();

    let mut element = Element::new(name);
    for attr in start.attributes() {
        let attr = attr.map_err(|e| NfoError::MalformedXml(format!("invalid attribute in <{}>: {}", element.name, e)))?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| NfoError::MalformedXml(format!("invalid attribute name: {}", e)))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| NfoError::MalformedXml(format!("invalid attribute value for {}: {}", key, e)))?
            .into_owned();
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn attach(element: Element, stack: &mut [Element], root: &mut Option<Element>) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.push_child(element);
        return Ok(());
    }
    if root.is_some() {
        return Err(NfoError::MalformedXml(format!(
            "multiple root elements, found <{}> after the root",
            element.name
        )));
    }
    *root = Some(element);
    Ok(())
}

fn push_text(text: &str, stack: &mut [Element]) -> Result<()> {
    let blank = text.trim().is_empty();
    match stack.last_mut() {
        Some(parent) => {
            parent.push_text(text);
            Ok(())
        }
        None if blank => Ok(()),
        None => Err(NfoError::MalformedXml(
            "text content outside of the root element".to_string(),
        )),
    }
}

/// Indentation between child elements is not content
fn drop_blank_text(element: &mut Element) {
    if element.has_child_elements() {
        element
            .children
            .retain(|node| !matches!(node, Node::Text(text) if text.trim().is_empty()));
    }
}
