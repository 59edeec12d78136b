use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::writer::Writer;

use super::{Element, ElementTree, Node};
use crate::error::{NfoError, Result};

/// Formatting of serialized documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Spaces per nesting level; 0 writes everything on one line
    pub indent: usize,
    /// Emit [`XML_DECLARATION`] before the root element
    pub declaration: bool,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: 3,
            declaration: true,
        }
    }
}

/// Declaration Kodi writes, single-quoted `standalone` included
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone='yes'?>"#;

/// Serialize a tree to UTF-8 bytes
///
/// Leaf elements stay on one line (`<title></title>`), elements with
/// children put every child on its own indented line. No trailing newline.
pub fn serialize(tree: &ElementTree, options: &SerializeOptions) -> Result<Vec<u8>> {
    // quick-xml always double-quotes `standalone`, so the declaration is
    // written by hand ahead of the writer
    let mut out = Vec::new();
    if options.declaration {
        out.extend_from_slice(XML_DECLARATION.as_bytes());
        if options.indent > 0 {
            out.push(b'\n');
        }
    }

    let mut writer = if options.indent > 0 {
        Writer::new_with_indent(out, b' ', options.indent)
    } else {
        Writer::new(out)
    };
    write_element(&mut writer, &tree.root)?;

    Ok(writer.into_inner())
}

fn write_element(writer: &mut Writer<Vec<u8>>, element: &Element) -> Result<()> {
    let mut start = BytesStart::new(element.name.as_str());
    for (key, value) in &element.attributes {
        start.push_attribute((key.as_str(), value.as_str()));
    }
    emit(writer, Event::Start(start))?;

    if element.has_child_elements() {
        for child in &element.children {
            match child {
                Node::Element(child) => write_element(writer, child)?,
                Node::Text(text) => emit(writer, Event::Text(BytesText::new(text)))?,
            }
        }
    } else {
        // A text event, even an empty one, keeps the closing tag on the same line
        let text = element.text();
        emit(writer, Event::Text(BytesText::new(&text)))?;
    }

    emit(writer, Event::End(BytesEnd::new(element.name.as_str())))
}

fn emit(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| NfoError::Serialize(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse;

    fn sample() -> ElementTree {
        let mut ratings = Element::new("ratings");
        let mut rating = Element::new("rating").with_attribute("name", "imdb");
        rating.push_child(Element::with_text("value", "8.1"));
        ratings.push_child(rating);

        let mut root = Element::new("movie");
        root.push_child(Element::with_text("title", "Tom & Jerry"));
        root.push_child(ratings);
        root.push_child(Element::new("plot"));
        ElementTree::new(root)
    }

    #[test]
    fn test_indented_output() {
        let bytes = serialize(&sample(), &SerializeOptions::default()).unwrap();
        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone='yes'?>
<movie>
   <title>Tom &amp; Jerry</title>
   <ratings>
      <rating name=\"imdb\">
         <value>8.1</value>
      </rating>
   </ratings>
   <plot></plot>
</movie>";
        assert_eq!(String::from_utf8(bytes).unwrap(), expected);
    }

    #[test]
    fn test_compact_output_without_declaration() {
        let options = SerializeOptions {
            indent: 0,
            declaration: false,
        };
        let bytes = serialize(&sample(), &options).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"<movie><title>Tom &amp; Jerry</title><ratings><rating name="imdb"><value>8.1</value></rating></ratings><plot></plot></movie>"#
        );
    }

    #[test]
    fn test_compact_output_with_declaration() {
        let options = SerializeOptions {
            indent: 0,
            declaration: true,
        };
        let bytes = serialize(&sample(), &options).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone='yes'?><movie>"));
    }

    #[test]
    fn test_serialized_tree_parses_back() {
        let tree = sample();
        let bytes = serialize(&tree, &SerializeOptions { indent: 2, declaration: true }).unwrap();
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed, tree);
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let root = Element::with_text("thumb", "a.jpg").with_attribute("preview", "x\"y<z");
        let bytes = serialize(&ElementTree::new(root), &SerializeOptions { indent: 0, declaration: false }).unwrap();
        let parsed = parse(&bytes).unwrap();
        assert_eq!(parsed.root.attribute("preview"), Some("x\"y<z"));
    }
}
