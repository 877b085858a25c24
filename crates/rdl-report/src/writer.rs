//! XML serialization of report documents.

use std::fs;
use std::io::Write;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use tracing::info;

use crate::document::{Document, Element, Namespace, Node};
use crate::error::{ReportError, Result};

/// Write `document` with an XML declaration and two-space indentation.
pub fn write_document<W: Write>(document: &Document, sink: W) -> Result<()> {
    let mut xml = Writer::new_with_indent(sink, b' ', 2);
    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;
    write_element(&mut xml, &document.root, Some(document))?;
    xml.into_inner().flush()?;
    Ok(())
}

/// Serialize `document` into a string.
pub fn to_xml_string(document: &Document) -> Result<String> {
    let mut buffer = Vec::new();
    write_document(document, &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}

/// Write `document` to `path`, creating parent directories as needed.
pub fn save_document(document: &Document, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }
    let mut buffer = Vec::new();
    write_document(document, &mut buffer)?;
    fs::write(path, buffer).map_err(|e| ReportError::io(path, e))?;
    info!(path = %path.display(), "report definition written");
    Ok(())
}

/// `root` is set only for the document element, which carries the
/// namespace declarations.
fn write_element<W: Write>(
    xml: &mut Writer<W>,
    element: &Element,
    root: Option<&Document>,
) -> Result<()> {
    let name = element.qualified_name();
    let mut start = BytesStart::new(name.as_str());
    if let Some(document) = root {
        start.push_attribute(("xmlns", Namespace::Report.uri(&document.namespaces)));
        for namespace in Namespace::DECLARED {
            if let Some(prefix) = namespace.prefix() {
                let key = format!("xmlns:{prefix}");
                start.push_attribute((key.as_str(), namespace.uri(&document.namespaces)));
            }
        }
    }
    for (key, value) in &element.attributes {
        start.push_attribute((*key, value.as_str()));
    }

    if element.children.is_empty() {
        xml.write_event(Event::Empty(start))?;
        return Ok(());
    }

    xml.write_event(Event::Start(start))?;
    for child in &element.children {
        match child {
            Node::Element(child) => write_element(xml, child, None)?,
            Node::Text(text) => xml.write_event(Event::Text(BytesText::new(text)))?,
        }
    }
    xml.write_event(Event::End(BytesEnd::new(name.as_str())))?;
    Ok(())
}
