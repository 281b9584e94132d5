//! XAML writer
//!
//! Serializes an assembled [`Page`] with quick-xml. Nodes without children are written as empty
//! elements; attribute values are escaped by the writer.

use crate::error::ConvertError;
use crate::page::Page;
use crate::tree::{MarkupTree, NodeId};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Serializes `page` to a string with an XML declaration and `indent_size` spaces per level.
pub fn to_xml_string(page: &Page, indent_size: usize) -> Result<String, ConvertError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', indent_size);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))
        .map_err(serialization_error)?;
    write_node(&mut writer, &page.tree, page.root)?;

    let mut bytes = writer.into_inner();
    bytes.push(b'\n');
    String::from_utf8(bytes).map_err(serialization_error)
}

fn write_node<W: Write>(
    writer: &mut Writer<W>,
    tree: &MarkupTree,
    id: NodeId,
) -> Result<(), ConvertError> {
    let node = tree.node(id);
    let mut start = BytesStart::new(node.name());
    for attribute in node.attributes() {
        start.push_attribute((attribute.name.as_str(), attribute.value.as_str()));
    }

    if node.children().is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(serialization_error);
    }

    writer
        .write_event(Event::Start(start))
        .map_err(serialization_error)?;
    for &child in node.children() {
        write_node(writer, tree, child)?;
    }
    writer
        .write_event(Event::End(BytesEnd::new(node.name())))
        .map_err(serialization_error)
}

fn serialization_error(err: impl std::fmt::Display) -> ConvertError {
    ConvertError::Serialization(err.to_string())
}
