//! Shared helpers for the conversion tests.

use axml_babel::{convert_tree, reader, Conversion, ConvertOptions, MarkupTree, NodeId};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to read fixture {name}: {e}"))
}

/// Parses and converts `source` with default options.
pub fn convert(source: &str) -> Option<Conversion> {
    let document = reader::parse(source).expect("Failed to parse source");
    convert_tree(&document.tree, document.root, &ConvertOptions::default())
}

/// Finds the `index`-th node (pre-order) named `name`.
pub fn find(tree: &MarkupTree, root: NodeId, name: &str, index: usize) -> NodeId {
    tree.descendants_and_self(root)
        .into_iter()
        .filter(|id| tree.node(*id).name() == name)
        .nth(index)
        .unwrap_or_else(|| panic!("No {name} #{index} in tree"))
}

/// Attributes of a node as `(name, value)` pairs for compact assertions.
pub fn attrs(tree: &MarkupTree, id: NodeId) -> Vec<(&str, &str)> {
    tree.node(id)
        .attributes()
        .iter()
        .map(|attr| (attr.name.as_str(), attr.value.as_str()))
        .collect()
}
