//! Source document reader
//!
//! Parses layout XML with roxmltree and copies the element structure into a [`MarkupTree`].
//! Element and attribute names keep only their local part (`android:layout_width` becomes
//! `layout_width`, `local:MvxBind` becomes `MvxBind`). Text, comments and processing
//! instructions carry nothing the converter uses and are skipped.
//!
//! Design-time attributes in the `tools:` namespace only affect the Android layout preview and
//! are dropped. Should two remaining attributes share a local name, the first one is kept.

use crate::error::ConvertError;
use crate::tree::{Attribute, MarkupTree, NodeId};
use roxmltree::Node;

/// Namespace of Android design-time (`tools:`) attributes.
pub const TOOLS_NAMESPACE: &str = "http://schemas.android.com/tools";

/// A parsed source document.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceDocument {
    pub tree: MarkupTree,
    pub root: NodeId,
}

/// Parses `source` into a [`SourceDocument`].
pub fn parse(source: &str) -> Result<SourceDocument, ConvertError> {
    let doc = roxmltree::Document::parse(source)?;

    let mut tree = MarkupTree::new();
    let root = copy_element(doc.root_element(), &mut tree, None);
    Ok(SourceDocument { tree, root })
}

fn copy_element(node: Node, tree: &mut MarkupTree, parent: Option<NodeId>) -> NodeId {
    let id = tree.create(node.tag_name().name(), parent);
    for attribute in node.attributes() {
        if attribute.namespace() == Some(TOOLS_NAMESPACE) {
            continue;
        }
        let element = tree.node_mut(id);
        if element.has_attribute(attribute.name()) {
            tracing::trace!(
                element = node.tag_name().name(),
                attribute = attribute.name(),
                "skipping repeated attribute"
            );
            continue;
        }
        element.set_attribute(Attribute::new(attribute.name(), attribute.value()));
    }
    for child in node.children().filter(Node::is_element) {
        copy_element(child, tree, Some(id));
    }
    id
}
