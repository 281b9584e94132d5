//! Element mapping and tree walk
//!
//!     The walker visits the source tree in pre-order and asks the element mapper, per node,
//!     whether it becomes a target node. Mapped nodes are created eagerly under the current
//!     "effective parent" and become the effective parent of their own children. Unmapped nodes
//!     produce nothing, but their children are still visited and attach to the current effective
//!     parent: wrappers such as `<merge>` or `<include>` are flattened instead of dropping
//!     everything below them.
//!
//!     Source:                              Target:
//!         LinearLayout                         StackLayout
//!         ├── merge            (unmapped)      ├── Label
//!         │   ├── TextView                     └── Entry
//!         │   └── EditText
//!         └── View             (unmapped)

use crate::binding::{self, BINDING_ATTRIBUTE};
use crate::mapping;
use crate::options::ConvertOptions;
use crate::spacing::{MARGIN, PADDING};
use crate::tree::{MarkupTree, NodeId};

/// Result of converting one source tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub tree: MarkupTree,
    pub root: NodeId,
}

impl Conversion {
    /// Produced node paths in pre-order, see [`MarkupTree::path`].
    pub fn paths(&self) -> Vec<String> {
        self.tree.paths(self.root)
    }
}

/// Converts the tree under `source_root`. Returns `None` when the root itself does not map.
pub fn convert_tree(
    source: &MarkupTree,
    source_root: NodeId,
    options: &ConvertOptions,
) -> Option<Conversion> {
    let mut target = MarkupTree::new();
    let Some(root) = map_element(source, source_root, &mut target, None, options) else {
        tracing::debug!(
            element = source.node(source_root).name(),
            "root element has no mapping"
        );
        return None;
    };
    convert_children(source, source_root, &mut target, root, options);
    Some(Conversion { tree: target, root })
}

fn convert_children(
    source: &MarkupTree,
    source_parent: NodeId,
    target: &mut MarkupTree,
    effective_parent: NodeId,
    options: &ConvertOptions,
) {
    for &child in source.node(source_parent).children() {
        let next_parent = map_element(source, child, target, Some(effective_parent), options)
            .unwrap_or(effective_parent);
        convert_children(source, child, target, next_parent, options);
    }
}

/// Maps a single source element, creating its target node under `parent`.
///
/// Returns `None`, and leaves `target` untouched, when no element fragment matches.
pub fn map_element(
    source: &MarkupTree,
    id: NodeId,
    target: &mut MarkupTree,
    parent: Option<NodeId>,
    options: &ConvertOptions,
) -> Option<NodeId> {
    let element = source.node(id);
    let Some(target_name) = mapping::target_element(element.name()) else {
        tracing::trace!(element = element.name(), "dropping unmapped element");
        return None;
    };

    let created = target.create(target_name, parent);
    let node = target.node_mut(created);

    for attribute in element.attributes() {
        let Some(transform) = mapping::attribute_transform(&attribute.name) else {
            continue;
        };
        if let Some(mapped) = transform.apply(element, &attribute.value, options) {
            node.set_attribute(mapped);
        }
    }

    for rule in [PADDING, MARGIN] {
        if let Some(spacing) = rule.resolve(element, target_name) {
            node.set_attribute(spacing);
        }
    }

    if let Some(bindings) = element.attribute(BINDING_ATTRIBUTE) {
        for attribute in binding::translate(bindings) {
            node.set_attribute(attribute);
        }
    }

    Some(created)
}
