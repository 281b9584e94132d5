//! Arena-backed markup tree
//!
//!     Source (AXML) and target (XAML) documents share one node shape: a local name, an ordered
//!     attribute list and ordered children. Nodes live in a [`MarkupTree`] arena and refer to each
//!     other through [`NodeId`]s, so the parent link is a plain index rather than a reference.
//!     The parent link is only used to rebuild ancestor paths for diagnostics.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// Index of a node inside its [`MarkupTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// A single name/value pair on a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A tagged node: local name, attributes in insertion order, children in document order.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupNode {
    name: String,
    attributes: Vec<Attribute>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

impl MarkupNode {
    fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
            parent,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Value of the attribute with the given local name, if present.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attribute(name).is_some()
    }

    /// Sets an attribute. An existing attribute with the same name keeps its position and
    /// only has its value replaced, so names stay unique within a node.
    pub fn set_attribute(&mut self, attribute: Attribute) {
        match self
            .attributes
            .iter_mut()
            .find(|existing| existing.name == attribute.name)
        {
            Some(existing) => existing.value = attribute.value,
            None => self.attributes.push(attribute),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }
}

/// Owner of every node of one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkupTree {
    nodes: Vec<MarkupNode>,
}

impl MarkupTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a node. With a parent, the node is appended as the parent's last child.
    pub fn create(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(MarkupNode::new(name, parent));
        if let Some(parent) = parent {
            self.nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn node(&self, id: NodeId) -> &MarkupNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut MarkupNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Deep-copies the subtree rooted at `other_root` of `other` into this tree under `parent`.
    pub fn graft(
        &mut self,
        other: &MarkupTree,
        other_root: NodeId,
        parent: Option<NodeId>,
    ) -> NodeId {
        let source = other.node(other_root);
        let copy = self.create(source.name.clone(), parent);
        self.node_mut(copy).attributes = source.attributes.clone();
        for &child in &source.children {
            self.graft(other, child, Some(copy));
        }
        copy
    }

    /// Pre-order walk starting at `root`.
    pub fn descendants_and_self(&self, root: NodeId) -> Vec<NodeId> {
        let mut ordered = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            ordered.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        ordered
    }

    /// Ancestor names joined with ` / `, followed by the node's own name.
    ///
    /// Example: a `Label` inside a `StackLayout` yields `StackLayout / Label`.
    pub fn path(&self, id: NodeId) -> String {
        let mut names = vec![self.node(id).name.as_str()];
        let mut current = self.node(id).parent;
        while let Some(parent) = current {
            names.push(self.node(parent).name.as_str());
            current = self.node(parent).parent;
        }
        names.reverse();
        names.join(" / ")
    }

    /// [`MarkupTree::path`] for every node below and including `root`, in pre-order.
    pub fn paths(&self, root: NodeId) -> Vec<String> {
        self.descendants_and_self(root)
            .into_iter()
            .map(|id| self.path(id))
            .collect()
    }

    /// Serializable nested view of the subtree rooted at `id`.
    pub fn view(&self, id: NodeId) -> NodeView<'_> {
        NodeView { tree: self, id }
    }
}

/// Borrowed view used to serialize an arena subtree as nested data.
pub struct NodeView<'a> {
    tree: &'a MarkupTree,
    id: NodeId,
}

struct AttributeList<'a>(&'a [Attribute]);

impl Serialize for AttributeList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for attribute in self.0 {
            map.serialize_entry(&attribute.name, &attribute.value)?;
        }
        map.end()
    }
}

impl Serialize for NodeView<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.tree.node(self.id);
        let children: Vec<NodeView<'_>> = node
            .children
            .iter()
            .map(|child| self.tree.view(*child))
            .collect();

        let mut state = serializer.serialize_struct("MarkupNode", 3)?;
        state.serialize_field("name", &node.name)?;
        state.serialize_field("attributes", &AttributeList(&node.attributes))?;
        state.serialize_field("children", &children)?;
        state.end()
    }
}
