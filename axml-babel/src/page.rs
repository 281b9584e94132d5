//! Page assembly
//!
//! Wraps a converted layout in the `ContentPage` root that Xamarin.Forms expects, with the
//! framework namespaces and the code-behind class name. The optional design-time data context
//! uses placeholder view model names; they have to be completed by hand in the generated file.

use crate::convert::Conversion;
use crate::options::ConvertOptions;
use crate::tree::{Attribute, MarkupTree, NodeId};

pub const PAGE_ELEMENT: &str = "ContentPage";
pub const FORMS_NAMESPACE: &str = "http://xamarin.com/schemas/2014/forms";
pub const XAML_NAMESPACE: &str = "http://schemas.microsoft.com/winfx/2009/xaml";
pub const BLEND_NAMESPACE: &str = "http://schemas.microsoft.com/expression/blend/2008";
pub const MARKUP_COMPATIBILITY_NAMESPACE: &str =
    "http://schemas.openxmlformats.org/markup-compatibility/2006";

/// An assembled target document: the page element and everything below it.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub tree: MarkupTree,
    pub root: NodeId,
}

/// Fully qualified page class, `<namespace>.<name>`. An empty namespace yields just the name.
pub fn class_name(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}.{name}")
    }
}

/// Builds the page around `conversion`. `name` is the page class name without namespace,
/// usually the output file stem.
pub fn assemble(conversion: &Conversion, name: &str, options: &ConvertOptions) -> Page {
    let mut tree = MarkupTree::new();
    let root = tree.create(PAGE_ELEMENT, None);

    let page = tree.node_mut(root);
    page.set_attribute(Attribute::new("xmlns", FORMS_NAMESPACE));
    page.set_attribute(Attribute::new("xmlns:x", XAML_NAMESPACE));
    page.set_attribute(Attribute::new(
        "x:Class",
        class_name(&options.namespace, name),
    ));

    if options.data_context {
        page.set_attribute(Attribute::new("xmlns:d", BLEND_NAMESPACE));
        page.set_attribute(Attribute::new("xmlns:mc", MARKUP_COMPATIBILITY_NAMESPACE));
        page.set_attribute(Attribute::new(
            "xmlns:vm",
            options.view_model_namespace.as_str(),
        ));
        page.set_attribute(Attribute::new(
            "d:DataContext",
            format!("{{d:DesignInstance {}}}", options.view_model),
        ));
    }

    tree.graft(&conversion.tree, conversion.root, Some(root));
    Page { tree, root }
}
