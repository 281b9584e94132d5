//! Android layout to Xamarin.Forms XAML conversion
//!
//!     This crate converts Android layout XML (AXML) into Xamarin.Forms XAML pages, keeping the
//!     layout intent (sizing, spacing, orientation) and rewriting MvvmCross `MvxBind` bindings
//!     into Forms `{Binding}` expressions.
//!
//!     This is a pure lib, that is, it powers axml-cli but is shell agnostic: no code here should
//!     print to stdout or read the environment. File access is confined to the export module.
//!
//!     The file structure :
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── options.rs              # ConvertOptions, plain values from config/CLI
//!     ├── tree.rs                 # Arena-backed MarkupTree shared by source and target
//!     ├── mapping.rs              # Element and attribute tables
//!     ├── attributes.rs           # Per-attribute transforms (size, orientation, text, src)
//!     ├── spacing.rs              # Padding / margin reconciliation
//!     ├── binding.rs              # MvxBind descriptor translation
//!     ├── convert.rs              # Element mapper and tree walker
//!     ├── page.rs                 # ContentPage assembly
//!     ├── reader.rs               # roxmltree → MarkupTree
//!     ├── writer.rs               # MarkupTree → XAML via quick-xml
//!     └── export.rs               # File-to-file pipeline
//!
//! Core Algorithms
//!
//!     Three pieces carry the actual decisions, everything else is plumbing:
//!     - the tree walk (./convert.rs), which maps elements by name fragment and flattens
//!       elements without a mapping so their descendants survive;
//!     - spacing reconciliation (./spacing.rs), merging shorthand and directional attributes;
//!     - binding translation (./binding.rs), building binding expressions from descriptors.
//!
//!     Conversion is best effort. Unknown elements, unknown attributes, unparseable sizes and
//!     malformed binding descriptors are dropped silently; only I/O, parse failures and a refused
//!     overwrite surface as [`ConvertError`].
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     ├── convert/<testname>.rs
//!     └── fixtures/<layout>.axml

pub mod attributes;
pub mod binding;
pub mod convert;
pub mod error;
pub mod export;
pub mod mapping;
pub mod options;
pub mod page;
pub mod reader;
pub mod spacing;
pub mod tree;
pub mod writer;

pub use convert::{convert_tree, Conversion};
pub use error::ConvertError;
pub use export::{convert_str, export, ExportOutcome};
pub use options::ConvertOptions;
pub use page::Page;
pub use tree::{Attribute, MarkupNode, MarkupTree, NodeId};
