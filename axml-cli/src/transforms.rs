//! CLI-specific transforms
//!
//! The `inspect` command shows a layout at one of two stages:
//!
//! 1. **Source** - the layout as read, namespace prefixes removed
//!    - `source-json`: nested JSON of elements and attributes
//!    - `source-paths`: one `Parent / Child` path per element
//!
//! 2. **Target** - the converted Forms tree
//!    - `xaml-json`: nested JSON of the converted tree, without the page wrapper
//!    - `xaml-paths`: the node path trace printed by `convert --trace`
//!    - `xaml`: the full page as it would be written to disk
//!
//! A source whose root element has no mapping yields empty target output.
//!
//! Example: `axml2xaml inspect Main.axml xaml-paths`

use axml_babel::export::convert_source;
use axml_babel::{reader, writer, ConvertOptions};

/// All available inspect transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "source-json",
    "source-paths",
    "xaml-json",
    "xaml-paths",
    "xaml",
];

/// Transform used when none is given on the command line.
pub const DEFAULT_TRANSFORM: &str = "xaml-paths";

/// Execute a named transform on layout source text.
///
/// `class` is the page class name (without namespace) used by the `xaml` transform.
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    class: &str,
    options: &ConvertOptions,
) -> Result<String, String> {
    match transform_name {
        "source-json" => {
            let document = reader::parse(source).map_err(|e| e.to_string())?;
            to_json(&document.tree.view(document.root))
        }
        "source-paths" => {
            let document = reader::parse(source).map_err(|e| e.to_string())?;
            Ok(lines(document.tree.paths(document.root)))
        }
        "xaml-json" | "xaml-paths" | "xaml" => {
            let converted = convert_source(source, class, options).map_err(|e| e.to_string())?;
            let Some((conversion, page)) = converted else {
                return Ok(String::new());
            };
            match transform_name {
                "xaml-json" => to_json(&conversion.tree.view(conversion.root)),
                "xaml-paths" => Ok(lines(conversion.paths())),
                _ => writer::to_xml_string(&page, options.indent_size).map_err(|e| e.to_string()),
            }
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

fn to_json(value: &impl serde::Serialize) -> Result<String, String> {
    let mut json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("JSON serialization failed: {e}"))?;
    json.push('\n');
    Ok(json)
}

fn lines(paths: Vec<String>) -> String {
    paths.into_iter().map(|path| path + "\n").collect()
}
