//! Export pipeline
//!
//! Single-call conversion from a layout file on disk to a XAML page on disk:
//!
//!     check destination → read → parse → convert → trace → assemble → write
//!
//! The destination check happens before the source is opened, so a refused export never reads
//! anything. A source whose root element has no mapping is not an error: nothing is written and
//! [`ExportOutcome::NoOutput`] is returned.
//!
//! Use [`convert_str`] for in-memory conversion without touching the file system.

use crate::convert::{convert_tree, Conversion};
use crate::error::ConvertError;
use crate::options::ConvertOptions;
use crate::page::{self, Page};
use crate::reader;
use crate::writer;
use std::fs;
use std::path::{Path, PathBuf};

/// The result of a successful export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// The page was written to this path.
    Written(PathBuf),
    /// The source root has no mapping; no file was written.
    NoOutput,
}

/// Converts source text into a page. Returns `None` when the root element does not map.
pub fn convert_source(
    source: &str,
    class: &str,
    options: &ConvertOptions,
) -> Result<Option<(Conversion, Page)>, ConvertError> {
    let document = reader::parse(source)?;
    let Some(conversion) = convert_tree(&document.tree, document.root, options) else {
        return Ok(None);
    };
    let page = page::assemble(&conversion, class, options);
    Ok(Some((conversion, page)))
}

/// Converts source text straight to XAML text. `class` is the page class name without
/// namespace.
pub fn convert_str(
    source: &str,
    class: &str,
    options: &ConvertOptions,
) -> Result<Option<String>, ConvertError> {
    match convert_source(source, class, options)? {
        Some((_, page)) => writer::to_xml_string(&page, options.indent_size).map(Some),
        None => Ok(None),
    }
}

/// Exports the layout at `input` to a page at `output`.
///
/// Every produced node path (pre-order, see [`crate::tree::MarkupTree::path`]) is handed to
/// `trace` before the page is written.
pub fn export(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
    trace: &mut dyn FnMut(&str),
) -> Result<ExportOutcome, ConvertError> {
    if !options.overwrite && output.exists() {
        return Err(ConvertError::PreconditionFailed(output.to_path_buf()));
    }
    if !input.is_file() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    let source = fs::read_to_string(input).map_err(|source| ConvertError::Io {
        path: input.to_path_buf(),
        source,
    })?;

    let class = output
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    let Some((conversion, page)) = convert_source(&source, class, options)? else {
        tracing::info!(input = %input.display(), "root element has no mapping, nothing written");
        return Ok(ExportOutcome::NoOutput);
    };

    for path in conversion.paths() {
        tracing::debug!("{path}");
        trace(&path);
    }

    let xml = writer::to_xml_string(&page, options.indent_size)?;
    fs::write(output, xml).map_err(|source| ConvertError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        nodes = conversion.tree.len(),
        "exported page"
    );
    Ok(ExportOutcome::Written(output.to_path_buf()))
}
