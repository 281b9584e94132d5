//! Padding and margin reconciliation
//!
//!     Android spreads spacing over a shorthand attribute and up to four directional ones
//!     (`paddingLeft`, `layout_marginTop`, ...). Xamarin.Forms takes a single `Padding` or
//!     `Margin` value, either one number or `left,top,right,bottom`.
//!
//!     Resolution order:
//!         1. the shorthand, unit-stripped, wins outright;
//!         2. otherwise the directional attributes are composed, missing sides default to `0`;
//!         3. with neither, nothing is produced.
//!
//!     Padding is not emitted on targets that have no padding property in Forms (see
//!     [`PADDING`]). Margin applies everywhere.

use crate::tree::{Attribute, MarkupNode};

/// Source attribute names and output name for one kind of spacing.
#[derive(Debug, Clone, Copy)]
pub struct SpacingRule {
    pub shorthand: &'static str,
    pub left: &'static [&'static str],
    pub top: &'static [&'static str],
    pub right: &'static [&'static str],
    pub bottom: &'static [&'static str],
    pub output: &'static str,
    /// Target element names on which the rule is suppressed.
    pub excluded_targets: &'static [&'static str],
}

pub const PADDING: SpacingRule = SpacingRule {
    shorthand: "padding",
    left: &["paddingLeft", "paddingStart"],
    top: &["paddingTop"],
    right: &["paddingRight", "paddingEnd"],
    bottom: &["paddingBottom"],
    output: "Padding",
    excluded_targets: &["Label", "ListView", "Checkbox", "Button", "Image"],
};

pub const MARGIN: SpacingRule = SpacingRule {
    shorthand: "layout_margin",
    left: &["layout_marginLeft", "layout_marginStart"],
    top: &["layout_marginTop"],
    right: &["layout_marginRight", "layout_marginEnd"],
    bottom: &["layout_marginBottom"],
    output: "Margin",
    excluded_targets: &[],
};

/// Android dimension units removed from spacing values.
const UNIT_SUFFIXES: &[&str] = &["dip", "dp", "sp", "px", "pt", "mm", "in"];

/// Removes a trailing dimension unit from a numeric value (`8dp` → `8`). Resource references
/// and other non-numeric values are returned unchanged, so stripping is idempotent.
pub fn strip_unit(value: &str) -> &str {
    let value = value.trim();
    UNIT_SUFFIXES
        .iter()
        .filter_map(|unit| value.strip_suffix(unit))
        .find(|number| number.ends_with(|c: char| c.is_ascii_digit() || c == '.'))
        .unwrap_or(value)
}

impl SpacingRule {
    /// Computes the merged spacing attribute for a target named `target_name` from the
    /// attributes of `source`.
    pub fn resolve(&self, source: &MarkupNode, target_name: &str) -> Option<Attribute> {
        if self.excluded_targets.contains(&target_name) {
            return None;
        }

        if let Some(shorthand) = source.attribute(self.shorthand) {
            return Some(Attribute::new(self.output, strip_unit(shorthand)));
        }

        let sides =
            [self.left, self.top, self.right, self.bottom].map(|names| side(source, names));
        if sides.iter().all(Option::is_none) {
            return None;
        }

        let composed = sides
            .into_iter()
            .map(|value| value.map(strip_unit).unwrap_or("0"))
            .collect::<Vec<_>>()
            .join(",");
        Some(Attribute::new(self.output, composed))
    }
}

/// First attribute, in source order, whose name is one of `names`.
fn side<'a>(source: &'a MarkupNode, names: &[&str]) -> Option<&'a str> {
    source
        .attributes()
        .iter()
        .find(|attr| names.contains(&attr.name.as_str()))
        .map(|attr| attr.value.as_str())
}
