//! Attribute transforms
//!
//! Each transform looks at the source element and one raw attribute value and produces at most
//! one target attribute. Transforms never touch the target tree; the element mapper decides
//! where their output goes.

use crate::options::ConvertOptions;
use crate::tree::{Attribute, MarkupNode};

/// Attribute transforms registered in [`crate::mapping::ATTRIBUTE_MAP`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTransform {
    /// `layout_width` → `WidthRequest` / `HorizontalOptions`
    Width,
    /// `layout_height` → `HeightRequest` / `VerticalOptions`
    Height,
    /// `orientation` → `Orientation` (LinearLayout only)
    Orientation,
    /// `text` → `Text`
    Text,
    /// `src` → `Source`
    Source,
}

impl AttributeTransform {
    /// Applies the transform to `value`, an attribute of `element`.
    pub fn apply(
        self,
        element: &MarkupNode,
        value: &str,
        options: &ConvertOptions,
    ) -> Option<Attribute> {
        match self {
            AttributeTransform::Width => size(element, value, Axis::Horizontal),
            AttributeTransform::Height => size(element, value, Axis::Vertical),
            AttributeTransform::Orientation => orientation(element, value),
            AttributeTransform::Text => Some(Attribute::new("Text", value)),
            AttributeTransform::Source => Some(image_source(value, &options.image_extension)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn options_name(self) -> &'static str {
        match self {
            Axis::Horizontal => "HorizontalOptions",
            Axis::Vertical => "VerticalOptions",
        }
    }

    fn request_name(self) -> &'static str {
        match self {
            Axis::Horizontal => "WidthRequest",
            Axis::Vertical => "HeightRequest",
        }
    }
}

fn size(element: &MarkupNode, value: &str, axis: Axis) -> Option<Attribute> {
    match value {
        "fill_parent" | "match_parent" => Some(Attribute::new(axis.options_name(), "FillAndExpand")),
        "wrap_content" => Some(Attribute::new(axis.options_name(), "Fill")),
        // Weighted children are sized by their layout; only the element's own attributes count.
        "0" | "0dp" if element.has_attribute("layout_weight") => {
            Some(Attribute::new(axis.options_name(), "FillAndExpand"))
        }
        "0" | "0dp" => Some(Attribute::new(axis.request_name(), "0")),
        _ if value.ends_with("dp") => {
            let end = value.find("dp")?;
            let request = value[..end].parse::<i32>().ok()?;
            Some(Attribute::new(axis.request_name(), request.to_string()))
        }
        _ => None,
    }
}

fn orientation(element: &MarkupNode, value: &str) -> Option<Attribute> {
    if element.name() != "LinearLayout" {
        return None;
    }
    Some(Attribute::new("Orientation", title_case(value)))
}

/// Upper-cases the first letter of every word and lower-cases the rest. Words that are entirely
/// upper-case are left alone.
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for (index, word) in value.split(' ').enumerate() {
        if index > 0 {
            result.push(' ');
        }
        let is_acronym = word.chars().any(char::is_alphabetic)
            && word
                .chars()
                .filter(|c| c.is_alphabetic())
                .all(char::is_uppercase);
        if is_acronym {
            result.push_str(word);
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            result.extend(first.to_uppercase());
            result.extend(chars.flat_map(char::to_lowercase));
        }
    }
    result
}

fn image_source(value: &str, extension: &str) -> Attribute {
    let file = value.rsplit('/').next().unwrap_or(value);
    Attribute::new("Source", format!("{file}.{extension}"))
}
