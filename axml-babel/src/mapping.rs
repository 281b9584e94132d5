//! Element and attribute mapping tables
//!
//!     Both tables are process-wide constants.
//!
//!     Element matching is by fragment: the first entry whose fragment is contained in the source
//!     element's local name wins. Names such as `MvxListView` or `HorizontalScrollView` therefore
//!     map through their widget fragment, and the order of [`ELEMENT_MAP`] decides between
//!     overlapping fragments. Keep the table a slice, never a hash map.
//!
//!     Attribute matching is by exact local name (`android:` prefixes are already gone once the
//!     reader has built the source tree).

use crate::attributes::AttributeTransform;

/// Ordered `(source fragment, target element)` pairs.
pub const ELEMENT_MAP: &[(&str, &str)] = &[
    ("ListView", "ListView"),
    ("TextView", "Label"),
    ("EditText", "Entry"),
    ("LinearLayout", "StackLayout"),
    ("RelativeLayout", "RelativeLayout"),
    ("FrameLayout", "ContentPresenter"),
    ("ImageView", "Image"),
    ("ScrollView", "ScrollView"),
    ("Button", "Button"),
    ("CheckBox", "Checkbox"),
];

/// `(source attribute, transform)` pairs.
pub const ATTRIBUTE_MAP: &[(&str, AttributeTransform)] = &[
    ("layout_width", AttributeTransform::Width),
    ("layout_height", AttributeTransform::Height),
    ("orientation", AttributeTransform::Orientation),
    ("text", AttributeTransform::Text),
    ("src", AttributeTransform::Source),
];

/// Target element for a source local name, if any fragment matches.
pub fn target_element(source_name: &str) -> Option<&'static str> {
    ELEMENT_MAP
        .iter()
        .find(|(fragment, _)| source_name.contains(fragment))
        .map(|(_, target)| *target)
}

/// Transform registered for a source attribute name.
pub fn attribute_transform(source_name: &str) -> Option<AttributeTransform> {
    ATTRIBUTE_MAP
        .iter()
        .find(|(name, _)| *name == source_name)
        .map(|(_, transform)| *transform)
}
