//! MvvmCross binding translation
//!
//!     MvvmCross declares bindings in one `MvxBind` attribute holding `;`-separated descriptors:
//!
//!         local:MvxBind="Text Title; Visibility IsBusy, Converter=Visibility; Click SaveCommand"
//!
//!     Each descriptor is `<Property> <Path>[, <converter>[, <converter parameter>]]`. The
//!     translator turns every descriptor it understands into a Forms binding expression
//!     (`{Binding Path[, converter[, parameter]]}`) on the mapped target property. Descriptors
//!     that are malformed or bind an unknown property are skipped.

use crate::tree::Attribute;

/// Source attribute carrying the binding descriptors.
pub const BINDING_ATTRIBUTE: &str = "MvxBind";

/// `(source property or event, target attribute)` pairs.
pub const BINDING_MAP: &[(&str, &str)] = &[
    ("Text", "Text"),
    ("Visibility", "IsVisible"),
    ("ItemsSource", "ItemsSource"),
    ("SelectedItem", "SelectedItem"),
    ("Click", "Command"),
    ("Checked", "Checked"),
    ("Enabled", "IsEnabled"),
];

/// One parsed binding descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingDescriptor<'a> {
    pub key: &'a str,
    pub path: &'a str,
    pub converter: Option<&'a str>,
    pub converter_parameter: Option<&'a str>,
}

impl BindingDescriptor<'_> {
    /// Forms binding expression for this descriptor.
    pub fn expression(&self) -> String {
        let mut expression = format!("{{Binding {}", self.path);
        if let Some(converter) = self.converter {
            expression.push_str(", ");
            expression.push_str(converter);
            if let Some(parameter) = self.converter_parameter {
                expression.push_str(", ");
                expression.push_str(parameter);
            }
        }
        expression.push('}');
        expression
    }

    /// Target attribute name, if the bound property is known.
    pub fn target(&self) -> Option<&'static str> {
        BINDING_MAP
            .iter()
            .find(|(key, _)| *key == self.key)
            .map(|(_, target)| *target)
    }
}

/// Parses every well-formed descriptor in `value`, in order.
pub fn parse_descriptors(value: &str) -> Vec<BindingDescriptor<'_>> {
    value
        .split(';')
        .map(str::trim)
        .filter(|descriptor| !descriptor.is_empty())
        .filter_map(parse_descriptor)
        .collect()
}

fn parse_descriptor(descriptor: &str) -> Option<BindingDescriptor<'_>> {
    let mut parts = descriptor.split(',').map(str::trim);
    let path_part = parts.next()?;
    let converter = parts.next();
    let converter_parameter = parts.next();

    let tokens: Vec<&str> = path_part.split(' ').map(str::trim).collect();
    let [key, path] = tokens[..] else {
        tracing::trace!(descriptor, "skipping malformed binding descriptor");
        return None;
    };

    Some(BindingDescriptor {
        key,
        path,
        converter,
        converter_parameter,
    })
}

/// Translates an `MvxBind` value into target attributes, in descriptor order.
pub fn translate(value: &str) -> Vec<Attribute> {
    parse_descriptors(value)
        .iter()
        .filter_map(|descriptor| match descriptor.target() {
            Some(target) => Some(Attribute::new(target, descriptor.expression())),
            None => {
                tracing::trace!(key = descriptor.key, "skipping unknown binding property");
                None
            }
        })
        .collect()
}
