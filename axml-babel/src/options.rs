//! Conversion options
//!
//! Plain values consumed by the converter. The CLI builds these from the layered configuration
//! (see the `axml-config` crate); library callers can construct them directly.

/// Knobs for a single conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Namespace of the generated page class (`x:Class="<namespace>.<name>"`).
    pub namespace: String,
    /// Replace an existing output file instead of failing.
    pub overwrite: bool,
    /// Emit design-time data context declarations on the page.
    pub data_context: bool,
    /// Extension appended to image sources, without the leading dot.
    pub image_extension: String,
    /// `xmlns:vm` placeholder used with the design-time data context.
    pub view_model_namespace: String,
    /// View model placeholder used in `{d:DesignInstance ...}`.
    pub view_model: String,
    /// Spaces per nesting level in the written document.
    pub indent_size: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            namespace: String::new(),
            overwrite: false,
            data_context: false,
            image_extension: "png".to_string(),
            view_model_namespace: "clr-namespace:vmNamespace;assembly={assembly}".to_string(),
            view_model: "vm:vmName".to_string(),
            indent_size: 4,
        }
    }
}

impl ConvertOptions {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            ..Self::default()
        }
    }

    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn with_data_context(mut self, data_context: bool) -> Self {
        self.data_context = data_context;
        self
    }

    pub fn with_image_extension(mut self, extension: impl Into<String>) -> Self {
        self.image_extension = extension.into();
        self
    }
}
