//! XML data model

use indexmap::IndexMap;

/// Version used when the input has no XML declaration
pub const DEFAULT_VERSION: &str = "1.0";

/// XML document
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Document {
    pub version: String,
    pub root: Option<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            root: None,
        }
    }
}

impl Document {
    /// Document shell with the given version and no root
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            root: None,
        }
    }
}

/// XML element
///
/// An element holds either child elements or character data in `value`,
/// never both. Attribute equality ignores insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Element>,
    pub value: String,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Add an attribute, replacing any earlier value for the same key
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// First child with the given name
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Neither children nor character data
    pub fn is_empty(&self) -> bool {
        self.children.is_empty() && self.value.is_empty()
    }
}
