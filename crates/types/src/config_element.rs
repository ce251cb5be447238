//! Structured configuration nodes
//!
//! A configuration element is a named node carrying string attributes, e.g.
//! the widget factory element:
//!
//! ```json
//! { "name": "widgetFactory", "attributes": { "path": "/usr/share/livesupport/widgets/" } }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named configuration node with string attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigElement {
    /// Element name, matched against a configurable's expected element name
    pub name: String,
    /// Attribute values keyed by attribute name
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl ConfigElement {
    /// Create an element without attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Builder-style attribute setter
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Get an attribute value
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Set or replace an attribute value
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Names of attributes not contained in `known`
    pub fn unknown_attributes<'a>(&'a self, known: &'a [&str]) -> impl Iterator<Item = &'a str> + 'a {
        self.attributes
            .keys()
            .map(String::as_str)
            .filter(move |k| !known.contains(k))
    }
}
