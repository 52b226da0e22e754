//! Declarative attribute schema for data sources

use std::collections::BTreeMap;

use serde::Serialize;

/// Value type of an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
    String,
}

/// A single schema attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    #[serde(rename = "type")]
    pub attribute_type: AttributeType,
    pub description: String,
    pub required: bool,
    pub optional: bool,
    /// Set by the data source, never supplied by the caller
    pub computed: bool,
    pub sensitive: bool,
}

impl Attribute {
    /// A string attribute only the data source populates
    pub fn computed_string(description: impl Into<String>) -> Self {
        Self {
            attribute_type: AttributeType::String,
            description: description.into(),
            required: false,
            optional: false,
            computed: true,
            sensitive: false,
        }
    }

    /// A string attribute the caller must supply
    pub fn required_string(description: impl Into<String>) -> Self {
        Self {
            attribute_type: AttributeType::String,
            description: description.into(),
            required: true,
            optional: false,
            computed: false,
            sensitive: false,
        }
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Schema of one data source
///
/// Attributes are keyed by name in a `BTreeMap` so serialized output is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Schema {
    pub description: String,
    pub attributes: BTreeMap<String, Attribute>,
}

impl Schema {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, attribute: Attribute) -> Self {
        self.attributes.insert(name.into(), attribute);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }
}
