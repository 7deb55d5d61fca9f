//! Schema shapes shared by the source and target document models
//!
//! Swagger 2.0 responses and definitions have the same shape whether they
//! are read from the input JSON or written to the output YAML, so they are
//! defined once here and reused by value on both sides.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to a named schema, e.g. `#/definitions/Error`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaRef {
    /// JSON reference path
    #[serde(rename = "$ref")]
    pub ref_path: String,
}

/// One entry in an operation's response map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseDescriptor {
    /// Human-readable response description
    #[serde(default)]
    pub description: String,

    /// Optional reference to the response body schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaRef>,
}

/// Named schema definition from the document's `definitions` map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    /// Schema type, typically "object"
    #[serde(rename = "type", default)]
    pub definition_type: String,

    /// Property name to property schema
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Property>,
}

/// Property of a schema definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Property type: string, integer, boolean, array, object
    #[serde(rename = "type", default)]
    pub property_type: String,

    /// Optional format refinement (e.g. int64, date-time)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    /// Item schema reference for array properties
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaRef>,
}
