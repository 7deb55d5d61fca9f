//! Swagger 2.0 type definitions
//!
//! Simplified representation focusing on what the API Gateway conversion
//! needs. Responses and definitions reuse the shared schema types from
//! `swagger-apigw-common`; maps are ordered so iteration over paths and
//! methods is deterministic.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use swagger_apigw_common::{Definition, ResponseDescriptor};

/// Swagger 2.0 document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwaggerDoc {
    /// Swagger version tag (e.g. "2.0")
    pub swagger: String,

    /// API metadata
    pub info: Info,

    /// Tag declarations
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Host the API is served from
    #[serde(default)]
    pub host: String,

    /// Accepted request media types
    #[serde(default)]
    pub consumes: Vec<String>,

    /// Produced response media types
    #[serde(default)]
    pub produces: Vec<String>,

    /// Path template → HTTP method → operation
    #[serde(default)]
    pub paths: BTreeMap<String, BTreeMap<String, SourceOperation>>,

    /// Named schema definitions, carried into the output unchanged
    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,
}

/// API information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Info {
    /// API title
    pub title: String,

    /// API description
    #[serde(default)]
    pub description: String,

    /// API version
    pub version: String,
}

/// Tag declaration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    /// Tag name
    pub name: String,
}

/// One HTTP method on one path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceOperation {
    /// Summary
    #[serde(default)]
    pub summary: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Operation ID (unique identifier)
    #[serde(rename = "operationId", default)]
    pub operation_id: String,

    /// Response code (or "default") → response descriptor
    #[serde(default)]
    pub responses: BTreeMap<String, ResponseDescriptor>,

    /// Tags (for grouping)
    #[serde(default)]
    pub tags: Vec<String>,
}
