//! API Gateway target document types
//!
//! The output side of the conversion: the same identity fields and response
//! descriptors as the source document, plus the `x-amazon-apigateway-*`
//! vendor extensions. Field order matches the emitted YAML layout.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use swagger_apigw_common::{Definition, ResponseDescriptor, Result};
use swagger_apigw_parser::{Info, Tag};

/// Generated API Gateway document root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiGatewayDoc {
    /// Swagger version tag, carried over from the source
    pub swagger: String,

    /// API metadata, carried over from the source
    pub info: Info,

    /// Tag declarations, carried over from the source
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Base path slot; empty unless configured by the caller
    #[serde(rename = "basePath", default)]
    pub base_path: String,

    /// Accepted request media types
    #[serde(default)]
    pub consumes: Vec<String>,

    /// Produced response media types
    #[serde(default)]
    pub produces: Vec<String>,

    /// Path template → HTTP method → converted operation
    #[serde(default)]
    pub paths: BTreeMap<String, BTreeMap<String, TargetOperation>>,

    /// Schema definitions, carried through unchanged
    #[serde(default)]
    pub definitions: BTreeMap<String, Definition>,

    /// Resource policy attached once at the top level
    #[serde(rename = "x-amazon-apigateway-policy")]
    pub policy: Policy,
}

/// One converted operation, with its vendor integration attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TargetOperation {
    /// Summary
    #[serde(default)]
    pub summary: String,

    /// Description
    #[serde(default)]
    pub description: String,

    /// Operation ID
    #[serde(rename = "operationId", default)]
    pub operation_id: String,

    /// Response code → response descriptor, after default remapping
    #[serde(default)]
    pub responses: BTreeMap<String, ResponseDescriptor>,

    /// Tags
    #[serde(default)]
    pub tags: Vec<String>,

    /// Vendor integration block
    #[serde(rename = "x-amazon-apigateway-integration")]
    pub integration: Integration,
}

/// `x-amazon-apigateway-integration` vendor extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Integration {
    /// VPC Link connection identifier
    #[serde(rename = "connectionId")]
    pub connection_id: String,

    /// HTTP method, case preserved from the source document
    #[serde(rename = "httpMethod")]
    pub http_method: String,

    /// Backend URI: host concatenated with the path template
    pub uri: String,

    /// Integration status-code mapping
    pub responses: BTreeMap<String, IntegrationResponse>,

    #[serde(rename = "passthroughBehavior")]
    pub passthrough_behavior: String,

    #[serde(rename = "connectionType")]
    pub connection_type: String,

    /// `integration.request.path.<name>` → `method.request.path.<name>`
    #[serde(rename = "requestParameters")]
    pub request_parameters: BTreeMap<String, String>,

    /// Integration type, always "http"
    #[serde(rename = "type")]
    pub integration_type: String,
}

/// One entry of the integration's status-code mapping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrationResponse {
    #[serde(rename = "statusCode")]
    pub status_code: String,
}

/// `x-amazon-apigateway-policy` resource policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    #[serde(rename = "Version")]
    pub version: String,

    #[serde(rename = "Statement")]
    pub statement: Vec<PolicyStatement>,
}

/// One statement of the resource policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyStatement {
    #[serde(rename = "Effect")]
    pub effect: String,

    #[serde(rename = "Principal")]
    pub principal: String,

    #[serde(rename = "Action")]
    pub action: String,

    #[serde(rename = "Resource")]
    pub resource: String,
}

impl ApiGatewayDoc {
    /// Serialize the document to a YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serialize the document and write it to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)?;
        Ok(())
    }
}
