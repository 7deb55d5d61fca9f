//! API Gateway document generation
//!
//! This crate transforms a parsed Swagger 2.0 document into an AWS API
//! Gateway document for a private HTTP integration behind a VPC Link:
//! - every operation gets an `x-amazon-apigateway-integration` block
//! - "default" responses are remapped to concrete "500" entries
//! - one `x-amazon-apigateway-policy` block is attached at the top level
//!
//! The conversion builds a fresh target document from the source rather than
//! mutating the source in place, so the map being read is never the map
//! being written.

mod integration;
mod path_params;
mod policy;
mod responses;
mod types;

pub use integration::synthesize_integration;
pub use path_params::extract_path_params;
pub use policy::build_policy;
pub use responses::remap_default_response;
pub use types::{
    ApiGatewayDoc, Integration, IntegrationResponse, Policy, PolicyStatement, TargetOperation,
};

use std::collections::BTreeMap;
use swagger_apigw_parser::{SourceOperation, SwaggerDoc};

/// Global conversion configuration
///
/// None of these values are validated; empty or malformed strings flow into
/// the output as-is (an empty region produces a malformed policy ARN, a host
/// without scheme produces an unusable URI).
#[derive(Debug, Clone, Default)]
pub struct ConverterConfig {
    /// AWS account id used in the policy ARN
    pub account: String,

    /// AWS region used in the policy ARN
    pub region: String,

    /// Backend host prepended to every path template
    pub host: String,

    /// VPC Link connection identifier
    pub vpc_id: String,
}

/// API Gateway document generator
///
/// Transforms a SwaggerDoc into a complete ApiGatewayDoc in a single linear
/// pass over the (path, method) pairs. Each operation's conversion depends
/// only on that operation's own data and the configuration.
pub struct ApiGatewayGenerator {
    doc: SwaggerDoc,
    config: ConverterConfig,
}

impl ApiGatewayGenerator {
    /// Create a new generator from a parsed document and configuration
    pub fn new(doc: SwaggerDoc, config: ConverterConfig) -> Self {
        Self { doc, config }
    }

    /// Convert the source document into an API Gateway document
    pub fn convert(&self) -> ApiGatewayDoc {
        let mut paths = BTreeMap::new();
        for (path, methods) in &self.doc.paths {
            let mut converted = BTreeMap::new();
            for (method, operation) in methods {
                converted.insert(method.clone(), self.convert_operation(path, method, operation));
            }
            paths.insert(path.clone(), converted);
        }

        ApiGatewayDoc {
            swagger: self.doc.swagger.clone(),
            info: self.doc.info.clone(),
            tags: self.doc.tags.clone(),
            base_path: String::new(),
            consumes: self.doc.consumes.clone(),
            produces: self.doc.produces.clone(),
            paths,
            definitions: self.doc.definitions.clone(),
            policy: policy::build_policy(&self.config.region, &self.config.account),
        }
    }

    /// Convert one operation: remap its responses and attach the integration
    fn convert_operation(
        &self,
        path: &str,
        method: &str,
        operation: &SourceOperation,
    ) -> TargetOperation {
        let mut responses = operation.responses.clone();
        responses::remap_default_response(&mut responses);

        TargetOperation {
            summary: operation.summary.clone(),
            description: operation.description.clone(),
            operation_id: operation.operation_id.clone(),
            responses,
            tags: operation.tags.clone(),
            integration: integration::synthesize_integration(
                method,
                path,
                &self.config.host,
                &self.config.vpc_id,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swagger_apigw_parser::SwaggerParser;

    fn fixture_config() -> ConverterConfig {
        ConverterConfig {
            account: "123456789012".to_string(),
            region: "us-east-1".to_string(),
            host: "https://api.internal".to_string(),
            vpc_id: "vpc-123".to_string(),
        }
    }

    #[test]
    fn test_convert_empty_document() {
        let doc = SwaggerParser::from_json(
            r#"{ "swagger": "2.0", "info": { "title": "Empty", "version": "1.0.0" }, "paths": {} }"#,
        )
        .unwrap()
        .into_doc();

        let target = ApiGatewayGenerator::new(doc, fixture_config()).convert();

        assert!(target.paths.is_empty());
        assert_eq!(target.swagger, "2.0");
        assert_eq!(target.base_path, "");
        // policy is attached even when there is nothing to convert
        assert_eq!(target.policy.statement.len(), 1);
    }

    #[test]
    fn test_operation_fields_carried_through() {
        let doc = SwaggerParser::from_json(
            r##"{
                "swagger": "2.0",
                "info": { "title": "Widgets", "version": "1.0.0" },
                "paths": {
                    "/widgets/{id}": {
                        "get": {
                            "summary": "Fetch one widget",
                            "description": "Fetch a widget by id",
                            "operationId": "getWidget",
                            "responses": { "200": { "description": "OK" } },
                            "tags": ["widgets"]
                        }
                    }
                }
            }"##,
        )
        .unwrap()
        .into_doc();

        let target = ApiGatewayGenerator::new(doc, fixture_config()).convert();
        let operation = &target.paths["/widgets/{id}"]["get"];

        assert_eq!(operation.summary, "Fetch one widget");
        assert_eq!(operation.description, "Fetch a widget by id");
        assert_eq!(operation.operation_id, "getWidget");
        assert_eq!(operation.tags, vec!["widgets"]);
        assert_eq!(operation.integration.uri, "https://api.internal/widgets/{id}");
        assert_eq!(operation.integration.http_method, "get");
        assert_eq!(operation.integration.connection_id, "vpc-123");
    }
}
