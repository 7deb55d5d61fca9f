//! Integration block synthesis for one operation

use crate::path_params::extract_path_params;
use crate::types::{Integration, IntegrationResponse};
use std::collections::BTreeMap;

/// Fixed passthrough behavior emitted for every integration
pub const PASSTHROUGH_BEHAVIOR: &str = "when_no_match";

/// Fixed connection type emitted for every integration
pub const CONNECTION_TYPE: &str = "VPC_LINK";

/// Fixed integration type emitted for every integration
pub const INTEGRATION_TYPE: &str = "http";

/// Build the `x-amazon-apigateway-integration` block for one operation.
///
/// Pure function of its inputs: the HTTP method (case preserved), the path
/// template, the backend host, and the VPC Link id. The URI is a plain
/// concatenation of host and path; slash consistency between the two is the
/// caller's responsibility. Every distinct `{name}` in the path template
/// becomes one request-parameter entry wiring the integration path to the
/// method path.
pub fn synthesize_integration(method: &str, path: &str, host: &str, vpc_id: &str) -> Integration {
    // TODO: map the operation's own declared response codes instead of
    // hardcoding 200 → 200.
    let mut responses = BTreeMap::new();
    responses.insert(
        "200".to_string(),
        IntegrationResponse {
            status_code: "200".to_string(),
        },
    );

    let mut request_parameters = BTreeMap::new();
    for name in extract_path_params(path) {
        request_parameters.insert(
            format!("integration.request.path.{}", name),
            format!("method.request.path.{}", name),
        );
    }

    Integration {
        connection_id: vpc_id.to_string(),
        http_method: method.to_string(),
        uri: format!("{}{}", host, path),
        responses,
        passthrough_behavior: PASSTHROUGH_BEHAVIOR.to_string(),
        connection_type: CONNECTION_TYPE.to_string(),
        request_parameters,
        integration_type: INTEGRATION_TYPE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_widget_get() {
        let integration = synthesize_integration(
            "GET",
            "/widgets/{id}",
            "https://api.internal",
            "vpc-123",
        );

        assert_eq!(integration.uri, "https://api.internal/widgets/{id}");
        assert_eq!(integration.http_method, "GET");
        assert_eq!(integration.connection_id, "vpc-123");
        assert_eq!(integration.request_parameters.len(), 1);
        assert_eq!(
            integration.request_parameters["integration.request.path.id"],
            "method.request.path.id"
        );
    }

    #[test]
    fn test_fixed_fields() {
        let integration = synthesize_integration("POST", "/widgets", "https://api.internal", "v");

        assert_eq!(integration.passthrough_behavior, "when_no_match");
        assert_eq!(integration.connection_type, "VPC_LINK");
        assert_eq!(integration.integration_type, "http");
        assert_eq!(integration.responses.len(), 1);
        assert_eq!(integration.responses["200"].status_code, "200");
    }

    #[test]
    fn test_no_path_parameters_yields_empty_map() {
        let integration = synthesize_integration("GET", "/widgets", "https://api.internal", "v");
        assert!(integration.request_parameters.is_empty());
    }

    #[test]
    fn test_method_case_preserved() {
        let integration = synthesize_integration("get", "/widgets", "h", "v");
        assert_eq!(integration.http_method, "get");
    }

    #[test]
    fn test_one_entry_per_distinct_parameter() {
        let integration = synthesize_integration(
            "PUT",
            "/users/{userId}/orders/{orderId}",
            "https://api.internal",
            "vpc-123",
        );

        assert_eq!(integration.request_parameters.len(), 2);
        assert_eq!(
            integration.request_parameters["integration.request.path.userId"],
            "method.request.path.userId"
        );
        assert_eq!(
            integration.request_parameters["integration.request.path.orderId"],
            "method.request.path.orderId"
        );
    }
}
