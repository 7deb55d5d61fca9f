//! Resource policy construction

use crate::types::{Policy, PolicyStatement};

/// IAM policy language version
pub const POLICY_VERSION: &str = "2012-10-17";

/// Build the `x-amazon-apigateway-policy` block: a single Deny statement for
/// principal `*` on `execute-api:Invoke`, scoped to the ARN built from the
/// given region and account.
///
/// Region and account are not validated; empty strings produce a malformed
/// ARN. Supplying well-formed values is the caller's responsibility.
pub fn build_policy(region: &str, account: &str) -> Policy {
    let resource = format!("arn:aws:execute-api:{}:{}:*/*/*/*", region, account);

    Policy {
        version: POLICY_VERSION.to_string(),
        statement: vec![PolicyStatement {
            effect: "Deny".to_string(),
            principal: "*".to_string(),
            action: "execute-api:Invoke".to_string(),
            resource,
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_shape() {
        let policy = build_policy("us-east-1", "123456789012");

        assert_eq!(policy.version, "2012-10-17");
        assert_eq!(policy.statement.len(), 1);

        let statement = &policy.statement[0];
        assert_eq!(statement.effect, "Deny");
        assert_eq!(statement.principal, "*");
        assert_eq!(statement.action, "execute-api:Invoke");
        assert_eq!(
            statement.resource,
            "arn:aws:execute-api:us-east-1:123456789012:*/*/*/*"
        );
    }

    #[test]
    fn test_empty_inputs_are_not_rejected() {
        let policy = build_policy("", "");
        assert_eq!(policy.statement[0].resource, "arn:aws:execute-api:::*/*/*/*");
    }
}
