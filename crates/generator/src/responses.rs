//! Response remapping: "default" → "500"

use std::collections::BTreeMap;
use swagger_apigw_common::ResponseDescriptor;

/// Description emitted for the remapped "500" response
pub const INTERNAL_ERROR_DESCRIPTION: &str = "Internal Server Error (No Retry)";

/// Replace an operation's "default" response with a concrete "500" entry.
///
/// The schema reference of the removed "default" entry is carried over
/// verbatim. A response set without a "default" entry is left untouched;
/// running this a second time is therefore a no-op.
pub fn remap_default_response(responses: &mut BTreeMap<String, ResponseDescriptor>) {
    if let Some(default_response) = responses.remove("default") {
        responses.insert(
            "500".to_string(),
            ResponseDescriptor {
                description: INTERNAL_ERROR_DESCRIPTION.to_string(),
                schema: default_response.schema,
            },
        );
    }
}
