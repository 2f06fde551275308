//! Formatting helpers shared by MCP resource handlers.

use crate::{
    resources::{APPLICATION_JSON, ResourceError},
    routing::RouteError,
};
use rmcp::{ErrorData as McpError, model::ResourceContents};
use serde_json::json;

/// Build JSON resource contents for MCP resource responses.
pub(crate) fn json_resource_contents(uri: &str, text: String) -> ResourceContents {
    ResourceContents::TextResourceContents {
        uri: uri.to_string(),
        mime_type: Some(APPLICATION_JSON.into()),
        text,
        meta: None,
    }
}

/// Map a URI classification failure onto an `invalid_params` response.
pub(crate) fn route_error(error: RouteError) -> McpError {
    let RouteError::Malformed(uri) = &error;
    McpError::invalid_params(error.to_string(), Some(json!({ "uri": uri })))
}

/// Map an adapter failure onto the matching MCP error code.
pub(crate) fn resource_error(uri: &str, error: ResourceError) -> McpError {
    let data = Some(json!({ "uri": uri }));
    match error {
        ResourceError::NotFound { .. } => McpError::resource_not_found(error.to_string(), data),
        ResourceError::Upstream(_) | ResourceError::Serialization(_) => {
            McpError::internal_error(error.to_string(), data)
        }
    }
}
