//! Resource payloads and error definitions for the adapter.

use crate::github::{FetchError, StarredRepository};
use serde::Serialize;
use thiserror::Error;

/// MIME type attached to every resource and response body.
pub const APPLICATION_JSON: &str = "application/json";

/// A starred repository shaped as an MCP resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct McpResource {
    /// Address of this resource in the `github://starred` namespace.
    pub uri: String,
    /// Display name; the repository's full name.
    pub name: String,
    /// Repository description, or a generated sentence when GitHub has none.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Always [`APPLICATION_JSON`].
    pub mime_type: String,
    /// Repository fields carried by the resource.
    pub contents: RepositoryContents,
}

/// Field map embedded in [`McpResource::contents`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryContents {
    /// The repository record, flattened into the map.
    #[serde(flatten)]
    pub repository: StarredRepository,
    /// Username whose stars were queried; only set for user-scoped resources.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starred_by: Option<String>,
}

/// Errors emitted while materializing starred resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// GitHub could not supply the starred list.
    #[error(transparent)]
    Upstream(#[from] FetchError),
    /// Requested repository is not among the fetched stars.
    #[error("repository {full_name} not found in starred repos")]
    NotFound {
        /// Full name that was looked up.
        full_name: String,
    },
    /// Resource payload could not be encoded as JSON.
    #[error("failed to serialize resources to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}
