//! Resource adapter: starred repositories shaped as MCP resources.

mod adapter;
mod mappers;
pub mod types;

pub use adapter::{StarredAdapter, to_json};
pub use types::{APPLICATION_JSON, McpResource, RepositoryContents, ResourceError};
