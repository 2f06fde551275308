#![deny(missing_docs)]

//! Core library for the GitHub starred-repositories MCP server.

/// HTTP mirror of the starred resources.
pub mod api;
/// Environment-driven configuration management.
pub mod config;
/// GitHub REST client for starred repositories.
pub mod github;
/// Structured logging and tracing setup.
pub mod logging;
/// Model Context Protocol server implementation.
pub mod mcp;
/// Starred repositories shaped as MCP resources.
pub mod resources;
/// URI classification for the `github://starred` namespace.
pub mod routing;
