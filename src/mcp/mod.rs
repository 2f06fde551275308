//! Model Context Protocol (MCP) integration for starred repositories.
//!
//! This module exposes the resource adapter over MCP so agent hosts can read starred
//! repositories over stdio. The surface area is resources only:
//!
//! - Static: `github://starred` (the token owner's stars).
//! - Templates: `github://starred/users/{username}/{owner}/{repo}`,
//!   `github://starred/users/{username}`, and `github://starred/{owner}/{repo}`.
//!
//! Dispatch goes through [`crate::routing::route`], so the ordering between the
//! overlapping templates is decided in one place.

mod format;
mod server;

pub use server::StarredMcpServer;
