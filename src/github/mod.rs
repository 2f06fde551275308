//! GitHub REST integration for starred repositories.

pub mod client;
/// Streaming helpers for GitHub page-numbered pagination.
pub mod pager;
pub mod types;

pub use client::{GitHubClient, StarredSource};
pub use types::{FetchError, GitHubError, StarredQuery, StarredRepository};
