//! MCP server entrypoint (stdio transport).
//!
//! Launches an MCP server that exposes the token owner's starred repositories, and any
//! other user's, as read-only resources over stdio.
use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::{service::ServiceExt, transport::stdio};
use starredmcp::{
    config, github::GitHubClient, logging, mcp::StarredMcpServer, resources::StarredAdapter,
};

#[tokio::main]
async fn main() -> Result<()> {
    let config = config::load().context("failed to load configuration")?;
    logging::init_tracing();

    let client = GitHubClient::new(&config).context("failed to build GitHub client")?;
    let adapter = Arc::new(StarredAdapter::new(Arc::new(client)));
    let server = StarredMcpServer::new(adapter);

    tracing::info!("Starting MCP server on stdio");
    let service = server
        .serve(stdio())
        .await
        .context("failed to start MCP server over stdio")?;

    service
        .waiting()
        .await
        .context("MCP server terminated unexpectedly")?;

    tracing::info!("MCP server shut down");
    Ok(())
}
