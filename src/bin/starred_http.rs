//! HTTP entrypoint serving the starred resources as plain JSON.
//!
//! Binds to `SERVER_HOST:SERVER_PORT` unless overridden on the command line.
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use starredmcp::{api, config, github::GitHubClient, logging, resources::StarredAdapter};
use tokio::net::TcpListener;

/// Command-line overrides for the HTTP mirror.
#[derive(Parser, Debug)]
#[command(author, version, about = "Serve GitHub starred repositories over HTTP")]
struct Args {
    /// Host to bind (defaults to `SERVER_HOST`, then `localhost`).
    #[arg(long)]
    host: Option<String>,
    /// Port to bind (defaults to `SERVER_PORT`, then 8080).
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = config::load().context("failed to load configuration")?;
    logging::init_tracing();

    let client = GitHubClient::new(&config).context("failed to build GitHub client")?;
    let adapter = Arc::new(StarredAdapter::new(Arc::new(client)));
    let app = api::create_router(adapter);

    let host = args.host.unwrap_or_else(|| config.server_host.clone());
    let port = args.port.unwrap_or(config.server_port);
    let listener = TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    tracing::info!("Listening on http://{}:{}", host, port);

    axum::serve(listener, app)
        .await
        .context("HTTP server terminated unexpectedly")?;
    Ok(())
}
