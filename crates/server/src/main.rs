//! seozoom-mcp server entry point.
//!
//! This is the main binary that boots the MCP server on stdio transport.
//! Logging goes to stderr to avoid interfering with the JSON-RPC protocol on stdout.

use std::sync::Arc;

use anyhow::Result;
use rmcp::service::serve_server;
use rmcp::transport::io::stdio;
use seozoom_client::SeoZoomClient;
use seozoom_core::AppConfig;
use tracing_subscriber::EnvFilter;

mod handler;
mod tools;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = AppConfig::load()?;
    let client = Arc::new(SeoZoomClient::from_app_config(&config)?);

    tracing::info!(
        default_db = %client.default_db(),
        base_url = %config.base_url,
        "Starting seozoom-mcp server on stdio transport"
    );

    let handler = handler::SeoZoomServer::new(client);
    let transport = stdio();
    let server = serve_server(handler, transport).await?;

    let reason = server.waiting().await?;
    tracing::info!(?reason, "seozoom-mcp server stopped");

    Ok(())
}
