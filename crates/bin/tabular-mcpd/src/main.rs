//! Daemon entry point for the tabular MCP server.
//!
//! Loads configuration from CLI arguments and the environment,
//! initializes logging to stderr (stdout belongs to the stdio
//! transport), and serves the MCP protocol over the enabled transports.

mod config;

use tabular_mcp::server::{McpHttpServerConfig, serve_stdio, serve_streamable_http};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::TabularConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = TabularConfig::from_args()?;

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let http_task = if config.mcp_serve {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_sse_keep_alive(config.sse_keep_alive)
            .with_sse_retry(config.sse_retry);
        info!(addr = %config.mcp_http_addr, "serving MCP over streamable HTTP");
        Some(tokio::spawn(serve_streamable_http(http_config)))
    } else {
        None
    };

    if config.enable_stdio {
        info!("serving MCP over stdio");
        serve_stdio().await?;
    } else if let Some(task) = http_task {
        task.await??;
    }

    Ok(())
}
