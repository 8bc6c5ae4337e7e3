//! Harness MCP Server Binary
//!
//! Runs the Harness tool catalog as an MCP server, communicating over
//! stdio for integration with Claude Code and other MCP clients.
//!
//! # Usage
//!
//! ```bash
//! # Run directly
//! HARNESS_API_KEY=pat.<account>.<id>.<secret> ./harness-mcp
//!
//! # With a default org/project scope
//! HARNESS_DEFAULT_ORG_ID=default HARNESS_DEFAULT_PROJECT_ID=myproj ./harness-mcp
//!
//! # With debug logging
//! RUST_LOG=debug ./harness-mcp
//! ```
//!
//! # Claude Code Integration
//!
//! Add to your MCP settings (e.g., `~/.claude/mcp.json`):
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "harness": {
//!       "command": "/path/to/harness-mcp",
//!       "env": {
//!         "HARNESS_API_KEY": "pat.<account>.<id>.<secret>",
//!         "HARNESS_BASE_URL": "https://app.harness.io",
//!         "HARNESS_DEFAULT_ORG_ID": "default",
//!         "HARNESS_DEFAULT_PROJECT_ID": "myproj"
//!       }
//!     }
//!   }
//! }
//! ```

use anyhow::Result;
use clap::Parser;
use harness_mcp::client::Services;
use harness_mcp::mcp::McpServer;
use harness_mcp::HarnessConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// MCP server for the Harness platform
#[derive(Parser, Debug)]
#[command(name = "harness-mcp")]
#[command(about = "MCP server exposing Harness platform operations as tools")]
#[command(version)]
struct Args {
    /// Harness API gateway base URL
    #[arg(long, env = "HARNESS_BASE_URL")]
    base_url: Option<String>,

    /// Org used when a request doesn't supply one
    #[arg(long, env = "HARNESS_DEFAULT_ORG_ID")]
    org_id: Option<String>,

    /// Project used when a request doesn't supply one
    #[arg(long, env = "HARNESS_DEFAULT_PROJECT_ID")]
    project_id: Option<String>,

    /// Path to a YAML config file (default: config.yaml in CWD)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Initialize logging (to stderr to keep stdout clean for MCP)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("harness_mcp=info".parse()?))
        .init();

    let args = Args::parse();

    // Load configuration (env > YAML > default), then apply CLI overrides
    let mut config = match HarnessConfig::from_yaml_and_env(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e);
        }
    };
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(org_id) = args.org_id {
        config.default_org_id = Some(org_id);
    }
    if let Some(project_id) = args.project_id {
        config.default_project_id = Some(project_id);
    }

    info!("Starting Harness MCP server");
    info!("Gateway: {}", config.base_url);
    info!("Account: {}", config.account_id);

    let services = Arc::new(Services::new(&config)?);

    let mut server = McpServer::new(services, Arc::new(config));

    if let Err(e) = server.run().await {
        error!("MCP server error: {}", e);
        return Err(e);
    }

    Ok(())
}
