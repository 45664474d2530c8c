//! HubSpot MCP Server - Main entry point
//!
//! This is the main executable for the HubSpot MCP Server, which provides a Model Context
//! Protocol (MCP) interface to the HubSpot CRM.

use anyhow::Result;
use clap::Parser;
use hubspot_mcp_server::client::{AsyncHubSpotClient, AsyncHubSpotClientImpl};
use hubspot_mcp_server::repositories::{
    CompanyRepository, ContactRepository, EngagementRepository, HubSpotCompanyRepository,
    HubSpotContactRepository, HubSpotEngagementRepository,
};
use hubspot_mcp_server::{Config, HubSpotClient, HubSpotMcpServer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the HubSpot MCP Server.
#[derive(Parser, Debug)]
#[command(name = "hubspot-mcp-server", version, about = "MCP server for HubSpot CRM")]
struct Cli {
    /// HubSpot private app access token (takes precedence over HUBSPOT_ACCESS_TOKEN)
    #[arg(long)]
    access_token: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging (stderr only to avoid polluting stdout/MCP communication)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env_with_token(cli.access_token) {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Starting HubSpot MCP Server with API URL: {}",
        config.api_base_url
    );

    // Initialize HubSpot client
    let sync_client = HubSpotClient::new(&config);
    let client = Arc::new(AsyncHubSpotClientImpl::new(sync_client)) as Arc<dyn AsyncHubSpotClient>;

    // Initialize repositories
    let contact_repo =
        Arc::new(HubSpotContactRepository::new(client.clone())) as Arc<dyn ContactRepository>;
    let company_repo =
        Arc::new(HubSpotCompanyRepository::new(client.clone())) as Arc<dyn CompanyRepository>;
    let engagement_repo = Arc::new(HubSpotEngagementRepository::new(client.clone()))
        as Arc<dyn EngagementRepository>;

    // Create the MCP server (tools are constructed internally)
    let server = HubSpotMcpServer::new(contact_repo, company_repo, engagement_repo);

    info!("HubSpot MCP Server initialized");

    // Run the server (this will block until the server exits)
    info!("Starting MCP server with stdio transport");
    hubspot_mcp_server::server::run_server(server).await?;

    info!("HubSpot MCP Server shutdown complete");
    Ok(())
}
