//! MCP tool handlers for the HubSpot server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router
//! pattern. Operation failures are rendered as error-flagged text results
//! carrying the failure message, so tool callers always get a readable
//! payload instead of a protocol fault.

use crate::error::HubSpotApiResult;
use crate::repositories::{CompanyRepository, ContactRepository, EngagementRepository};
use crate::tools::{ActivityTimelineTools, RecordDiscoveryTools, RecordMutationTools};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::sync::Arc;

/// The HubSpot MCP server that exposes CRM tools.
#[derive(Clone)]
pub struct HubSpotMcpServer {
    discovery_tools: Arc<RecordDiscoveryTools>,
    activity_tools: Arc<ActivityTimelineTools>,
    mutation_tools: Arc<RecordMutationTools>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for HubSpotMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "hubspot-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "MCP server for HubSpot CRM - provides contact and company creation and \
                 updates, activity history, and engagement tracking capabilities."
                    .into(),
            ),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct CreateContactParams {
    firstname: String,
    lastname: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateCompanyParams {
    name: String,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CompanyActivityParams {
    company_id: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RecentEngagementsParams {
    #[serde(default)]
    days: Option<i64>,
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct RecentRecordsParams {
    #[serde(default)]
    limit: Option<u32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateContactParams {
    contact_id: String,
    properties: Map<String, Value>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct UpdateCompanyParams {
    company_id: String,
    properties: Map<String, Value>,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

/// Render a tool outcome as MCP content. Failures become error-flagged
/// text results carrying the failure message.
fn render_result(result: HubSpotApiResult<Value>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(value) => {
            let text = serde_json::to_string_pretty(&value).map_err(to_mcp_error)?;
            Ok(CallToolResult::success(vec![Content::text(text)]))
        }
        Err(err) => {
            tracing::error!("Tool call failed: {}", err);
            Ok(CallToolResult::error(vec![Content::text(format!(
                "HubSpot API error: {}",
                err
            ))]))
        }
    }
}

// Tool router implementation
#[tool_router]
impl HubSpotMcpServer {
    /// Create a new HubSpot MCP server from repositories.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        engagement_repo: Arc<dyn EngagementRepository>,
    ) -> Self {
        let discovery_tools = Arc::new(RecordDiscoveryTools::new(
            company_repo.clone(),
            contact_repo.clone(),
        ));
        let activity_tools = Arc::new(ActivityTimelineTools::new(engagement_repo));
        let mutation_tools = Arc::new(RecordMutationTools::new(contact_repo, company_repo));

        Self {
            discovery_tools,
            activity_tools,
            mutation_tools,
            tool_router: Self::tool_router(),
        }
    }

    /// Create a new contact unless a matching one already exists.
    #[tool(
        description = "Create a new contact in HubSpot. If a contact with the same first name, last name, and company already exists, returns the existing contact instead of creating a duplicate."
    )]
    async fn hubspot_create_contact(
        &self,
        params: Parameters<CreateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self
            .mutation_tools
            .create_contact(
                &params.firstname,
                &params.lastname,
                params.email,
                params.properties,
            )
            .await;

        render_result(result)
    }

    /// Create a new company unless one with the same name already exists.
    #[tool(
        description = "Create a new company in HubSpot. If a company with the same name already exists, returns the existing company instead of creating a duplicate."
    )]
    async fn hubspot_create_company(
        &self,
        params: Parameters<CreateCompanyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self
            .mutation_tools
            .create_company(&params.name, params.properties)
            .await;

        render_result(result)
    }

    /// Get the activity history for a specific company.
    #[tool(
        description = "Get activity history for a specific company: every engagement (note, email, task, meeting, call) associated with it, formatted by type."
    )]
    async fn hubspot_get_company_activity(
        &self,
        params: Parameters<CompanyActivityParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self
            .activity_tools
            .get_company_activity(&params.company_id)
            .await;

        render_result(result)
    }

    /// Get recent engagement activity across the whole account.
    #[tool(
        description = "Get recent engagement activities across all contacts and companies. Looks back a number of days (default: 7) and returns at most a limit of engagements (default: 50)."
    )]
    async fn hubspot_get_recent_engagements(
        &self,
        params: Parameters<RecentEngagementsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self
            .activity_tools
            .get_recent_engagements(params.days, params.limit)
            .await;

        render_result(result)
    }

    /// Get the most recently active companies.
    #[tool(
        description = "Get most recently active companies from HubSpot, sorted by modification time descending (default limit: 10)."
    )]
    async fn hubspot_get_active_companies(
        &self,
        params: Parameters<RecentRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self.discovery_tools.get_active_companies(params.limit).await;

        render_result(result)
    }

    /// Get the most recently active contacts.
    #[tool(
        description = "Get most recently active contacts from HubSpot, sorted by modification time descending (default limit: 10)."
    )]
    async fn hubspot_get_active_contacts(
        &self,
        params: Parameters<RecentRecordsParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self.discovery_tools.get_active_contacts(params.limit).await;

        render_result(result)
    }

    /// Update an existing contact.
    #[tool(
        description = "Update an existing contact in HubSpot. If the contact does not exist, reports that no update was performed instead of failing."
    )]
    async fn hubspot_update_contact(
        &self,
        params: Parameters<UpdateContactParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self
            .mutation_tools
            .update_contact(&params.contact_id, params.properties)
            .await;

        render_result(result)
    }

    /// Update an existing company.
    #[tool(
        description = "Update an existing company in HubSpot. If the company does not exist, reports that no update was performed instead of failing."
    )]
    async fn hubspot_update_company(
        &self,
        params: Parameters<UpdateCompanyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let result = self
            .mutation_tools
            .update_company(&params.company_id, params.properties)
            .await;

        render_result(result)
    }
}
