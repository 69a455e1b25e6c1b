//! MCP server handler implementation.
//!
//! This module defines the main server handler that
//! routes tool calls to the appropriate implementations.
use std::sync::Arc;

use crate::tools::{
    domains::{
        self, DomainAiKeywordsParams, DomainKeywordsParams, DomainListLimitParams, DomainListParams,
        DomainMetricsHistoryParams, DomainPagesParams,
    },
    keywords::{self, KeywordListParams, KeywordRelatedParams, KeywordSerpHistoryParams},
    projects::{self, ProjectListParams, ProjectPages, ProjectPagesParams, ProjectParams},
    units,
    urls::{self, UrlLimitParams, UrlListParams, UrlParams},
};

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{
        tool::{ToolCallContext, ToolRouter},
        wrapper::Parameters,
    },
    model::{
        CallToolRequestParam, CallToolResult, Implementation, ListToolsResult, PaginatedRequestParam, ProtocolVersion,
        ServerCapabilities, ServerInfo,
    },
    service::{RequestContext, RoleServer},
    tool, tool_router,
};
use seozoom_client::SeoZoomClient;

/// The main MCP server handler for seozoom-mcp.
#[derive(Clone)]
pub struct SeoZoomServer {
    client: Arc<SeoZoomClient>,
    tool_router: ToolRouter<Self>,
}

/// Tool router implementation using the #[tool_router] macro.
///
/// This macro generates the routing logic that maps tool names to handler methods.
#[tool_router]
impl SeoZoomServer {
    /// Create a new server handler around a shared client.
    pub fn new(client: Arc<SeoZoomClient>) -> Self {
        Self { client, tool_router: Self::tool_router() }
    }

    #[tool(
        description = "Get metrics for one or more keywords (max 100): search volume, keyword difficulty, CPC, intent and monthly trend."
    )]
    async fn keyword_metrics(&self, params: Parameters<KeywordListParams>) -> Result<CallToolResult, McpError> {
        keywords::metrics_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the current SERP (up to 50 organic results) for one or more keywords (max 100).")]
    async fn keyword_serp(&self, params: Parameters<KeywordListParams>) -> Result<CallToolResult, McpError> {
        keywords::serp_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the historical SERP snapshot of a single keyword on a specific date (yyyy-MM-dd).")]
    async fn keyword_serp_history(
        &self, params: Parameters<KeywordSerpHistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        keywords::serp_history_impl(&self.client, params.0).await
    }

    #[tool(description = "Get keywords related to a single keyword, with search volume and SERP affinity (0-100). Default limit 50.")]
    async fn keyword_related(&self, params: Parameters<KeywordRelatedParams>) -> Result<CallToolResult, McpError> {
        keywords::related_impl(&self.client, params.0).await
    }

    #[tool(description = "Get metrics for one or more domains (max 50): estimated traffic, ranked keywords, Zoom Authority.")]
    async fn domain_metrics(&self, params: Parameters<DomainListParams>) -> Result<CallToolResult, McpError> {
        domains::metrics_impl(&self.client, params.0).await
    }

    #[tool(description = "Get historical metrics for one or more domains (max 50) on a specific date (yyyy-MM-dd).")]
    async fn domain_metrics_history(
        &self, params: Parameters<DomainMetricsHistoryParams>,
    ) -> Result<CallToolResult, McpError> {
        domains::metrics_history_impl(&self.client, params.0).await
    }

    #[tool(description = "Get Zoom Authority, Trust, Stability and Opportunity for one or more domains (max 100).")]
    async fn domain_authority(&self, params: Parameters<DomainListParams>) -> Result<CallToolResult, McpError> {
        domains::authority_impl(&self.client, params.0).await
    }

    #[tool(
        description = "Get the topical niches of one or more domains (max 10) with topical authority and keyword share. Default limit 10."
    )]
    async fn domain_niches(&self, params: Parameters<DomainListLimitParams>) -> Result<CallToolResult, McpError> {
        domains::niches_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the best pages of a domain with Page Zoom Authority and total ranked keywords.")]
    async fn domain_best_pages(&self, params: Parameters<DomainPagesParams>) -> Result<CallToolResult, McpError> {
        domains::best_pages_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the keywords for which a domain appears in Google AI Overviews.")]
    async fn domain_ai_keywords(
        &self, params: Parameters<DomainAiKeywordsParams>,
    ) -> Result<CallToolResult, McpError> {
        domains::ai_keywords_impl(&self.client, params.0).await
    }

    #[tool(
        description = "Get the ranked keywords of a domain filtered by type: best, withtraffic, up, down, stable, entered, exited, bypage, byposition, newentry."
    )]
    async fn domain_keywords(&self, params: Parameters<DomainKeywordsParams>) -> Result<CallToolResult, McpError> {
        domains::keywords_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the main organic competitors of one or more domains (max 10).")]
    async fn domain_competitors(
        &self, params: Parameters<DomainListLimitParams>,
    ) -> Result<CallToolResult, McpError> {
        domains::competitors_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the Page Zoom Authority (PZA) of a single URL.")]
    async fn url_page_authority(&self, params: Parameters<UrlParams>) -> Result<CallToolResult, McpError> {
        urls::page_authority_impl(&self.client, params.0).await
    }

    #[tool(description = "Get metrics for one or more URLs (max 30): total keywords, traffic, PZA.")]
    async fn url_metrics(&self, params: Parameters<UrlListParams>) -> Result<CallToolResult, McpError> {
        urls::metrics_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the keywords a URL ranks for, with volume, position and CPC.")]
    async fn url_keywords(&self, params: Parameters<UrlLimitParams>) -> Result<CallToolResult, McpError> {
        urls::keywords_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the intent gap of a URL: keywords with untapped ranking potential.")]
    async fn url_intent_gap(&self, params: Parameters<UrlLimitParams>) -> Result<CallToolResult, McpError> {
        urls::intent_gap_impl(&self.client, params.0).await
    }

    #[tool(description = "List all SEOZoom projects with their main metrics.")]
    async fn project_list(&self, params: Parameters<ProjectListParams>) -> Result<CallToolResult, McpError> {
        projects::list_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the full overview of a project: tracked keywords, traffic, Zoom Authority, trust.")]
    async fn project_overview(&self, params: Parameters<ProjectParams>) -> Result<CallToolResult, McpError> {
        projects::overview_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the tracked keywords of a project with volume, position and estimated traffic.")]
    async fn project_keywords(&self, params: Parameters<ProjectParams>) -> Result<CallToolResult, McpError> {
        projects::keywords_impl(&self.client, params.0).await
    }

    #[tool(description = "Get the best pages of a project with PZA and total keywords.")]
    async fn project_best_pages(&self, params: Parameters<ProjectPagesParams>) -> Result<CallToolResult, McpError> {
        projects::pages_impl(&self.client, ProjectPages::Best, params.0).await
    }

    #[tool(description = "Get the pages of a project with the most ranked keywords.")]
    async fn project_pages_with_more_keywords(
        &self, params: Parameters<ProjectPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        projects::pages_impl(&self.client, ProjectPages::MoreKeywords, params.0).await
    }

    #[tool(description = "Get the pages of a project with the highest traffic growth potential.")]
    async fn project_pages_with_potential(
        &self, params: Parameters<ProjectPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        projects::pages_impl(&self.client, ProjectPages::Potential, params.0).await
    }

    #[tool(description = "Get the growing pages of a project (positive traffic variation).")]
    async fn project_winner_pages(
        &self, params: Parameters<ProjectPagesParams>,
    ) -> Result<CallToolResult, McpError> {
        projects::pages_impl(&self.client, ProjectPages::Winners, params.0).await
    }

    #[tool(description = "Get the declining pages of a project (negative traffic variation).")]
    async fn project_loser_pages(&self, params: Parameters<ProjectPagesParams>) -> Result<CallToolResult, McpError> {
        projects::pages_impl(&self.client, ProjectPages::Losers, params.0).await
    }

    /// Reports remaining API units.
    ///
    /// Performs a billed keyword-metrics call for "test" on the default database.
    #[tool(description = "Check the remaining SEOZoom API units (costs 10 units).")]
    async fn check_units(&self) -> Result<CallToolResult, McpError> {
        units::check_units_impl(&self.client).await
    }
}

impl ServerHandler for SeoZoomServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: "seozoom".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                ..Default::default()
            },
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            instructions: Some(
                "SEOZoom SEO analytics: keyword, domain, URL and project data. \
                 Every tool accepts an optional `db` (it, es, fr, de, uk). Each call consumes API units."
                    .into(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self, _request: Option<PaginatedRequestParam>, _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, rmcp::model::ErrorData> {
        Ok(ListToolsResult { meta: None, tools: self.tool_router.list_all(), next_cursor: None })
    }

    async fn call_tool(
        &self, request: CallToolRequestParam, context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, rmcp::model::ErrorData> {
        self.tool_router
            .call(ToolCallContext::new(self, request, context))
            .await
    }
}
