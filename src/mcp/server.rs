use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::NvbClient;
use crate::types::JobSearchParams;
use crate::utils::config::Config;

/// Parameters for searching job function titles
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchFunctionTitlesParams {
    /// Search query for function titles
    pub query: String,
}

/// Parameters for searching cities by name prefix
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct SearchCityParams {
    /// City name prefix to search for
    #[serde(rename = "startsWith")]
    pub starts_with: String,
}

/// Parameters for looking up a city's geolocation
#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct GetGeoLocationParams {
    /// City name to get geolocation for
    #[serde(rename = "cityName")]
    pub city_name: String,
}

/// Parameters for searching job listings
#[derive(Debug, Default, Deserialize, Serialize, JsonSchema)]
pub struct FindJobsParams {
    /// City name
    pub city: Option<String>,
    /// Job title or function
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
    /// Latitude coordinate
    pub latitude: Option<f64>,
    /// Longitude coordinate
    pub longitude: Option<f64>,
    /// Search radius in kilometers (default: 40)
    pub distance: Option<f64>,
    /// Page number (default: 1)
    pub page: Option<i64>,
    /// Results per page (default: 10)
    pub limit: Option<i64>,
    /// Sort by: relevance, date, distance, random (default: relevance)
    pub sort: Option<String>,
}

/// MCP server exposing the Nationale Vacaturebank API as callable tools.
///
/// Each tool delegates to [`NvbClient`] and converts any client error into a
/// textual error result — a soft failure visible to the caller, never a
/// crash.
#[derive(Clone)]
pub struct NvbMcpServer {
    client: NvbClient,
    name: String,
    version: String,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl NvbMcpServer {
    pub fn new(client: NvbClient, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            client,
            name: name.into(),
            version: version.into(),
            tool_router: Self::tool_router(),
        }
    }

    fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
        match serde_json::to_string(value) {
            Ok(json) => Ok(CallToolResult::success(vec![Content::text(json)])),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "failed to serialize response: {e}"
            ))])),
        }
    }

    /// Search job function titles from the Nationale Vacaturebank API
    #[tool(description = "Search job function titles from the Nationale Vacaturebank API")]
    pub async fn search_function_titles(
        &self,
        params: Parameters<SearchFunctionTitlesParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.search_function_titles(&params.0.query).await {
            Ok(response) => Self::json_result(&response),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "search failed: {e}"
            ))])),
        }
    }

    /// Search cities in the Netherlands
    #[tool(description = "Search cities in the Netherlands")]
    pub async fn search_city(
        &self,
        params: Parameters<SearchCityParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.search_cities(&params.0.starts_with).await {
            Ok(cities) => Self::json_result(&cities),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "city search failed: {e}"
            ))])),
        }
    }

    /// Get geolocation data for a city in the Netherlands
    #[tool(description = "Get geolocation data for a city in the Netherlands")]
    pub async fn get_geolocation(
        &self,
        params: Parameters<GetGeoLocationParams>,
    ) -> Result<CallToolResult, McpError> {
        match self.client.get_geo_location(&params.0.city_name).await {
            Ok(response) => Self::json_result(&response),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "geolocation lookup failed: {e}"
            ))])),
        }
    }

    /// Search for job listings with filters
    #[tool(description = "Search for job listings with filters")]
    pub async fn find_jobs(
        &self,
        params: Parameters<FindJobsParams>,
    ) -> Result<CallToolResult, McpError> {
        let p = params.0;

        // The tool surface is tolerant: out-of-range paging is clamped into
        // legal bounds here, while direct client use keeps strict validation.
        let search = JobSearchParams {
            page: p.page.unwrap_or(1).max(1) as u32,
            limit: p.limit.unwrap_or(10).clamp(1, 100) as u32,
            sort: p.sort.unwrap_or_else(|| "relevance".to_string()),
            city: p.city.unwrap_or_default(),
            job_title: p.job_title.unwrap_or_default(),
            latitude: p.latitude.unwrap_or(0.0),
            longitude: p.longitude.unwrap_or(0.0),
            distance: p.distance.unwrap_or(40.0),
        };

        match self.client.find_jobs(&search).await {
            Ok(response) => Self::json_result(&response),
            Err(e) => Ok(CallToolResult::error(vec![Content::text(format!(
                "job search failed: {e}"
            ))])),
        }
    }
}

#[tool_handler]
impl ServerHandler for NvbMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::default(),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.name.clone().into(),
                version: self.version.clone().into(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Nationale Vacaturebank MCP server - search Dutch job listings, \
                 function titles, cities and city geolocations"
                    .into(),
            ),
        }
    }
}

/// Start the MCP server with stdio transport and block until shutdown.
pub async fn start_stdio_server(config: &Config) -> anyhow::Result<()> {
    use rmcp::{ServiceExt, transport::io::stdio};

    let client = NvbClient::new(&config.base_url, config.timeout)?;
    let server = NvbMcpServer::new(
        client,
        config.server_name.as_str(),
        config.server_version.as_str(),
    );

    info!(base_url = %config.base_url, "starting MCP server on stdio");

    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
