//! # Nationale Vacaturebank MCP Server
//!
//! Exposes the Nationale Vacaturebank job-listing API as callable tools over
//! the Model Context Protocol (MCP): function-title suggestions, city search,
//! city geolocation lookup, and filtered job search.
//!
//! ## Overview
//!
//! The crate can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `nvb-mcp-server` binary, which
//!    serves the four tools over stdio.
//! 2. **As a library** - Use [`NvbClient`] directly against the upstream API.
//!
//! ## Quick Start (Library Usage)
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use nvb_mcp::{JobSearchParams, NvbClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NvbClient::new("https://api.nationalevacaturebank.nl", Duration::from_secs(30))?;
//!
//!     let params = JobSearchParams {
//!         city: "Amsterdam".to_string(),
//!         ..Default::default()
//!     };
//!     let jobs = client.find_jobs(&params).await?;
//!     println!("{} jobs found", jobs.total);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`client`] - HTTP client for the upstream REST API
//! - [`mcp`] - MCP server and tool dispatch
//! - [`types`] - Wire types and error handling
//! - [`utils`] - Configuration utilities

/// HTTP client for the upstream REST API.
pub mod client;
/// Model Context Protocol (MCP) server integration.
pub mod mcp;
/// Wire types, search parameters and error handling.
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use client::NvbClient;
pub use mcp::{start_stdio_server, NvbMcpServer};
pub use types::{
    Coordinates, FunctionTitlesResponse, GeoLocationResponse, Job, JobSearchParams, JobsResponse,
    NvbError, Result,
};
pub use utils::config::Config;
