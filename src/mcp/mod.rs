//! Model Context Protocol (MCP) server integration.

pub mod server;

pub use server::{start_stdio_server, NvbMcpServer};
