//! MCP (Model Context Protocol) server implementation
//!
//! This module exposes the Harness tool catalog to MCP clients over stdio.

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;

pub use protocol::*;
pub use server::McpServer;
