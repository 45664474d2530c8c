//! HubSpot MCP Server - A Rust implementation of the Model Context Protocol server for HubSpot CRM.
//!
//! This library provides a production-quality MCP server that enables AI assistants
//! to interact with the HubSpot CRM for contact and company management, activity
//! timelines, and recent-record discovery.
//!
//! # Architecture
//!
//! - **models**: Data structures for CRM records, search requests, and engagements
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **client**: HTTP client for the HubSpot REST API
//! - **normalize**: Datetime canonicalization for tool output
//! - **repositories**: Data access traits over contacts, companies, and engagements
//! - **tools**: MCP tool implementations
//! - **server**: MCP protocol server

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod repositories;
pub mod server;
pub mod tools;

pub use client::HubSpotClient;
pub use config::Config;
pub use error::{ConfigError, HubSpotApiError};
pub use models::{CrmRecord, FormattedEngagement, SearchRequest, SearchResponse};
pub use normalize::convert_datetime_fields;
pub use server::HubSpotMcpServer;
pub use tools::{ActivityTimelineTools, RecordDiscoveryTools, RecordMutationTools};
