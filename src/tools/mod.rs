//! MCP tools for working with HubSpot CRM.
//!
//! This module provides three categories of tools:
//! - **Discovery**: List recently active companies and contacts
//! - **Activity**: Retrieve engagement timelines (company activity, recent engagements)
//! - **Mutation**: Create and update contacts and companies

pub mod activity;
pub mod discovery;
pub mod mutation;

pub use activity::ActivityTimelineTools;
pub use discovery::RecordDiscoveryTools;
pub use mutation::RecordMutationTools;
