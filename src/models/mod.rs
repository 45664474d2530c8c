//! Data models for HubSpot CRM entities.
//!
//! This module contains the data structures for CRM records (contacts and
//! companies), the v3 search API request/response envelopes, v4 association
//! pages, and v1 engagements with their per-type formatted output.

pub mod engagement;
pub mod record;

pub use engagement::{
    format_engagement, EngagementContent, EngagementEnvelope, FormattedEngagement,
    RecentEngagementsPage,
};
pub use record::{
    AssociationPage, CrmRecord, Filter, FilterGroup, PropertiesEnvelope, SearchRequest,
    SearchResponse, Sort,
};
