use crate::error::HubSpotApiResult;
use crate::models::engagement::EngagementEnvelope;
use crate::models::record::{CrmRecord, SearchResponse};
use async_trait::async_trait;
use serde_json::{Map, Value};

/// Repository for contact records.
///
/// Provides abstraction over contact storage and retrieval,
/// enabling different implementations (API client, mock).
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// List the most recently modified contacts, newest first, with the
    /// fixed contact property projection.
    async fn recent(&self, limit: u32) -> HubSpotApiResult<Vec<CrmRecord>>;

    /// Exact-match search on first and last name, optionally narrowed by
    /// company. Used for duplicate detection before a create.
    async fn find_by_name(
        &self,
        firstname: &str,
        lastname: &str,
        company: Option<Value>,
    ) -> HubSpotApiResult<SearchResponse>;

    /// Retrieve a single contact by id.
    async fn get(&self, id: &str) -> HubSpotApiResult<CrmRecord>;

    /// Create a contact with the given properties.
    async fn create(&self, properties: Map<String, Value>) -> HubSpotApiResult<CrmRecord>;

    /// Patch an existing contact's properties.
    async fn update(
        &self,
        id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord>;
}

/// Repository for company records.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// List the most recently modified companies, newest first, with the
    /// fixed company property projection.
    async fn recent(&self, limit: u32) -> HubSpotApiResult<Vec<CrmRecord>>;

    /// Exact-match search on company name, used for duplicate detection.
    async fn find_by_name(&self, name: &str) -> HubSpotApiResult<SearchResponse>;

    /// Retrieve a single company by id.
    async fn get(&self, id: &str) -> HubSpotApiResult<CrmRecord>;

    /// Create a company with the given properties.
    async fn create(&self, properties: Map<String, Value>) -> HubSpotApiResult<CrmRecord>;

    /// Patch an existing company's properties.
    async fn update(
        &self,
        id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord>;
}

/// Repository for engagements (notes, emails, tasks, meetings, calls).
#[async_trait]
pub trait EngagementRepository: Send + Sync {
    /// Ids of every engagement associated with a company.
    async fn ids_for_company(&self, company_id: &str) -> HubSpotApiResult<Vec<i64>>;

    /// Retrieve one engagement's detail by id.
    async fn get(&self, engagement_id: i64) -> HubSpotApiResult<EngagementEnvelope>;

    /// Engagements modified since the given epoch-millisecond timestamp,
    /// newest first, at most `limit` of them.
    async fn recent(&self, since_ms: i64, limit: u32)
        -> HubSpotApiResult<Vec<EngagementEnvelope>>;
}
