use crate::client::{AsyncHubSpotClient, ObjectType};
use crate::error::HubSpotApiResult;
use crate::models::record::{CrmRecord, Filter, SearchRequest, SearchResponse};
use crate::repositories::traits::CompanyRepository;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Properties projected when listing recent companies.
const COMPANY_PROPERTIES: &[&str] = &[
    "name",
    "domain",
    "website",
    "phone",
    "industry",
    "hs_lastmodifieddate",
];

/// Sort key for the recent-companies listing. Companies track modification
/// time under the `hs_` prefixed property.
const COMPANY_SORT_PROPERTY: &str = "hs_lastmodifieddate";

/// Company repository backed by the HubSpot v3 objects API.
pub struct HubSpotCompanyRepository {
    client: Arc<dyn AsyncHubSpotClient>,
}

impl HubSpotCompanyRepository {
    /// Create a new HubSpotCompanyRepository with the given client.
    pub fn new(client: Arc<dyn AsyncHubSpotClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CompanyRepository for HubSpotCompanyRepository {
    async fn recent(&self, limit: u32) -> HubSpotApiResult<Vec<CrmRecord>> {
        let request = SearchRequest::recent(COMPANY_SORT_PROPERTY, COMPANY_PROPERTIES, limit);
        let response = self
            .client
            .search_objects(ObjectType::Companies, request)
            .await?;
        Ok(response.results)
    }

    async fn find_by_name(&self, name: &str) -> HubSpotApiResult<SearchResponse> {
        let filters = vec![Filter::equals("name", name)];
        self.client
            .search_objects(ObjectType::Companies, SearchRequest::exact_match(filters))
            .await
    }

    async fn get(&self, id: &str) -> HubSpotApiResult<CrmRecord> {
        self.client.get_object(ObjectType::Companies, id).await
    }

    async fn create(&self, properties: Map<String, Value>) -> HubSpotApiResult<CrmRecord> {
        self.client
            .create_object(ObjectType::Companies, properties)
            .await
    }

    async fn update(
        &self,
        id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        self.client
            .update_object(ObjectType::Companies, id, properties)
            .await
    }
}
