use crate::client::{AsyncHubSpotClient, ObjectType};
use crate::error::HubSpotApiResult;
use crate::models::record::{CrmRecord, Filter, SearchRequest, SearchResponse};
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Properties projected when listing recent contacts.
const CONTACT_PROPERTIES: &[&str] = &[
    "firstname",
    "lastname",
    "email",
    "phone",
    "company",
    "hs_lastmodifieddate",
    "lastmodifieddate",
];

/// Sort key for the recent-contacts listing.
const CONTACT_SORT_PROPERTY: &str = "lastmodifieddate";

/// Contact repository backed by the HubSpot v3 objects API.
///
/// This repository delegates all operations to the AsyncHubSpotClient,
/// providing a clean abstraction layer between tool logic and the
/// underlying HTTP client.
pub struct HubSpotContactRepository {
    client: Arc<dyn AsyncHubSpotClient>,
}

impl HubSpotContactRepository {
    /// Create a new HubSpotContactRepository with the given client.
    pub fn new(client: Arc<dyn AsyncHubSpotClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ContactRepository for HubSpotContactRepository {
    async fn recent(&self, limit: u32) -> HubSpotApiResult<Vec<CrmRecord>> {
        let request = SearchRequest::recent(CONTACT_SORT_PROPERTY, CONTACT_PROPERTIES, limit);
        let response = self
            .client
            .search_objects(ObjectType::Contacts, request)
            .await?;
        Ok(response.results)
    }

    async fn find_by_name(
        &self,
        firstname: &str,
        lastname: &str,
        company: Option<Value>,
    ) -> HubSpotApiResult<SearchResponse> {
        let mut filters = vec![
            Filter::equals("firstname", firstname),
            Filter::equals("lastname", lastname),
        ];
        if let Some(company) = company {
            filters.push(Filter::equals("company", company));
        }

        self.client
            .search_objects(ObjectType::Contacts, SearchRequest::exact_match(filters))
            .await
    }

    async fn get(&self, id: &str) -> HubSpotApiResult<CrmRecord> {
        self.client.get_object(ObjectType::Contacts, id).await
    }

    async fn create(&self, properties: Map<String, Value>) -> HubSpotApiResult<CrmRecord> {
        self.client
            .create_object(ObjectType::Contacts, properties)
            .await
    }

    async fn update(
        &self,
        id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        self.client
            .update_object(ObjectType::Contacts, id, properties)
            .await
    }
}
