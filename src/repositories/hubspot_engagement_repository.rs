use crate::client::AsyncHubSpotClient;
use crate::error::HubSpotApiResult;
use crate::models::engagement::EngagementEnvelope;
use crate::repositories::traits::EngagementRepository;
use async_trait::async_trait;
use std::sync::Arc;

/// Engagement repository backed by the HubSpot v4 associations API and the
/// legacy v1 engagements API.
pub struct HubSpotEngagementRepository {
    client: Arc<dyn AsyncHubSpotClient>,
}

impl HubSpotEngagementRepository {
    /// Create a new HubSpotEngagementRepository with the given client.
    pub fn new(client: Arc<dyn AsyncHubSpotClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EngagementRepository for HubSpotEngagementRepository {
    async fn ids_for_company(&self, company_id: &str) -> HubSpotApiResult<Vec<i64>> {
        self.client.get_company_engagement_ids(company_id).await
    }

    async fn get(&self, engagement_id: i64) -> HubSpotApiResult<EngagementEnvelope> {
        self.client.get_engagement(engagement_id).await
    }

    async fn recent(
        &self,
        since_ms: i64,
        limit: u32,
    ) -> HubSpotApiResult<Vec<EngagementEnvelope>> {
        self.client.get_recent_engagements(since_ms, limit).await
    }
}
