use async_trait::async_trait;
use hubspot_mcp_server::error::{HubSpotApiError, HubSpotApiResult};
use hubspot_mcp_server::models::EngagementEnvelope;
use hubspot_mcp_server::repositories::EngagementRepository;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock engagement repository for testing.
///
/// Seeds engagements per company and a recent-engagements listing, and
/// records the time window requested by `recent` for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockEngagementRepository {
    company_engagements: Arc<Mutex<HashMap<String, Vec<i64>>>>,
    engagements: Arc<Mutex<HashMap<i64, EngagementEnvelope>>>,
    recent_engagements: Arc<Mutex<Vec<EngagementEnvelope>>>,
    last_since: Arc<Mutex<Option<i64>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockEngagementRepository {
    /// Create a new empty MockEngagementRepository.
    pub fn new() -> Self {
        Self {
            company_engagements: Arc::new(Mutex::new(HashMap::new())),
            engagements: Arc::new(Mutex::new(HashMap::new())),
            recent_engagements: Arc::new(Mutex::new(Vec::new())),
            last_since: Arc::new(Mutex::new(None)),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Associate an engagement with a company and register its detail,
    /// keyed by the envelope's engagement id.
    pub fn add_company_engagement(&self, company_id: &str, envelope: EngagementEnvelope) {
        let id = envelope.engagement.id.unwrap_or_default();
        self.company_engagements
            .lock()
            .unwrap()
            .entry(company_id.to_string())
            .or_default()
            .push(id);
        self.engagements.lock().unwrap().insert(id, envelope);
    }

    /// Seed the recent-engagements listing, newest first.
    pub fn set_recent(&self, envelopes: Vec<EngagementEnvelope>) {
        *self.recent_engagements.lock().unwrap() = envelopes;
    }

    /// The `since_ms` window passed to the most recent `recent` call.
    pub fn last_since_ms(&self) -> Option<i64> {
        *self.last_since.lock().unwrap()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockEngagementRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EngagementRepository for MockEngagementRepository {
    async fn ids_for_company(&self, company_id: &str) -> HubSpotApiResult<Vec<i64>> {
        self.track_call("ids_for_company");

        let map = self.company_engagements.lock().unwrap();
        Ok(map.get(company_id).cloned().unwrap_or_default())
    }

    async fn get(&self, engagement_id: i64) -> HubSpotApiResult<EngagementEnvelope> {
        self.track_call("get");

        let engagements = self.engagements.lock().unwrap();
        engagements.get(&engagement_id).cloned().ok_or_else(|| {
            HubSpotApiError::NotFound(format!("Engagement {} not found", engagement_id))
        })
    }

    async fn recent(
        &self,
        since_ms: i64,
        limit: u32,
    ) -> HubSpotApiResult<Vec<EngagementEnvelope>> {
        self.track_call("recent");
        *self.last_since.lock().unwrap() = Some(since_ms);

        let envelopes = self.recent_engagements.lock().unwrap();
        Ok(envelopes.iter().take(limit as usize).cloned().collect())
    }
}
