use async_trait::async_trait;
use hubspot_mcp_server::error::{HubSpotApiError, HubSpotApiResult};
use hubspot_mcp_server::models::{CrmRecord, SearchResponse};
use hubspot_mcp_server::repositories::CompanyRepository;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock company repository for testing.
///
/// Provides an in-memory implementation of CompanyRepository that can be
/// configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockCompanyRepository {
    records: Arc<Mutex<Vec<CrmRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    next_id: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockCompanyRepository {
    /// Create a new empty MockCompanyRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            next_id: Arc::new(Mutex::new(2001)),
        }
    }

    /// Add a company record to the mock repository. Insertion order is
    /// preserved, so seed newest-first when testing recent listings.
    pub fn add_record(&self, record: CrmRecord) {
        self.records.lock().unwrap().push(record);
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

impl Default for MockCompanyRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompanyRepository for MockCompanyRepository {
    async fn recent(&self, limit: u32) -> HubSpotApiResult<Vec<CrmRecord>> {
        self.track_call("recent");

        let records = self.records.lock().unwrap();
        Ok(records.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_name(&self, name: &str) -> HubSpotApiResult<SearchResponse> {
        self.track_call("find_by_name");

        let records = self.records.lock().unwrap();
        let results: Vec<CrmRecord> = records
            .iter()
            .filter(|record| {
                record.properties.get("name") == Some(&Value::String(name.to_string()))
            })
            .cloned()
            .collect();

        Ok(SearchResponse {
            total: results.len() as u64,
            results,
        })
    }

    async fn get(&self, id: &str) -> HubSpotApiResult<CrmRecord> {
        self.track_call("get");

        let records = self.records.lock().unwrap();
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Company {} not found", id)))
    }

    async fn create(&self, properties: Map<String, Value>) -> HubSpotApiResult<CrmRecord> {
        self.track_call("create");

        let mut next_id = self.next_id.lock().unwrap();
        let record = CrmRecord {
            id: next_id.to_string(),
            properties,
            created_at: Some("2024-01-15T10:00:00.000Z".to_string()),
            updated_at: Some("2024-01-15T10:00:00.000Z".to_string()),
            archived: Some(false),
        };
        *next_id += 1;

        self.records.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn update(
        &self,
        id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        self.track_call("update");

        let mut records = self.records.lock().unwrap();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Company {} not found", id)))?;

        for (key, value) in properties {
            record.properties.insert(key, value);
        }
        Ok(record.clone())
    }
}
