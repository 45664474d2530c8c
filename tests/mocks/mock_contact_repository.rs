use async_trait::async_trait;
use hubspot_mcp_server::error::{HubSpotApiError, HubSpotApiResult};
use hubspot_mcp_server::models::{CrmRecord, SearchResponse};
use hubspot_mcp_server::repositories::ContactRepository;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Mock contact repository for testing.
///
/// Provides an in-memory implementation of ContactRepository that can be
/// configured with test data and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockContactRepository {
    records: Arc<Mutex<Vec<CrmRecord>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    last_find: Arc<Mutex<Option<(String, String, Option<Value>)>>>,
    next_id: Arc<Mutex<u64>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            last_find: Arc::new(Mutex::new(None)),
            next_id: Arc::new(Mutex::new(1001)),
        }
    }

    /// Add a contact record to the mock repository. Insertion order is
    /// preserved, so seed newest-first when testing recent listings.
    pub fn add_record(&self, record: CrmRecord) {
        self.records.lock().unwrap().push(record);
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Arguments of the most recent `find_by_name` call.
    pub fn last_find_args(&self) -> Option<(String, String, Option<Value>)> {
        self.last_find.lock().unwrap().clone()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockContactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContactRepository for MockContactRepository {
    async fn recent(&self, limit: u32) -> HubSpotApiResult<Vec<CrmRecord>> {
        self.track_call("recent");

        let records = self.records.lock().unwrap();
        Ok(records.iter().take(limit as usize).cloned().collect())
    }

    async fn find_by_name(
        &self,
        firstname: &str,
        lastname: &str,
        company: Option<Value>,
    ) -> HubSpotApiResult<SearchResponse> {
        self.track_call("find_by_name");
        *self.last_find.lock().unwrap() =
            Some((firstname.to_string(), lastname.to_string(), company.clone()));

        let records = self.records.lock().unwrap();
        let results: Vec<CrmRecord> = records
            .iter()
            .filter(|record| {
                record.properties.get("firstname") == Some(&Value::String(firstname.to_string()))
                    && record.properties.get("lastname")
                        == Some(&Value::String(lastname.to_string()))
                    && company
                        .as_ref()
                        .map(|value| record.properties.get("company") == Some(value))
                        .unwrap_or(true)
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
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Contact {} not found", id)))
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
            .ok_or_else(|| HubSpotApiError::NotFound(format!("Contact {} not found", id)))?;

        for (key, value) in properties {
            record.properties.insert(key, value);
        }
        Ok(record.clone())
    }
}
