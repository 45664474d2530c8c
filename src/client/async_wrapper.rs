//! Async wrapper around the synchronous HubSpotClient.
//!
//! This module provides an async interface to the synchronous HubSpotClient
//! by using `tokio::task::spawn_blocking` to run HTTP operations on a
//! dedicated thread pool, preventing blocking of the async runtime.

use crate::client::{HubSpotClient, ObjectType};
use crate::error::{HubSpotApiError, HubSpotApiResult};
use crate::models::engagement::EngagementEnvelope;
use crate::models::record::{CrmRecord, SearchRequest, SearchResponse};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Async interface over the HubSpot client operations.
///
/// The production implementation runs the synchronous client on the
/// blocking thread pool; tests substitute their own implementations.
#[async_trait]
pub trait AsyncHubSpotClient: Send + Sync {
    async fn search_objects(
        &self,
        object_type: ObjectType,
        request: SearchRequest,
    ) -> HubSpotApiResult<SearchResponse>;

    async fn get_object(
        &self,
        object_type: ObjectType,
        object_id: &str,
    ) -> HubSpotApiResult<CrmRecord>;

    async fn create_object(
        &self,
        object_type: ObjectType,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord>;

    async fn update_object(
        &self,
        object_type: ObjectType,
        object_id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord>;

    async fn get_company_engagement_ids(&self, company_id: &str) -> HubSpotApiResult<Vec<i64>>;

    async fn get_engagement(&self, engagement_id: i64) -> HubSpotApiResult<EngagementEnvelope>;

    async fn get_recent_engagements(
        &self,
        since_ms: i64,
        limit: u32,
    ) -> HubSpotApiResult<Vec<EngagementEnvelope>>;
}

/// Async wrapper around the synchronous HubSpotClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP operations
/// on a dedicated thread pool, preventing blocking the async runtime.
#[derive(Clone)]
pub struct AsyncHubSpotClientImpl {
    client: Arc<HubSpotClient>,
}

impl AsyncHubSpotClientImpl {
    pub fn new(client: HubSpotClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncHubSpotClient for AsyncHubSpotClientImpl {
    async fn search_objects(
        &self,
        object_type: ObjectType,
        request: SearchRequest,
    ) -> HubSpotApiResult<SearchResponse> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.search_objects(object_type, &request))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_object(
        &self,
        object_type: ObjectType,
        object_id: &str,
    ) -> HubSpotApiResult<CrmRecord> {
        let client = self.client.clone();
        let object_id = object_id.to_string();

        tokio::task::spawn_blocking(move || client.get_object(object_type, &object_id))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn create_object(
        &self,
        object_type: ObjectType,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.create_object(object_type, properties))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn update_object(
        &self,
        object_type: ObjectType,
        object_id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        let client = self.client.clone();
        let object_id = object_id.to_string();

        tokio::task::spawn_blocking(move || {
            client.update_object(object_type, &object_id, properties)
        })
        .await
        .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_company_engagement_ids(&self, company_id: &str) -> HubSpotApiResult<Vec<i64>> {
        let client = self.client.clone();
        let company_id = company_id.to_string();

        tokio::task::spawn_blocking(move || client.get_company_engagement_ids(&company_id))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_engagement(&self, engagement_id: i64) -> HubSpotApiResult<EngagementEnvelope> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_engagement(engagement_id))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }

    async fn get_recent_engagements(
        &self,
        since_ms: i64,
        limit: u32,
    ) -> HubSpotApiResult<Vec<EngagementEnvelope>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_recent_engagements(since_ms, limit))
            .await
            .map_err(|e| HubSpotApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
