//! HTTP client for the HubSpot REST APIs.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles bearer
//! authentication, error mapping, and pagination across the v3 objects API,
//! the v4 associations API, and the legacy v1 engagements API.

mod async_wrapper;
pub use async_wrapper::{AsyncHubSpotClient, AsyncHubSpotClientImpl};

use crate::config::Config;
use crate::error::{HubSpotApiError, HubSpotApiResult};
use crate::models::engagement::{EngagementEnvelope, RecentEngagementsPage};
use crate::models::record::{
    AssociationPage, CrmRecord, PropertiesEnvelope, SearchRequest, SearchResponse,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;
use std::time::Duration;

/// Page size for walking a company's engagement associations.
const ASSOCIATION_PAGE_SIZE: u32 = 500;

/// CRM object collections addressed by the v3 objects and search APIs.
///
/// Contacts and companies share one record shape, so client operations take
/// the collection as a parameter instead of duplicating per-entity methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Contacts,
    Companies,
}

impl ObjectType {
    /// Path segment used in v3 object URLs.
    pub fn as_path(&self) -> &'static str {
        match self {
            ObjectType::Contacts => "contacts",
            ObjectType::Companies => "companies",
        }
    }
}

/// HTTP client for the HubSpot REST APIs.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct HubSpotClient {
    /// Base URL for the HubSpot API
    base_url: String,

    /// Private app access token for bearer authentication
    access_token: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,
}

impl HubSpotClient {
    /// Create a new HubSpotClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            access_token: config.access_token.clone(),
            agent: Arc::new(agent),
        }
    }

    /// Create a HubSpotClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, access_token: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            access_token,
            agent: Arc::new(agent),
        }
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, HubSpotApiError> {
        let url = self.build_url(path);
        tracing::debug!("GET {}", url);

        self.agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e))
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &Value) -> Result<ureq::Response, HubSpotApiError> {
        let url = self.build_url(path);
        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        self.agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))
    }

    /// Execute a PATCH request with authentication and JSON body.
    fn patch(&self, path: &str, body: &Value) -> Result<ureq::Response, HubSpotApiError> {
        let url = self.build_url(path);
        tracing::debug!("PATCH {}", url);

        self.agent
            .request("PATCH", &url)
            .set("Authorization", &format!("Bearer {}", self.access_token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| self.map_error(e))
    }

    /// Read a response body and deserialize it.
    fn read_json<T: DeserializeOwned>(response: ureq::Response) -> HubSpotApiResult<T> {
        let body = response
            .into_string()
            .map_err(|e| HubSpotApiError::HttpError(e.to_string()))?;
        serde_json::from_str(&body).map_err(HubSpotApiError::JsonError)
    }

    /// Map a ureq error to a HubSpotApiError.
    fn map_error(&self, error: ureq::Error) -> HubSpotApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => HubSpotApiError::Unauthorized,
                    404 => HubSpotApiError::NotFound(message),
                    429 => HubSpotApiError::RateLimitExceeded,
                    _ => HubSpotApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    HubSpotApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    HubSpotApiError::Timeout
                } else {
                    HubSpotApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    // ========================= CRM Object Operations =========================

    /// Search a CRM collection via `POST /crm/v3/objects/{type}/search`.
    pub fn search_objects(
        &self,
        object_type: ObjectType,
        request: &SearchRequest,
    ) -> HubSpotApiResult<SearchResponse> {
        let path = format!("/crm/v3/objects/{}/search", object_type.as_path());
        let body = serde_json::to_value(request).map_err(HubSpotApiError::JsonError)?;
        let response = self.post(&path, &body)?;
        Self::read_json(response)
    }

    /// Fetch a single record by id.
    pub fn get_object(
        &self,
        object_type: ObjectType,
        object_id: &str,
    ) -> HubSpotApiResult<CrmRecord> {
        let path = format!(
            "/crm/v3/objects/{}/{}",
            object_type.as_path(),
            urlencoding::encode(object_id)
        );
        let response = self.get(&path)?;
        Self::read_json(response)
    }

    /// Create a record with the given properties.
    pub fn create_object(
        &self,
        object_type: ObjectType,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        let path = format!("/crm/v3/objects/{}", object_type.as_path());
        let body = serde_json::to_value(PropertiesEnvelope::new(properties))
            .map_err(HubSpotApiError::JsonError)?;
        let response = self.post(&path, &body)?;
        Self::read_json(response)
    }

    /// Patch a record's properties by id.
    pub fn update_object(
        &self,
        object_type: ObjectType,
        object_id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<CrmRecord> {
        let path = format!(
            "/crm/v3/objects/{}/{}",
            object_type.as_path(),
            urlencoding::encode(object_id)
        );
        let body = serde_json::to_value(PropertiesEnvelope::new(properties))
            .map_err(HubSpotApiError::JsonError)?;
        let response = self.patch(&path, &body)?;
        Self::read_json(response)
    }

    // ========================= Engagement Operations =========================

    /// Collect the ids of every engagement associated with a company,
    /// walking the v4 associations API page by page.
    pub fn get_company_engagement_ids(&self, company_id: &str) -> HubSpotApiResult<Vec<i64>> {
        let mut ids = Vec::new();
        let mut after: Option<String> = None;

        loop {
            let mut path = format!(
                "/crm/v4/objects/companies/{}/associations/engagements?limit={}",
                urlencoding::encode(company_id),
                ASSOCIATION_PAGE_SIZE
            );
            if let Some(cursor) = &after {
                path.push_str("&after=");
                path.push_str(&urlencoding::encode(cursor));
            }

            let response = self.get(&path)?;
            let page: AssociationPage = Self::read_json(response)?;

            ids.extend(page.results.iter().map(|edge| edge.to_object_id));

            after = page.paging.and_then(|p| p.next).map(|next| next.after);
            if after.is_none() {
                break;
            }
        }

        Ok(ids)
    }

    /// Fetch one engagement's detail from the v1 engagements API.
    pub fn get_engagement(&self, engagement_id: i64) -> HubSpotApiResult<EngagementEnvelope> {
        let path = format!("/engagements/v1/engagements/{}", engagement_id);
        let response = self.get(&path)?;
        Self::read_json(response)
    }

    /// Fetch engagements modified since the given epoch-millisecond
    /// timestamp, newest first, following the `hasMore`/`offset` cursor
    /// until `limit` engagements are collected or the listing is exhausted.
    pub fn get_recent_engagements(
        &self,
        since_ms: i64,
        limit: u32,
    ) -> HubSpotApiResult<Vec<EngagementEnvelope>> {
        let mut collected: Vec<EngagementEnvelope> = Vec::new();
        let mut offset: i64 = 0;

        loop {
            let path = format!(
                "/engagements/v1/engagements/recent/modified?count={}&since={}&offset={}",
                limit, since_ms, offset
            );
            let response = self.get(&path)?;
            let page: RecentEngagementsPage = Self::read_json(response)?;

            // An empty page means the cursor is exhausted regardless of hasMore
            let fetched = page.results.len();
            collected.extend(page.results);

            if fetched == 0 || collected.len() >= limit as usize || !page.has_more {
                break;
            }
            offset = page.offset;
        }

        collected.truncate(limit as usize);
        Ok(collected)
    }
}
