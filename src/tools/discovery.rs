//! Discovery tools for recently active CRM records.
//!
//! "Active" means recently modified: both listings sort by modification
//! time, newest first, and project a fixed set of properties.

use crate::error::HubSpotApiResult;
use crate::normalize::convert_datetime_fields;
use crate::repositories::{CompanyRepository, ContactRepository};
use serde_json::Value;
use std::sync::Arc;

/// Default number of records returned when the caller gives no limit.
pub const DEFAULT_RECENT_LIMIT: u32 = 10;

/// Tools listing the most recently modified companies and contacts.
pub struct RecordDiscoveryTools {
    company_repo: Arc<dyn CompanyRepository>,
    contact_repo: Arc<dyn ContactRepository>,
}

impl RecordDiscoveryTools {
    /// Create new record discovery tools.
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        contact_repo: Arc<dyn ContactRepository>,
    ) -> Self {
        Self {
            company_repo,
            contact_repo,
        }
    }

    /// Most recently modified companies, newest first, with datetime
    /// fields normalized.
    pub async fn get_active_companies(&self, limit: Option<u32>) -> HubSpotApiResult<Value> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        tracing::debug!("Fetching {} most recently modified companies", limit);

        let companies = self.company_repo.recent(limit).await?;
        Ok(convert_datetime_fields(serde_json::to_value(companies)?))
    }

    /// Most recently modified contacts, newest first, with datetime
    /// fields normalized.
    pub async fn get_active_contacts(&self, limit: Option<u32>) -> HubSpotApiResult<Value> {
        let limit = limit.unwrap_or(DEFAULT_RECENT_LIMIT);
        tracing::debug!("Fetching {} most recently modified contacts", limit);

        let contacts = self.contact_repo.recent(limit).await?;
        Ok(convert_datetime_fields(serde_json::to_value(contacts)?))
    }
}
