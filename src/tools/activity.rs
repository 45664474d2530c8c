//! Activity timeline tools.
//!
//! Provides the engagement-centric views: everything that happened on a
//! company, and everything that happened recently across the account.

use crate::error::HubSpotApiResult;
use crate::models::engagement::FormattedEngagement;
use crate::models::format_engagement;
use crate::normalize::convert_datetime_fields;
use crate::repositories::EngagementRepository;
use chrono::{Duration, Utc};
use serde_json::Value;
use std::sync::Arc;

/// Default trailing window for recent engagements, in days.
pub const DEFAULT_ENGAGEMENT_DAYS: i64 = 7;

/// Default cap on the number of recent engagements returned.
pub const DEFAULT_ENGAGEMENT_LIMIT: u32 = 50;

/// Tools for reading engagement timelines.
pub struct ActivityTimelineTools {
    engagement_repo: Arc<dyn EngagementRepository>,
}

impl ActivityTimelineTools {
    /// Create new activity timeline tools.
    pub fn new(engagement_repo: Arc<dyn EngagementRepository>) -> Self {
        Self { engagement_repo }
    }

    /// Full engagement history for one company.
    ///
    /// Walks the company's engagement associations, fetches each
    /// engagement's detail, and reshapes it by type. Engagements are
    /// returned in association order.
    pub async fn get_company_activity(&self, company_id: &str) -> HubSpotApiResult<Value> {
        let ids = self.engagement_repo.ids_for_company(company_id).await?;
        tracing::debug!(
            "Company {} has {} associated engagements",
            company_id,
            ids.len()
        );

        let mut activities: Vec<FormattedEngagement> = Vec::with_capacity(ids.len());
        for engagement_id in ids {
            let envelope = self.engagement_repo.get(engagement_id).await?;
            activities.push(format_engagement(envelope));
        }

        Ok(convert_datetime_fields(serde_json::to_value(activities)?))
    }

    /// Engagements modified within the trailing day-window, newest first,
    /// at most `limit` of them.
    pub async fn get_recent_engagements(
        &self,
        days: Option<i64>,
        limit: Option<u32>,
    ) -> HubSpotApiResult<Value> {
        let days = days.unwrap_or(DEFAULT_ENGAGEMENT_DAYS);
        let limit = limit.unwrap_or(DEFAULT_ENGAGEMENT_LIMIT);
        let since_ms = (Utc::now() - Duration::days(days)).timestamp_millis();

        let envelopes = self.engagement_repo.recent(since_ms, limit).await?;
        let formatted: Vec<FormattedEngagement> =
            envelopes.into_iter().map(format_engagement).collect();

        Ok(convert_datetime_fields(serde_json::to_value(formatted)?))
    }
}
