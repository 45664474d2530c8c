//! Integration tests for the activity timeline tools using a mock
//! engagement repository.

mod mocks;

use chrono::{Duration, Utc};
use hubspot_mcp_server::models::EngagementEnvelope;
use hubspot_mcp_server::repositories::EngagementRepository;
use hubspot_mcp_server::tools::ActivityTimelineTools;
use mocks::MockEngagementRepository;
use serde_json::{json, Value};
use std::sync::Arc;

fn envelope(raw: Value) -> EngagementEnvelope {
    serde_json::from_value(raw).unwrap()
}

fn activity_tools(engagements: &MockEngagementRepository) -> ActivityTimelineTools {
    ActivityTimelineTools::new(Arc::new(engagements.clone()) as Arc<dyn EngagementRepository>)
}

#[tokio::test]
async fn test_company_activity_formats_each_engagement_by_type() {
    let engagements = MockEngagementRepository::new();
    engagements.add_company_engagement(
        "42",
        envelope(json!({
            "engagement": {"id": 701, "type": "NOTE", "createdAt": 1705312800000i64},
            "associations": {"companyIds": [42]},
            "metadata": {"body": "Called about renewal"}
        })),
    );
    engagements.add_company_engagement(
        "42",
        envelope(json!({
            "engagement": {"id": 702, "type": "CALL"},
            "metadata": {
                "body": "Voicemail left",
                "fromNumber": "+15551230000",
                "toNumber": "+15559870000",
                "durationMilliseconds": 93000,
                "status": "COMPLETED"
            }
        })),
    );

    let tools = activity_tools(&engagements);
    let result = tools.get_company_activity("42").await.unwrap();

    let entries = result.as_array().unwrap();
    assert_eq!(entries.len(), 2);

    // Association order is preserved
    assert_eq!(entries[0]["type"], json!("NOTE"));
    assert_eq!(entries[0]["content"], json!("Called about renewal"));
    assert_eq!(entries[1]["type"], json!("CALL"));
    assert_eq!(entries[1]["content"]["from_number"], json!("+15551230000"));
    assert_eq!(entries[1]["content"]["duration_ms"], json!(93000));

    assert_eq!(engagements.get_call_count("ids_for_company"), 1);
    assert_eq!(engagements.get_call_count("get"), 2);
}

#[tokio::test]
async fn test_company_activity_without_engagements_is_empty_array() {
    let engagements = MockEngagementRepository::new();
    let tools = activity_tools(&engagements);

    let result = tools.get_company_activity("42").await.unwrap();

    assert_eq!(result, json!([]));
}

#[tokio::test]
async fn test_company_activity_normalizes_epoch_timestamps() {
    let engagements = MockEngagementRepository::new();
    engagements.add_company_engagement(
        "42",
        envelope(json!({
            "engagement": {
                "id": 701,
                "type": "NOTE",
                "createdAt": 1705312800000i64,
                "lastUpdated": 1705399200000i64
            },
            "metadata": {"body": "note"}
        })),
    );

    let tools = activity_tools(&engagements);
    let result = tools.get_company_activity("42").await.unwrap();

    assert_eq!(result[0]["created_at"], json!("2024-01-15T10:00:00.000Z"));
    assert_eq!(result[0]["last_updated"], json!("2024-01-16T10:00:00.000Z"));
}

#[tokio::test]
async fn test_recent_engagements_defaults_to_seven_days() {
    let engagements = MockEngagementRepository::new();
    engagements.set_recent(vec![
        envelope(json!({
            "engagement": {"id": 1, "type": "NOTE"},
            "metadata": {"body": "a"}
        })),
        envelope(json!({
            "engagement": {"id": 2, "type": "EMAIL"},
            "metadata": {"subject": "Q1 proposal", "text": "plain body"}
        })),
    ]);

    let tools = activity_tools(&engagements);
    let result = tools.get_recent_engagements(None, None).await.unwrap();

    let entries = result.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1]["content"]["subject"], json!("Q1 proposal"));
    assert_eq!(entries[1]["content"]["body"], json!("plain body"));

    // Window starts seven days back, allowing slack for test execution time
    let expected = (Utc::now() - Duration::days(7)).timestamp_millis();
    let since = engagements.last_since_ms().unwrap();
    assert!((expected - since).abs() < 5_000, "since_ms was {}", since);
}

#[tokio::test]
async fn test_recent_engagements_custom_window_and_limit() {
    let engagements = MockEngagementRepository::new();
    engagements.set_recent(vec![
        envelope(json!({"engagement": {"id": 1, "type": "NOTE"}, "metadata": {}})),
        envelope(json!({"engagement": {"id": 2, "type": "NOTE"}, "metadata": {}})),
        envelope(json!({"engagement": {"id": 3, "type": "NOTE"}, "metadata": {}})),
    ]);

    let tools = activity_tools(&engagements);
    let result = tools
        .get_recent_engagements(Some(30), Some(1))
        .await
        .unwrap();

    assert_eq!(result.as_array().unwrap().len(), 1);

    let expected = (Utc::now() - Duration::days(30)).timestamp_millis();
    let since = engagements.last_since_ms().unwrap();
    assert!((expected - since).abs() < 5_000, "since_ms was {}", since);
}

#[tokio::test]
async fn test_recent_engagements_keeps_unknown_types_without_content() {
    let engagements = MockEngagementRepository::new();
    engagements.set_recent(vec![envelope(json!({
        "engagement": {"id": 9, "type": "WHATS_APP"},
        "metadata": {"body": "hi"}
    }))]);

    let tools = activity_tools(&engagements);
    let result = tools.get_recent_engagements(None, None).await.unwrap();

    assert_eq!(result[0]["type"], json!("WHATS_APP"));
    assert!(result[0].get("content").is_none());
}
