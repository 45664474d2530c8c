//! Engagement models for the v1 engagements API.
//!
//! Engagements (notes, emails, tasks, meetings, calls) come back from
//! HubSpot as an envelope of core fields plus a type-specific metadata bag.
//! [`format_engagement`] reshapes that envelope into the stable output
//! contract returned to callers: snake_case core fields with a `content`
//! payload whose shape depends on the engagement type.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One engagement as returned by the v1 API, both from the
/// single-engagement endpoint and from `recent/modified` pages.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EngagementEnvelope {
    pub engagement: EngagementCore,
    pub associations: Option<Value>,
    pub metadata: EngagementMetadata,
}

/// Core fields shared by every engagement type.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct EngagementCore {
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub engagement_type: Option<String>,
    pub created_at: Option<i64>,
    pub last_updated: Option<i64>,
    pub created_by: Option<i64>,
    pub modified_by: Option<i64>,
    pub timestamp: Option<i64>,
}

/// Union of the metadata fields used by any engagement type. Each type
/// populates only its own subset; everything else deserializes to None.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct EngagementMetadata {
    pub body: Option<String>,
    pub subject: Option<String>,
    pub from: Option<EmailParticipant>,
    pub to: Vec<EmailParticipant>,
    pub cc: Vec<EmailParticipant>,
    pub bcc: Vec<EmailParticipant>,
    pub sender: Option<EmailSender>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub status: Option<String>,
    pub for_object_type: Option<String>,
    pub title: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub internal_meeting_notes: Option<String>,
    pub from_number: Option<String>,
    pub to_number: Option<String>,
    pub duration_milliseconds: Option<i64>,
    pub disposition: Option<String>,
}

/// An email address with optional display details, as HubSpot reports
/// senders and recipients. Missing fields render as empty strings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct EmailParticipant {
    pub raw: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// The sending account of an email engagement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct EmailSender {
    pub email: String,
}

/// Response page from `/engagements/v1/engagements/recent/modified`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecentEngagementsPage {
    pub results: Vec<EngagementEnvelope>,
    pub has_more: bool,
    pub offset: i64,
    pub total: Option<i64>,
}

/// The reshaped engagement returned to callers. Core fields are
/// snake_case; nested email participants keep HubSpot's camelCase keys.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FormattedEngagement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub engagement_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
    pub associations: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<EngagementContent>,
}

/// Type-specific content payload. Serializes without a tag: a note is a
/// bare string, every other type an object.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum EngagementContent {
    Note(String),
    Email(EmailContent),
    Task(TaskContent),
    Meeting(MeetingContent),
    Call(CallContent),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmailContent {
    pub subject: String,
    pub from: EmailParticipant,
    pub to: Vec<EmailParticipant>,
    pub cc: Vec<EmailParticipant>,
    pub bcc: Vec<EmailParticipant>,
    pub sender: EmailSender,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskContent {
    pub subject: String,
    pub body: String,
    pub status: String,
    pub for_object_type: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MeetingContent {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<i64>,
    pub internal_notes: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CallContent {
    pub body: String,
    pub from_number: String,
    pub to_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
    pub status: String,
    pub disposition: String,
}

/// First candidate that is present and non-empty, mirroring how the email
/// body falls back from plain text to HTML.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Reshape a raw v1 engagement into the per-type output contract.
///
/// Unknown engagement types keep their core fields but carry no `content`.
pub fn format_engagement(envelope: EngagementEnvelope) -> FormattedEngagement {
    let EngagementEnvelope {
        engagement,
        associations,
        metadata,
    } = envelope;

    let content = match engagement.engagement_type.as_deref() {
        Some("NOTE") => Some(EngagementContent::Note(metadata.body.unwrap_or_default())),
        Some("EMAIL") => Some(EngagementContent::Email(EmailContent {
            subject: metadata.subject.unwrap_or_default(),
            from: metadata.from.unwrap_or_default(),
            to: metadata.to,
            cc: metadata.cc,
            bcc: metadata.bcc,
            sender: metadata.sender.unwrap_or_default(),
            body: non_empty(metadata.text)
                .or_else(|| non_empty(metadata.html))
                .unwrap_or_default(),
        })),
        Some("TASK") => Some(EngagementContent::Task(TaskContent {
            subject: metadata.subject.unwrap_or_default(),
            body: metadata.body.unwrap_or_default(),
            status: metadata.status.unwrap_or_default(),
            for_object_type: metadata.for_object_type.unwrap_or_default(),
        })),
        Some("MEETING") => Some(EngagementContent::Meeting(MeetingContent {
            title: metadata.title.unwrap_or_default(),
            body: metadata.body.unwrap_or_default(),
            start_time: metadata.start_time,
            end_time: metadata.end_time,
            internal_notes: metadata.internal_meeting_notes.unwrap_or_default(),
        })),
        Some("CALL") => Some(EngagementContent::Call(CallContent {
            body: metadata.body.unwrap_or_default(),
            from_number: metadata.from_number.unwrap_or_default(),
            to_number: metadata.to_number.unwrap_or_default(),
            duration_ms: metadata.duration_milliseconds,
            status: metadata.status.unwrap_or_default(),
            disposition: metadata.disposition.unwrap_or_default(),
        })),
        _ => None,
    };

    // Null and absent association blocks both render as an empty object
    let associations = match associations {
        Some(value) if !value.is_null() => value,
        _ => Value::Object(Default::default()),
    };

    FormattedEngagement {
        id: engagement.id,
        engagement_type: engagement.engagement_type,
        created_at: engagement.created_at,
        last_updated: engagement.last_updated,
        created_by: engagement.created_by,
        modified_by: engagement.modified_by,
        timestamp: engagement.timestamp,
        associations,
        content,
    }
}
