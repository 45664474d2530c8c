//! CRM record and search models shared by contacts and companies.
//!
//! HubSpot's v3 objects API uses one record shape for every object type, so
//! a single set of structs covers both contacts and companies.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A CRM object record as returned by the v3 objects and search APIs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct CrmRecord {
    /// Unique identifier assigned by HubSpot
    pub id: String,

    /// Property bag; which keys are present depends on the request projection
    pub properties: Map<String, Value>,

    /// When the record was created (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// When the record was last updated (ISO 8601 timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Whether the record has been archived
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl CrmRecord {
    /// Create a record with just an id, for building test fixtures.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// A single property comparison inside a search filter group.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    /// Name of the CRM property to compare
    pub property_name: String,

    /// Comparison operator (this server only issues `EQ`)
    pub operator: String,

    /// Value to compare against
    pub value: Value,
}

impl Filter {
    /// Exact-match filter on a property.
    pub fn equals(property: &str, value: impl Into<Value>) -> Self {
        Self {
            property_name: property.to_string(),
            operator: "EQ".to_string(),
            value: value.into(),
        }
    }
}

/// Filters combined with AND semantics by the search API.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FilterGroup {
    pub filters: Vec<Filter>,
}

/// Sort specification for search results.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub property_name: String,
    pub direction: String,
}

impl Sort {
    /// Sort newest-first on the given property.
    pub fn descending(property: &str) -> Self {
        Self {
            property_name: property.to_string(),
            direction: "DESCENDING".to_string(),
        }
    }
}

/// Request body for `POST /crm/v3/objects/{type}/search`.
///
/// Every section is optional on the wire; absent sections are omitted
/// rather than sent empty.
#[derive(Debug, Clone, Serialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub filter_groups: Vec<FilterGroup>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<Sort>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl SearchRequest {
    /// Exact-match search used for duplicate detection before a create.
    pub fn exact_match(filters: Vec<Filter>) -> Self {
        Self {
            filter_groups: vec![FilterGroup { filters }],
            ..Default::default()
        }
    }

    /// Most-recently-modified listing with a fixed property projection.
    pub fn recent(sort_property: &str, properties: &[&str], limit: u32) -> Self {
        Self {
            sorts: vec![Sort::descending(sort_property)],
            properties: properties.iter().map(|p| p.to_string()).collect(),
            limit: Some(limit),
            ..Default::default()
        }
    }
}

/// Response body from the v3 search API.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct SearchResponse {
    pub total: u64,
    pub results: Vec<CrmRecord>,
}

/// Request body for v3 create and update calls: `{"properties": {...}}`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PropertiesEnvelope {
    pub properties: Map<String, Value>,
}

impl PropertiesEnvelope {
    pub fn new(properties: Map<String, Value>) -> Self {
        Self { properties }
    }
}

/// One page from the v4 associations API.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct AssociationPage {
    pub results: Vec<AssociationEdge>,
    pub paging: Option<Paging>,
}

/// A single association edge pointing at the object on the other side.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AssociationEdge {
    pub to_object_id: i64,
}

/// Cursor block present when more pages follow.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Paging {
    pub next: Option<PagingNext>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PagingNext {
    pub after: String,
}
