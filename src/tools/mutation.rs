//! Record mutation tools: create-or-find and existence-checked update.
//!
//! Creates search for an existing record first and report it instead of
//! inserting a duplicate. Updates verify the record exists and report a
//! no-op instead of failing when it does not. Both outcomes are
//! informational results, not errors.

use crate::error::HubSpotApiResult;
use crate::models::record::CrmRecord;
use crate::normalize::convert_datetime_fields;
use crate::repositories::{CompanyRepository, ContactRepository};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Tools for creating and updating contacts and companies.
pub struct RecordMutationTools {
    contact_repo: Arc<dyn ContactRepository>,
    company_repo: Arc<dyn CompanyRepository>,
}

impl RecordMutationTools {
    /// Create new record mutation tools.
    pub fn new(
        contact_repo: Arc<dyn ContactRepository>,
        company_repo: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            contact_repo,
            company_repo,
        }
    }

    /// Create a contact unless one with the same first name, last name,
    /// and (when provided) company already exists.
    ///
    /// Returns the created record, or a message plus the first matching
    /// record when the search finds a duplicate.
    pub async fn create_contact(
        &self,
        firstname: &str,
        lastname: &str,
        email: Option<String>,
        extra_properties: Option<Map<String, Value>>,
    ) -> HubSpotApiResult<Value> {
        let company = company_filter_value(extra_properties.as_ref());
        let existing = self
            .contact_repo
            .find_by_name(firstname, lastname, company)
            .await?;

        if existing.total > 0 {
            tracing::info!(
                "Contact {} {} already exists, skipping create",
                firstname,
                lastname
            );
            return existing_record_outcome(
                "Contact already exists",
                "contact",
                existing.results.into_iter().next(),
            );
        }

        let mut properties = Map::new();
        properties.insert("firstname".to_string(), json!(firstname));
        properties.insert("lastname".to_string(), json!(lastname));
        if let Some(email) = email.filter(|e| !e.is_empty()) {
            properties.insert("email".to_string(), json!(email));
        }
        // Caller-supplied properties win over the named arguments
        if let Some(extra) = extra_properties {
            for (key, value) in extra {
                properties.insert(key, value);
            }
        }

        let created = self.contact_repo.create(properties).await?;
        Ok(convert_datetime_fields(serde_json::to_value(created)?))
    }

    /// Create a company unless one with the same name already exists.
    pub async fn create_company(
        &self,
        name: &str,
        extra_properties: Option<Map<String, Value>>,
    ) -> HubSpotApiResult<Value> {
        let existing = self.company_repo.find_by_name(name).await?;

        if existing.total > 0 {
            tracing::info!("Company {} already exists, skipping create", name);
            return existing_record_outcome(
                "Company already exists",
                "company",
                existing.results.into_iter().next(),
            );
        }

        let mut properties = Map::new();
        properties.insert("name".to_string(), json!(name));
        if let Some(extra) = extra_properties {
            for (key, value) in extra {
                properties.insert(key, value);
            }
        }

        let created = self.company_repo.create(properties).await?;
        Ok(convert_datetime_fields(serde_json::to_value(created)?))
    }

    /// Patch a contact's properties after confirming the contact exists.
    ///
    /// A missing contact is reported as an informational result, not an
    /// error.
    pub async fn update_contact(
        &self,
        contact_id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<Value> {
        match self.contact_repo.get(contact_id).await {
            Ok(_) => {}
            Err(err) if err.is_not_found() => {
                tracing::info!("Contact {} not found, skipping update", contact_id);
                return Ok(convert_datetime_fields(json!({
                    "message": "Contact not found, no update performed",
                    "contactId": contact_id,
                })));
            }
            Err(err) => return Err(err),
        }

        self.contact_repo
            .update(contact_id, properties.clone())
            .await?;

        Ok(convert_datetime_fields(json!({
            "message": "Contact updated successfully",
            "contactId": contact_id,
            "properties": properties,
        })))
    }

    /// Patch a company's properties after confirming the company exists.
    pub async fn update_company(
        &self,
        company_id: &str,
        properties: Map<String, Value>,
    ) -> HubSpotApiResult<Value> {
        match self.company_repo.get(company_id).await {
            Ok(_) => {}
            Err(err) if err.is_not_found() => {
                tracing::info!("Company {} not found, skipping update", company_id);
                return Ok(convert_datetime_fields(json!({
                    "message": "Company not found, no update performed",
                    "companyId": company_id,
                })));
            }
            Err(err) => return Err(err),
        }

        self.company_repo
            .update(company_id, properties.clone())
            .await?;

        Ok(convert_datetime_fields(json!({
            "message": "Company updated successfully",
            "companyId": company_id,
            "properties": properties,
        })))
    }
}

/// The `company` value used to narrow contact duplicate detection, when
/// the caller's properties carry a usable one.
fn company_filter_value(properties: Option<&Map<String, Value>>) -> Option<Value> {
    match properties?.get("company")? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        other => Some(other.clone()),
    }
}

/// Build the duplicate-hit outcome: a message plus the record that
/// blocked the insert, when the search returned one.
fn existing_record_outcome(
    message: &str,
    key: &str,
    record: Option<CrmRecord>,
) -> HubSpotApiResult<Value> {
    let mut outcome = Map::new();
    outcome.insert("message".to_string(), json!(message));
    if let Some(record) = record {
        outcome.insert(key.to_string(), serde_json::to_value(record)?);
    }
    Ok(convert_datetime_fields(Value::Object(outcome)))
}
