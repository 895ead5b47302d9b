//! Custom fields on people.
//!
//! Creating fields usually needs an admin API key. Listing, updating, and deleting
//! existing fields work with ordinary keys.

use super::{require_dropdown_options, Extra};
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`CustomFields::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewCustomField {
    /// Prefixed with `custom` when sent, unless it already is
    pub name: String,
    /// `text`, `date`, `number`, `dropdown`, ...; sent lowercase
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(rename = "entityType", skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    /// Required for dropdowns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

impl NewCustomField {
    fn normalized(&self) -> Self {
        let mut field = self.clone();
        if !field.name.starts_with("custom") {
            field.name = format!("custom{}", field.name);
        }
        field.field_type = field.field_type.to_lowercase();
        if field.options.as_ref().is_some_and(Vec::is_empty) {
            field.options = None;
        }
        field
    }
}

/// Binding for `customFields`.
#[derive(Debug, Clone, Copy)]
pub struct CustomFields<'a> {
    client: &'a Client,
}

impl<'a> CustomFields<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists field definitions. The service answers with a lowercase `customfields` key.
    pub async fn list(&self, query: &Extra) -> Result<Value> {
        self.client.get("customFields", query).await
    }

    /// Creates a field definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) for a `dropdown` field
    /// without options.
    pub async fn create(&self, field: &NewCustomField) -> Result<Value> {
        require_dropdown_options(&field.field_type, field.options.as_deref())?;
        self.client.post("customFields", &field.normalized()).await
    }

    pub async fn retrieve(&self, field_id: u64) -> Result<Value> {
        self.client.get(format!("customFields/{field_id}"), &()).await
    }

    /// Updates a definition, usually its `label` or dropdown `options`.
    pub async fn update(&self, field_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("customFields/{field_id}"), update)
            .await
    }

    pub async fn delete(&self, field_id: u64) -> Result<Value> {
        self.client
            .delete(format!("customFields/{field_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_name_prefix_and_lowercase_type() {
        let field = NewCustomField {
            name: "Budget".into(),
            field_type: "Dropdown".into(),
            options: Some(vec!["Low".into(), "High".into()]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(field.normalized()).unwrap(),
            json!({"name": "customBudget", "type": "dropdown", "options": ["Low", "High"]})
        );
    }

    #[test]
    fn test_prefixed_name_is_kept() {
        let field = NewCustomField {
            name: "customBirthday".into(),
            field_type: "date".into(),
            ..Default::default()
        };
        assert_eq!(field.normalized().name, "customBirthday");
    }
}
