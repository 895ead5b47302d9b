//! Custom fields on deals.

use super::{require_dropdown_options, Extra};
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`DealCustomFields::create`].
#[derive(Debug, Clone, Serialize)]
pub struct NewDealCustomField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(rename = "showInForm")]
    pub show_in_form: bool,
    /// Required for dropdowns
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

impl NewDealCustomField {
    /// Creates a field shown in the deal form.
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            show_in_form: true,
            options: None,
            extra: Extra::new(),
        }
    }

    /// Sets the dropdown options.
    pub fn options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = Some(options.into_iter().map(Into::into).collect());
        self
    }
}

/// Body for [`DealCustomFields::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct DealCustomFieldUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,
    #[serde(rename = "showInForm", skip_serializing_if = "Option::is_none")]
    pub show_in_form: Option<bool>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `dealCustomFields`.
#[derive(Debug, Clone, Copy)]
pub struct DealCustomFields<'a> {
    client: &'a Client,
}

impl<'a> DealCustomFields<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("dealCustomFields", page).await
    }

    /// Creates a field definition.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) for a `dropdown` field
    /// without options.
    pub async fn create(&self, field: &NewDealCustomField) -> Result<Value> {
        require_dropdown_options(&field.field_type, field.options.as_deref())?;
        self.client.post("dealCustomFields", field).await
    }

    pub async fn retrieve(&self, field_id: u64) -> Result<Value> {
        self.client
            .get(format!("dealCustomFields/{field_id}"), &())
            .await
    }

    pub async fn update(&self, field_id: u64, update: &DealCustomFieldUpdate) -> Result<Value> {
        self.client
            .put(format!("dealCustomFields/{field_id}"), update)
            .await
    }

    pub async fn delete(&self, field_id: u64) -> Result<Value> {
        self.client
            .delete(format!("dealCustomFields/{field_id}"), None)
            .await
    }
}
