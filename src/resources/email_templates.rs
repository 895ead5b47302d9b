//! Email templates and merge-field previews.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`EmailTemplates::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEmailTemplate {
    pub name: String,
    pub subject: String,
    /// HTML
    pub body: String,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for the template `merge` endpoints.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TemplateMerge {
    pub body: String,
    /// Values to substitute, e.g. `{"firstName": "John"}`
    #[serde(rename = "mergeFields")]
    pub merge_fields: Extra,
    #[serde(rename = "templateId", skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    /// Email templates only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `templates`.
#[derive(Debug, Clone, Copy)]
pub struct EmailTemplates<'a> {
    client: &'a Client,
}

impl<'a> EmailTemplates<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("templates", page).await
    }

    pub async fn create(&self, template: &NewEmailTemplate) -> Result<Value> {
        self.client.post("templates", template).await
    }

    pub async fn retrieve(&self, template_id: u64) -> Result<Value> {
        self.client
            .get(format!("templates/{template_id}"), &())
            .await
    }

    pub async fn update(&self, template_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("templates/{template_id}"), update)
            .await
    }

    /// Renders a subject and body with merge fields filled in.
    pub async fn merge(&self, merge: &TemplateMerge) -> Result<Value> {
        self.client.post("templates/merge", merge).await
    }

    pub async fn delete(&self, template_id: u64) -> Result<Value> {
        self.client
            .delete(format!("templates/{template_id}"), None)
            .await
    }
}
