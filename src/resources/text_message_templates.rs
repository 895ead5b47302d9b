use super::email_templates::TemplateMerge;
use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`TextMessageTemplates::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTextTemplate {
    pub name: String,
    /// Template text; the service stores it as `message`
    #[serde(rename = "message")]
    pub body: String,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `textMessageTemplates`.
#[derive(Debug, Clone, Copy)]
pub struct TextMessageTemplates<'a> {
    client: &'a Client,
}

impl<'a> TextMessageTemplates<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("textMessageTemplates", page).await
    }

    pub async fn create(&self, template: &NewTextTemplate) -> Result<Value> {
        self.client.post("textMessageTemplates", template).await
    }

    pub async fn retrieve(&self, template_id: u64) -> Result<Value> {
        self.client
            .get(format!("textMessageTemplates/{template_id}"), &())
            .await
    }

    pub async fn update(&self, template_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("textMessageTemplates/{template_id}"), update)
            .await
    }

    /// Renders a template body with merge fields filled in. Leave `subject` unset.
    pub async fn merge(&self, merge: &TemplateMerge) -> Result<Value> {
        self.client.post("textMessageTemplates/merge", merge).await
    }

    pub async fn delete(&self, template_id: u64) -> Result<Value> {
        self.client
            .delete(format!("textMessageTemplates/{template_id}"), None)
            .await
    }
}
