//! Webhook subscriptions.
//!
//! The service scopes webhooks to the registered system that created them. Requests carry
//! the `X-System` headers configured on the client; [`Webhooks::system`] additionally sends
//! the system name as the `system` query parameter, which list and lookup calls need when
//! one key serves several integrations.

use super::Extra;
use crate::query::{to_query_pairs, Page};
use crate::{Client, Method, RequestMetadata, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`Webhooks::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewWebhook {
    /// Event to subscribe to, e.g. `peopleCreated`
    pub event: String,
    /// HTTPS endpoint receiving the callbacks
    pub url: String,
    /// Shared secret used to sign deliveries
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Fields for [`Webhooks::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct WebhookUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(rename = "eventTypes", skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `webhooks`.
#[derive(Debug, Clone, Copy)]
pub struct Webhooks<'a> {
    client: &'a Client,
    system: Option<&'a str>,
}

impl<'a> Webhooks<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self {
            client,
            system: None,
        }
    }

    /// Scopes every call to the named system.
    pub fn system(mut self, system: &'a str) -> Self {
        self.system = Some(system);
        self
    }

    fn request(&self, method: Method, path: impl Into<String>) -> RequestMetadata {
        let metadata = RequestMetadata::new(method, path);
        match self.system {
            Some(system) => metadata.with_query_param("system", system),
            None => metadata,
        }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        let metadata = self
            .request(Method::GET, "webhooks")
            .with_query_params(to_query_pairs(page)?);
        self.client.execute(metadata).await
    }

    pub async fn create(&self, webhook: &NewWebhook) -> Result<Value> {
        let metadata = self.request(Method::POST, "webhooks").with_json(webhook)?;
        self.client.execute(metadata).await
    }

    pub async fn retrieve(&self, webhook_id: u64) -> Result<Value> {
        let metadata = self.request(Method::GET, format!("webhooks/{webhook_id}"));
        self.client.execute(metadata).await
    }

    pub async fn update(&self, webhook_id: u64, update: &WebhookUpdate) -> Result<Value> {
        let metadata = self
            .request(Method::PUT, format!("webhooks/{webhook_id}"))
            .with_json(update)?;
        self.client.execute(metadata).await
    }

    pub async fn delete(&self, webhook_id: u64) -> Result<Value> {
        let metadata = self.request(Method::DELETE, format!("webhooks/{webhook_id}"));
        self.client.execute(metadata).await
    }

    /// Fetches one delivered event, as referenced by a callback payload.
    pub async fn retrieve_event(&self, event_id: u64) -> Result<Value> {
        let metadata = self.request(Method::GET, format!("webhookEvents/{event_id}"));
        self.client.execute(metadata).await
    }
}
