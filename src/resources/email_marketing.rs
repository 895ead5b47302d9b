//! Email marketing events and campaigns reported by third-party senders.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// One email marketing event for [`EmailMarketing::create_event`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmEvent {
    /// e.g. `delivered`, `open`, `click`, `unsubscribe`
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(rename = "personId")]
    pub person_id: u64,
    /// Address the email was sent to
    pub recipient: String,
    #[serde(rename = "campaignId", skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<u64>,
    #[serde(rename = "emailId", skip_serializing_if = "Option::is_none")]
    pub email_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`EmailMarketing::create_campaign`].
#[derive(Debug, Clone, Serialize)]
pub struct NewCampaign {
    pub name: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Sending system, `API` by default
    pub origin: String,
    #[serde(rename = "originId")]
    pub origin_id: u64,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

impl NewCampaign {
    /// Creates a campaign originating from the API.
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subject: subject.into(),
            body: None,
            origin: "API".to_string(),
            origin_id: 1,
            extra: Extra::new(),
        }
    }
}

/// Body for [`EmailMarketing::update_campaign`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CampaignUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `emEvents` and `emCampaigns`.
#[derive(Debug, Clone, Copy)]
pub struct EmailMarketing<'a> {
    client: &'a Client,
}

impl<'a> EmailMarketing<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list_events(&self, page: &Page) -> Result<Value> {
        self.client.get("emEvents", page).await
    }

    /// Records one event. The service takes events in batches; this sends a batch of one.
    pub async fn create_event(&self, event: &EmEvent) -> Result<Value> {
        self.client
            .post("emEvents", &json!({ "emEvents": [event] }))
            .await
    }

    pub async fn list_campaigns(&self, page: &Page) -> Result<Value> {
        self.client.get("emCampaigns", page).await
    }

    pub async fn create_campaign(&self, campaign: &NewCampaign) -> Result<Value> {
        self.client.post("emCampaigns", campaign).await
    }

    pub async fn update_campaign(&self, campaign_id: u64, update: &CampaignUpdate) -> Result<Value> {
        self.client
            .put(format!("emCampaigns/{campaign_id}"), update)
            .await
    }
}
