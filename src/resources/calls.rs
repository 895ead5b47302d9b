//! Logged phone calls.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`Calls::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct CallFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`Calls::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewCall {
    #[serde(rename = "personId")]
    pub person_id: u64,
    pub phone: String,
    /// Seconds
    pub duration: u64,
    pub outcome: String,
    #[serde(rename = "isIncoming")]
    pub is_incoming: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "recordingUrl", skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
    #[serde(rename = "calledAt", skip_serializing_if = "Option::is_none")]
    pub called_at: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `calls`.
#[derive(Debug, Clone, Copy)]
pub struct Calls<'a> {
    client: &'a Client,
}

impl<'a> Calls<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &CallFilter) -> Result<Value> {
        self.client.get("calls", filter).await
    }

    pub async fn create(&self, call: &NewCall) -> Result<Value> {
        self.client.post("calls", call).await
    }

    pub async fn retrieve(&self, call_id: u64) -> Result<Value> {
        self.client.get(format!("calls/{call_id}"), &()).await
    }

    /// Updates a call, e.g. its `outcome` or `note`. `personId` cannot change.
    pub async fn update(&self, call_id: u64, update: &Extra) -> Result<Value> {
        self.client.put(format!("calls/{call_id}"), update).await
    }
}
