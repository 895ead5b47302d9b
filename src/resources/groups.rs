//! User groups used for lead distribution.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`Groups::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewGroup {
    pub name: String,
    /// Member user ids
    #[serde(rename = "users", skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `groups`.
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    client: &'a Client,
}

impl<'a> Groups<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("groups", page).await
    }

    pub async fn create(&self, group: &NewGroup) -> Result<Value> {
        self.client.post("groups", group).await
    }

    pub async fn retrieve(&self, group_id: u64) -> Result<Value> {
        self.client.get(format!("groups/{group_id}"), &()).await
    }

    pub async fn update(&self, group_id: u64, update: &Extra) -> Result<Value> {
        self.client.put(format!("groups/{group_id}"), update).await
    }

    pub async fn delete(&self, group_id: u64) -> Result<Value> {
        self.client.delete(format!("groups/{group_id}"), None).await
    }

    /// Returns which member of the group receives the next lead.
    pub async fn round_robin_status(&self, group_id: u64) -> Result<Value> {
        self.client
            .get(format!("groups/{group_id}/roundRobin"), &())
            .await
    }
}
