use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`Teams::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTeam {
    pub name: String,
    #[serde(rename = "userIds", skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
    #[serde(rename = "leaderId", skip_serializing_if = "Option::is_none")]
    pub leader_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `teams`.
#[derive(Debug, Clone, Copy)]
pub struct Teams<'a> {
    client: &'a Client,
}

impl<'a> Teams<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("teams", page).await
    }

    pub async fn create(&self, team: &NewTeam) -> Result<Value> {
        self.client.post("teams", team).await
    }

    pub async fn retrieve(&self, team_id: u64) -> Result<Value> {
        self.client.get(format!("teams/{team_id}"), &()).await
    }

    pub async fn update(&self, team_id: u64, update: &Extra) -> Result<Value> {
        self.client.put(format!("teams/{team_id}"), update).await
    }

    pub async fn delete(&self, team_id: u64) -> Result<Value> {
        self.client.delete(format!("teams/{team_id}"), None).await
    }
}
