//! Person stages (Lead, Active Client, Closed, ...).

use super::Extra;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Body for [`Stages::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewStage {
    pub name: String,
    #[serde(rename = "pipelineId", skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `stages`.
#[derive(Debug, Clone, Copy)]
pub struct Stages<'a> {
    client: &'a Client,
}

impl<'a> Stages<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists stages. The service does not page this collection; `filter` is passed through.
    pub async fn list(&self, filter: &Extra) -> Result<Value> {
        self.client.get("stages", filter).await
    }

    pub async fn create(&self, stage: &NewStage) -> Result<Value> {
        self.client.post("stages", stage).await
    }

    pub async fn retrieve(&self, stage_id: u64) -> Result<Value> {
        self.client.get(format!("stages/{stage_id}"), &()).await
    }

    pub async fn update(&self, stage_id: u64, update: &Extra) -> Result<Value> {
        self.client.put(format!("stages/{stage_id}"), update).await
    }

    /// Deletes a stage. People in it are moved to `assign_stage_id`, which the service
    /// requires.
    pub async fn delete(&self, stage_id: u64, assign_stage_id: u64) -> Result<Value> {
        self.client
            .delete(
                format!("stages/{stage_id}"),
                Some(&json!({ "assignStageId": assign_stage_id })),
            )
            .await
    }
}
