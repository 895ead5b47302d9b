//! Deal pipelines. Each pipeline owns an ordered set of deal stages.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`Pipelines::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPipeline {
    pub name: String,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `pipelines`.
#[derive(Debug, Clone, Copy)]
pub struct Pipelines<'a> {
    client: &'a Client,
}

impl<'a> Pipelines<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("pipelines", page).await
    }

    pub async fn create(&self, pipeline: &NewPipeline) -> Result<Value> {
        self.client.post("pipelines", pipeline).await
    }

    pub async fn retrieve(&self, pipeline_id: u64) -> Result<Value> {
        self.client
            .get(format!("pipelines/{pipeline_id}"), &())
            .await
    }

    pub async fn update(&self, pipeline_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("pipelines/{pipeline_id}"), update)
            .await
    }

    pub async fn delete(&self, pipeline_id: u64) -> Result<Value> {
        self.client
            .delete(format!("pipelines/{pipeline_id}"), None)
            .await
    }
}
