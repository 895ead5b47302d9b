//! Ponds: shared lead pools that agents claim from.

use super::Extra;
use crate::query::Page;
use crate::{Client, Error, Method, RequestMetadata, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Fields for [`Ponds::update`]. Creation only accepts a name.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PondUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Users allowed to claim from the pond
    #[serde(rename = "users", skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
    #[serde(rename = "default", skip_serializing_if = "Option::is_none")]
    pub is_default: Option<bool>,
    #[serde(rename = "note", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `ponds`.
#[derive(Debug, Clone, Copy)]
pub struct Ponds<'a> {
    client: &'a Client,
}

impl<'a> Ponds<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("ponds", page).await
    }

    /// Creates an empty pond. Configure it afterwards with [`Ponds::update`].
    pub async fn create(&self, name: &str) -> Result<Value> {
        self.client.post("ponds", &json!({ "name": name })).await
    }

    pub async fn retrieve(&self, pond_id: u64) -> Result<Value> {
        self.client.get(format!("ponds/{pond_id}"), &()).await
    }

    pub async fn update(&self, pond_id: u64, update: &PondUpdate) -> Result<Value> {
        self.client.put(format!("ponds/{pond_id}"), update).await
    }

    /// Deletes a pond, handing its leads to `assign_to`.
    ///
    /// Without a user id the leads go to the owner of the API key, which costs one extra
    /// request to `me`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if no user id is given and `me` does not return one.
    pub async fn delete(&self, pond_id: u64, assign_to: Option<u64>) -> Result<Value> {
        let assign_to = match assign_to {
            Some(user_id) => user_id,
            None => {
                let me = self.client.identity().me().await?;
                me.get("id").and_then(Value::as_u64).ok_or_else(|| {
                    Error::Validation(
                        "Could not determine a user to receive the pond's leads".to_string(),
                    )
                })?
            }
        };

        let metadata = RequestMetadata::new(Method::DELETE, format!("ponds/{pond_id}"))
            .with_query_param("assignTo", assign_to.to_string());
        self.client.execute(metadata).await
    }
}
