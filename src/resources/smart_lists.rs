//! Saved people searches. Their members are listed through
//! [`People::list_by_list_id`](super::people::People::list_by_list_id).

use crate::query::Page;
use crate::{Client, Result};
use serde_json::Value;

/// Binding for `smartLists`.
#[derive(Debug, Clone, Copy)]
pub struct SmartLists<'a> {
    client: &'a Client,
}

impl<'a> SmartLists<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("smartLists", page).await
    }

    pub async fn retrieve(&self, smart_list_id: u64) -> Result<Value> {
        self.client
            .get(format!("smartLists/{smart_list_id}"), &())
            .await
    }
}
