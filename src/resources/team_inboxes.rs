//! Shared inboxes owned by a team.

use crate::query::Page;
use crate::{Client, Result};
use serde_json::Value;

/// Binding for `teamInboxes`.
#[derive(Debug, Clone, Copy)]
pub struct TeamInboxes<'a> {
    client: &'a Client,
}

impl<'a> TeamInboxes<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("teamInboxes", page).await
    }
}
