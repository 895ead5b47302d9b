use crate::{Client, Result};
use serde_json::Value;

/// Binding for `webhookEvents`.
#[derive(Debug, Clone, Copy)]
pub struct WebhookEvents<'a> {
    client: &'a Client,
}

impl<'a> WebhookEvents<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn retrieve(&self, event_id: u64) -> Result<Value> {
        self.client
            .get(format!("webhookEvents/{event_id}"), &())
            .await
    }
}
