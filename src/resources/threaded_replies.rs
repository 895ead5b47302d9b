use crate::{Client, Result};
use serde_json::Value;

/// Binding for `threadedReplies`.
#[derive(Debug, Clone, Copy)]
pub struct ThreadedReplies<'a> {
    client: &'a Client,
}

impl<'a> ThreadedReplies<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Fetches a reply in a note or email thread.
    pub async fn retrieve(&self, reply_id: u64) -> Result<Value> {
        self.client
            .get(format!("threadedReplies/{reply_id}"), &())
            .await
    }
}
