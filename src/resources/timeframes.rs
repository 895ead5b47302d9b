use super::Extra;
use crate::{Client, Result};
use serde_json::Value;

/// Binding for `timeframes`, the purchase timeframes a person can be tagged with.
#[derive(Debug, Clone, Copy)]
pub struct Timeframes<'a> {
    client: &'a Client,
}

impl<'a> Timeframes<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &Extra) -> Result<Value> {
        self.client.get("timeframes", filter).await
    }
}
