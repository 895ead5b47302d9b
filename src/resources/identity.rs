//! Identity of the API key in use.

use crate::{Client, Result};
use serde_json::Value;

/// Binding for `identity` and `me`.
#[derive(Debug, Clone, Copy)]
pub struct Identity<'a> {
    client: &'a Client,
}

impl<'a> Identity<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Returns the account and user the API key belongs to.
    pub async fn get(&self) -> Result<Value> {
        self.client.get("identity", &()).await
    }

    /// Returns the user record of the API key's owner.
    pub async fn me(&self) -> Result<Value> {
        self.client.get("me", &()).await
    }
}
