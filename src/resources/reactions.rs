//! Emoji reactions on notes, calls and other timeline items.
//!
//! Reactions are addressed by the item they belong to (`ref_type`/`ref_id`, e.g.
//! `note`/`42`) rather than by their own id, except for [`Reactions::retrieve`].

use crate::{Client, Result};
use serde_json::{json, Value};

/// Binding for `reactions`.
#[derive(Debug, Clone, Copy)]
pub struct Reactions<'a> {
    client: &'a Client,
}

impl<'a> Reactions<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn create(&self, ref_type: &str, ref_id: u64, emoji: &str) -> Result<Value> {
        self.client
            .post(format!("reactions/{ref_type}/{ref_id}"), &json!({ "body": emoji }))
            .await
    }

    /// Reaction ids appear on items read with `includeReactions=true`.
    pub async fn retrieve(&self, reaction_id: u64) -> Result<Value> {
        self.client
            .get(format!("reactions/{reaction_id}"), &())
            .await
    }

    /// Removes the caller's `emoji` reaction from an item.
    pub async fn delete(&self, ref_type: &str, ref_id: u64, emoji: &str) -> Result<Value> {
        self.client
            .delete(
                format!("reactions/{ref_type}/{ref_id}"),
                Some(&json!({ "body": emoji })),
            )
            .await
    }
}
