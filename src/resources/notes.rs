//! Notes attached to people.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`Notes::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub note_type: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`Notes::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewNote {
    #[serde(rename = "personId")]
    pub person_id: u64,
    pub subject: String,
    pub body: String,
    #[serde(rename = "isHtml", skip_serializing_if = "Option::is_none")]
    pub is_html: Option<bool>,
    #[serde(rename = "typeId", skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`Notes::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NoteUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(rename = "isHtml", skip_serializing_if = "Option::is_none")]
    pub is_html: Option<bool>,
}

impl NoteUpdate {
    fn is_empty(&self) -> bool {
        self.subject.is_none() && self.body.is_none() && self.is_html.is_none()
    }
}

/// Binding for `notes`.
#[derive(Debug, Clone, Copy)]
pub struct Notes<'a> {
    client: &'a Client,
}

impl<'a> Notes<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &NoteFilter) -> Result<Value> {
        self.client.get("notes", filter).await
    }

    pub async fn create(&self, note: &NewNote) -> Result<Value> {
        self.client.post("notes", note).await
    }

    /// Fetches a note. `query` takes options such as `includeReactions`.
    pub async fn retrieve(&self, note_id: u64, query: &Extra) -> Result<Value> {
        self.client.get(format!("notes/{note_id}"), query).await
    }

    /// Updates a note. An update with no fields sends nothing and returns the current note.
    pub async fn update(&self, note_id: u64, update: &NoteUpdate) -> Result<Value> {
        if update.is_empty() {
            return self.retrieve(note_id, &Extra::new()).await;
        }
        self.client.put(format!("notes/{note_id}"), update).await
    }

    pub async fn delete(&self, note_id: u64) -> Result<Value> {
        self.client.delete(format!("notes/{note_id}"), None).await
    }
}
