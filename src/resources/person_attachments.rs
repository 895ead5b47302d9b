//! Files attached to people.

use super::{id_as_string, require_fields, Extra};
use crate::{Client, FilePart, Result};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Body for attachment updates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AttachmentUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sent as a string
    #[serde(
        rename = "categoryId",
        serialize_with = "id_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<u64>,
    #[serde(rename = "fileName", skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `personAttachments`.
#[derive(Debug, Clone, Copy)]
pub struct PersonAttachments<'a> {
    client: &'a Client,
}

impl<'a> PersonAttachments<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Uploads a file to a person as `multipart/form-data`.
    pub async fn upload(&self, person_id: u64, file: FilePart) -> Result<Value> {
        self.client
            .post_multipart(
                "personAttachments",
                [("personId".to_string(), person_id.to_string())],
                file,
            )
            .await
    }

    /// Reads a local file and uploads it under its own file name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attachment`](crate::Error::Attachment) if the file cannot be read.
    pub async fn upload_path(&self, person_id: u64, path: impl AsRef<Path>) -> Result<Value> {
        let file = FilePart::from_path(path).await.inspect_err(|e| {
            tracing::error!(error = %e, person_id, "Could not read attachment");
        })?;
        self.upload(person_id, file).await
    }

    pub async fn retrieve(&self, attachment_id: u64) -> Result<Value> {
        self.client
            .get(format!("personAttachments/{attachment_id}"), &())
            .await
    }

    /// Updates attachment metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if `update` sets no field.
    pub async fn update(&self, attachment_id: u64, update: &AttachmentUpdate) -> Result<Value> {
        require_fields(update, "the attachment")?;
        self.client
            .put(format!("personAttachments/{attachment_id}"), update)
            .await
    }

    pub async fn delete(&self, attachment_id: u64) -> Result<Value> {
        self.client
            .delete(format!("personAttachments/{attachment_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_id_is_a_string() {
        let update = AttachmentUpdate {
            description: Some("Signed offer".into()),
            category_id: Some(12),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"description": "Signed offer", "categoryId": "12"})
        );
    }
}
