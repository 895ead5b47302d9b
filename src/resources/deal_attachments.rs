//! Files attached to deals. The service only accepts files linked by URI; direct uploads
//! are rejected.

use super::person_attachments::AttachmentUpdate;
use super::{id_as_string, require_fields};
use crate::{Client, Error, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`DealAttachments::link`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct DealAttachmentLink {
    #[serde(rename = "dealId")]
    pub deal_id: u64,
    /// Location of a file stored outside Follow Up Boss
    pub uri: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "categoryId",
        serialize_with = "id_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub category_id: Option<u64>,
}

/// Binding for `dealAttachments`.
#[derive(Debug, Clone, Copy)]
pub struct DealAttachments<'a> {
    client: &'a Client,
}

impl<'a> DealAttachments<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Attaches an externally hosted file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `uri` is blank; the service would treat such a
    /// request as an upload and refuse it.
    pub async fn link(&self, link: &DealAttachmentLink) -> Result<Value> {
        if link.uri.trim().is_empty() {
            return Err(Error::Validation("A uri is required to link a deal attachment".to_string()));
        }
        self.client.post("dealAttachments", link).await
    }

    pub async fn retrieve(&self, attachment_id: u64) -> Result<Value> {
        self.client
            .get(format!("dealAttachments/{attachment_id}"), &())
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
            .put(format!("dealAttachments/{attachment_id}"), update)
            .await
    }

    pub async fn delete(&self, attachment_id: u64) -> Result<Value> {
        self.client
            .delete(format!("dealAttachments/{attachment_id}"), None)
            .await
    }
}
