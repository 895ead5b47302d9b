//! Inbox apps: third-party messaging channels surfaced in the shared inbox.
//!
//! Conversations and messages are identified by the app's own string ids.

use super::Extra;
use crate::{Client, Method, RequestMetadata, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`InboxApps::install`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct InboxAppInstall {
    #[serde(rename = "appName")]
    pub app_name: String,
    #[serde(rename = "appId")]
    pub app_id: String,
    pub username: String,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`InboxApps::add_message`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct InboxMessage {
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
    pub body: String,
    pub sender: String,
    /// ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`InboxApps::add_note`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct InboxNote {
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
    pub body: String,
    #[serde(rename = "createdBy")]
    pub created_by: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// A conversation participant.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Participant {
    #[serde(rename = "conversationId")]
    pub conversation_id: String,
    #[serde(rename = "participantId")]
    pub participant_id: String,
    /// `user` or `person`
    #[serde(rename = "participantType")]
    pub participant_type: String,
}

#[derive(Serialize)]
struct Keyed<'a> {
    #[serde(flatten)]
    key: Extra,
    #[serde(flatten)]
    fields: &'a Extra,
}

impl<'a> Keyed<'a> {
    fn new(name: &str, id: &str, fields: &'a Extra) -> Self {
        let mut key = Extra::new();
        key.insert(name.to_string(), Value::String(id.to_string()));
        Self { key, fields }
    }
}

/// Binding for `inboxApps`.
#[derive(Debug, Clone, Copy)]
pub struct InboxApps<'a> {
    client: &'a Client,
}

impl<'a> InboxApps<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn install(&self, install: &InboxAppInstall) -> Result<Value> {
        self.client.post("inboxApps/install", install).await
    }

    /// Deactivates an installed app.
    pub async fn deactivate(&self, app_id: &str) -> Result<Value> {
        let metadata = RequestMetadata::new(Method::DELETE, "inboxApps/deactivate")
            .with_form_field("appId", app_id);
        self.client.execute(metadata).await
    }

    pub async fn add_message(&self, message: &InboxMessage) -> Result<Value> {
        self.client.post("inboxApps/addMessage", message).await
    }

    pub async fn update_message(&self, message_id: &str, fields: &Extra) -> Result<Value> {
        self.client
            .put(
                "inboxApps/updateMessage",
                &Keyed::new("messageId", message_id, fields),
            )
            .await
    }

    pub async fn add_note(&self, note: &InboxNote) -> Result<Value> {
        self.client.post("inboxApps/addNote", note).await
    }

    /// Updates conversation properties such as its title or status.
    pub async fn update_conversation(&self, conversation_id: &str, fields: &Extra) -> Result<Value> {
        self.client
            .put(
                "inboxApps/updateConversation",
                &Keyed::new("conversationId", conversation_id, fields),
            )
            .await
    }

    pub async fn participants(&self, conversation_id: &str) -> Result<Value> {
        let metadata = RequestMetadata::new(Method::GET, "inboxApps/getParticipants")
            .with_query_param("conversationId", conversation_id);
        self.client.execute(metadata).await
    }

    pub async fn add_participant(&self, participant: &Participant) -> Result<Value> {
        self.client
            .post("inboxApps/addParticipant", participant)
            .await
    }

    /// Removes a participant. The service reads this request as a url-encoded form.
    pub async fn remove_participant(&self, participant: &Participant) -> Result<Value> {
        let metadata = RequestMetadata::new(Method::DELETE, "inboxApps/removeParticipant")
            .with_form_field("conversationId", participant.conversation_id.as_str())
            .with_form_field("participantId", participant.participant_id.as_str())
            .with_form_field("participantType", participant.participant_type.as_str());
        self.client.execute(metadata).await
    }
}
