//! Helpers for reading webhook callbacks.
//!
//! Follow Up Boss posts a small JSON document per event: the event name, the ids of the
//! affected records and a `uri` to fetch them from. These functions pull the interesting
//! parts out of that document without assuming one exact shape, since callbacks relayed
//! through other systems often wrap or rename fields.
//!
//! ```
//! use follow_up_boss::webhook;
//! use serde_json::json;
//!
//! let payload = json!({
//!     "event": "peopleUpdated",
//!     "resourceIds": [512],
//!     "uri": "https://api.followupboss.com/v1/people?id=512"
//! });
//! assert_eq!(webhook::event_name(&payload), "peopleUpdated");
//! assert_eq!(webhook::extract_person_id(&payload), Some(512));
//! ```

use crate::{Client, Result};
use serde_json::Value;
use url::{form_urlencoded, Url};

const PERSON_ID_PATHS: [&[&str]; 6] = [
    &["personId"],
    &["person", "id"],
    &["data", "personId"],
    &["data", "person", "id"],
    &["person_id"],
    &["data", "person_id"],
];

/// A collection whose records belong to a person and can be named by a webhook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    TextMessages,
    Notes,
    Calls,
    /// Emails are read through the `events` collection.
    Emails,
}

impl Collection {
    /// Maps a collection name (`textMessages`, `notes`, `calls`, `emails`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "textMessages" => Some(Self::TextMessages),
            "notes" => Some(Self::Notes),
            "calls" => Some(Self::Calls),
            "emails" => Some(Self::Emails),
            _ => None,
        }
    }

    /// Maps a creation event (`notesCreated`, ...) to the collection it refers to.
    pub fn from_event(event: &str) -> Option<Self> {
        event.strip_suffix("Created").and_then(Self::from_name)
    }

    /// Fetches one record of this collection.
    pub async fn fetch(self, client: &Client, id: u64) -> Result<Value> {
        match self {
            Self::TextMessages => client.text_messages().retrieve(id).await,
            Self::Notes => client.notes().retrieve(id, &Default::default()).await,
            Self::Calls => client.calls().retrieve(id).await,
            Self::Emails => client.events().retrieve(id).await,
        }
    }
}

/// Returns the event name of a payload: `type`, then `event`, then `data.type`.
///
/// Returns an empty string when none is present or the payload is not an object.
pub fn event_name(payload: &Value) -> String {
    ["type", "event"]
        .iter()
        .filter_map(|key| payload.get(key))
        .chain(payload.get("data").and_then(|data| data.get("type")))
        .find_map(non_empty_string)
        .unwrap_or_default()
}

/// Extracts a person id from a payload without any network access.
///
/// Tries, in order: explicit person id fields (top level or under `data`, camel or snake
/// case), the first of `resourceIds` for `people*` events, then the `id` query parameter
/// of `uri`. Ids may be numbers or numeric strings.
pub fn extract_person_id(payload: &Value) -> Option<u64> {
    let person_id = direct_person_id(payload).or_else(|| uri_person_id(payload));
    if person_id.is_none() {
        log_not_found(payload);
    }
    person_id
}

/// Like [`extract_person_id`], but also follows creation events for text messages, notes,
/// calls and emails: the referenced record is fetched and its `personId` returned.
///
/// # Errors
///
/// Returns the client's error if fetching the referenced record fails.
pub async fn resolve_person_id(client: &Client, payload: &Value) -> Result<Option<u64>> {
    if let Some(person_id) = direct_person_id(payload) {
        return Ok(Some(person_id));
    }

    let event = event_name(payload);
    if let (Some(collection), Some(resource_id)) =
        (Collection::from_event(&event), first_resource_id(payload))
    {
        let resource = collection.fetch(client, resource_id).await?;
        let person_id = resource
            .get("personId")
            .or_else(|| resource.get("person_id"))
            .and_then(as_id);
        if person_id.is_some() {
            tracing::debug!(event = %event, resource_id, "Resolved person id from resource");
            return Ok(person_id);
        }
    }

    let person_id = uri_person_id(payload);
    if person_id.is_none() {
        log_not_found(payload);
    }
    Ok(person_id)
}

fn direct_person_id(payload: &Value) -> Option<u64> {
    if let Some(person_id) = PERSON_ID_PATHS
        .iter()
        .find_map(|path| lookup(payload, path).and_then(as_id))
    {
        return Some(person_id);
    }

    let event = event_name(payload);
    if event.is_empty() || event.starts_with("people") {
        return first_resource_id(payload);
    }
    None
}

fn uri_person_id(payload: &Value) -> Option<u64> {
    let uri = payload.get("uri")?.as_str()?;
    let id = match Url::parse(uri) {
        Ok(url) => query_id(url.query()?),
        // Relative references such as `/v1/people?id=5`
        Err(_) => query_id(uri.split_once('?')?.1),
    }?;
    id.trim().parse().ok()
}

fn query_id(query: &str) -> Option<String> {
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "id")
        .map(|(_, id)| id.into_owned())
}

fn first_resource_id(payload: &Value) -> Option<u64> {
    payload.get("resourceIds")?.as_array()?.first().and_then(as_id)
}

fn lookup<'v>(payload: &'v Value, path: &[&str]) -> Option<&'v Value> {
    path.iter().try_fold(payload, |value, key| value.get(key))
}

fn as_id(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn non_empty_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Null | Value::Bool(false) | Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn log_not_found(payload: &Value) {
    let keys: Vec<&str> = payload
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();
    tracing::warn!(payload_keys = ?keys, "Could not extract person id from webhook payload");
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_name_lookup_order() {
        assert_eq!(event_name(&json!({"type": "a", "event": "b"})), "a");
        assert_eq!(event_name(&json!({"type": "", "event": "b"})), "b");
        assert_eq!(event_name(&json!({"data": {"type": "notesCreated"}})), "notesCreated");
        assert_eq!(event_name(&json!({"resourceIds": [1]})), "");
        assert_eq!(event_name(&json!(["not", "an", "object"])), "");
    }

    #[test]
    fn test_person_id_from_fields() {
        assert_eq!(extract_person_id(&json!({"personId": 12})), Some(12));
        assert_eq!(extract_person_id(&json!({"person": {"id": "34"}})), Some(34));
        assert_eq!(extract_person_id(&json!({"data": {"person": {"id": 56}}})), Some(56));
        assert_eq!(extract_person_id(&json!({"data": {"person_id": " 78 "}})), Some(78));
        assert_eq!(extract_person_id(&json!({"personId": "abc"})), None);
    }

    #[test]
    fn test_resource_ids_only_for_people_events() {
        assert_eq!(
            extract_person_id(&json!({"event": "peopleCreated", "resourceIds": ["90", 91]})),
            Some(90)
        );
        assert_eq!(extract_person_id(&json!({"resourceIds": [7]})), Some(7));
        assert_eq!(
            extract_person_id(&json!({"event": "notesCreated", "resourceIds": [7]})),
            None
        );
    }

    #[test]
    fn test_person_id_from_uri() {
        let payload = json!({
            "event": "notesCreated",
            "resourceIds": [3],
            "uri": "https://api.followupboss.com/v1/notes?id=3&personId=9"
        });
        assert_eq!(extract_person_id(&payload), Some(3));
        assert_eq!(extract_person_id(&json!({"uri": "not a url"})), None);
    }

    #[test]
    fn test_person_id_from_relative_uri() {
        assert_eq!(extract_person_id(&json!({"uri": "/v1/people?id=5"})), Some(5));
        assert_eq!(extract_person_id(&json!({"uri": "people?sort=x&id=%206"})), Some(6));
        assert_eq!(extract_person_id(&json!({"uri": "/v1/people"})), None);
    }

    #[test]
    fn test_collection_from_event() {
        assert_eq!(
            Collection::from_event("textMessagesCreated"),
            Some(Collection::TextMessages)
        );
        assert_eq!(Collection::from_event("emailsCreated"), Some(Collection::Emails));
        assert_eq!(Collection::from_event("notesUpdated"), None);
        assert_eq!(Collection::from_event("peopleCreated"), None);
    }
}
