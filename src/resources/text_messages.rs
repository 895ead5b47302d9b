//! Text message logs.
//!
//! Logging a message does not send it. The service only accepts numbers that are already
//! on the person's profile, so [`TextMessages::phone_numbers`] and friends help pick one.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`TextMessages::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTextMessage {
    #[serde(rename = "personId")]
    pub person_id: u64,
    pub message: String,
    #[serde(rename = "toNumber")]
    pub to_number: String,
    #[serde(rename = "fromNumber", skip_serializing_if = "Option::is_none")]
    pub from_number: Option<String>,
    #[serde(rename = "isIncoming")]
    pub is_incoming: bool,
    #[serde(rename = "contactId", skip_serializing_if = "Option::is_none")]
    pub contact_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

#[derive(Serialize)]
struct MessageFilter<'a> {
    #[serde(rename = "personId")]
    person_id: u64,
    #[serde(flatten)]
    page: &'a Page,
}

/// Binding for `textMessages`.
#[derive(Debug, Clone, Copy)]
pub struct TextMessages<'a> {
    client: &'a Client,
}

impl<'a> TextMessages<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the messages logged for a person.
    pub async fn list(&self, person_id: u64, page: &Page) -> Result<Value> {
        self.client
            .get("textMessages", &MessageFilter { person_id, page })
            .await
    }

    pub async fn create(&self, message: &NewTextMessage) -> Result<Value> {
        self.client.post("textMessages", message).await
    }

    pub async fn retrieve(&self, message_id: u64) -> Result<Value> {
        self.client
            .get(format!("textMessages/{message_id}"), &())
            .await
    }

    /// Returns the `phones` entries of a person's profile.
    pub async fn phone_numbers(&self, person_id: u64) -> Result<Vec<Value>> {
        let person = self.client.people().retrieve(person_id, None).await?;
        Ok(match person.get("phones") {
            Some(Value::Array(phones)) => phones.clone(),
            _ => Vec::new(),
        })
    }

    /// Returns the person's phone marked `isPrimary`, if any.
    pub async fn primary_phone(&self, person_id: u64) -> Result<Option<String>> {
        let phones = self.phone_numbers(person_id).await?;
        Ok(primary_phone(&phones))
    }

    /// Returns `true` if `number` appears on the person's profile, ignoring formatting.
    pub async fn has_phone_number(&self, person_id: u64, number: &str) -> Result<bool> {
        let phones = self.phone_numbers(person_id).await?;
        Ok(contains_number(&phones, number))
    }
}

fn primary_phone(phones: &[Value]) -> Option<String> {
    phones
        .iter()
        .find(|phone| phone.get("isPrimary").and_then(Value::as_bool) == Some(true))
        .and_then(|phone| phone.get("value"))
        .and_then(Value::as_str)
        .map(str::to_string)
}

fn digits(number: &str) -> String {
    number.chars().filter(char::is_ascii_digit).collect()
}

fn contains_number(phones: &[Value], number: &str) -> bool {
    let wanted = digits(number);
    if wanted.is_empty() {
        return false;
    }
    phones
        .iter()
        .filter_map(|phone| phone.get("value").and_then(Value::as_str))
        .any(|value| digits(value).contains(&wanted))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn phones() -> Vec<Value> {
        vec![
            json!({"value": "(801) 584-9998", "type": "mobile"}),
            json!({"value": "555-123-4567", "type": "work", "isPrimary": true}),
        ]
    }

    #[test]
    fn test_primary_phone() {
        assert_eq!(primary_phone(&phones()), Some("555-123-4567".to_string()));
        assert_eq!(primary_phone(&phones()[..1]), None);
    }

    #[test]
    fn test_number_matching_ignores_formatting() {
        assert!(contains_number(&phones(), "8015849998"));
        assert!(!contains_number(&phones(), "+1 555 123 4567"));
        assert!(contains_number(&phones(), "555 123 4567"));
        assert!(!contains_number(&phones(), ""));
    }
}
