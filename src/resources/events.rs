//! Lead events: inquiries, registrations, property views.
//!
//! Posting an event is also the preferred way to create or update a person, since it runs
//! the account's lead-flow rules.

use super::people::ContactPoint;
use super::Extra;
use crate::query::{to_query_pairs, Page};
use crate::{Client, Error, Method, RequestMetadata, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`Events::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    /// One type is sent as `type`, several as repeated `type[]`
    #[serde(skip)]
    pub types: Vec<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

impl EventFilter {
    fn query_pairs(&self) -> Result<Vec<(String, String)>> {
        let mut pairs = to_query_pairs(self)?;
        match self.types.as_slice() {
            [] => {}
            [single] => pairs.push(("type".to_string(), single.clone())),
            many => pairs.extend(many.iter().map(|t| ("type[]".to_string(), t.clone()))),
        }
        Ok(pairs)
    }
}

/// The person an event is about: an existing id, or details to match or create.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventPerson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<ContactPoint>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<ContactPoint>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

impl EventPerson {
    /// True when nothing identifies or describes the person.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.first_name.is_none()
            && self.last_name.is_none()
            && self.emails.is_empty()
            && self.phones.is_empty()
            && self.extra.values().all(Value::is_null)
    }

    /// Refers to an existing person.
    pub fn existing(id: u64) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }

    /// Adds an email of unknown type.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.emails.push(ContactPoint::new(email).kind("unknown"));
        self
    }

    /// Adds a phone number of unknown type.
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phones.push(ContactPoint::new(phone).kind("unknown"));
        self
    }
}

/// Property details for listing-related events.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventProperty {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(rename = "mlsNumber", skip_serializing_if = "Option::is_none")]
    pub mls_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// UTM-style campaign attribution.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventCampaign {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Body for [`Events::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewEvent {
    /// e.g. `Registration`, `Property Inquiry`; left out of the body when empty
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub event_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person: Option<EventPerson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "sourceUrl", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property: Option<EventProperty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<EventCampaign>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `events`.
#[derive(Debug, Clone, Copy)]
pub struct Events<'a> {
    client: &'a Client,
}

impl<'a> Events<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &EventFilter) -> Result<Value> {
        let metadata =
            RequestMetadata::new(Method::GET, "events").with_query_params(filter.query_pairs()?);
        self.client.execute(metadata).await
    }

    /// Posts an event. The response is usually the person the event was attached to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if no person is given, or the person is empty.
    pub async fn create(&self, event: &NewEvent) -> Result<Value> {
        if event.person.as_ref().map_or(true, EventPerson::is_empty) {
            return Err(Error::Validation(
                "Person information must be provided when creating an event".to_string(),
            ));
        }
        self.client.post("events", event).await
    }

    pub async fn retrieve(&self, event_id: u64) -> Result<Value> {
        self.client.get(format!("events/{event_id}"), &()).await
    }
}
