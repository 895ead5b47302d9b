//! Calendar appointments.

use super::Extra;
use crate::query::Page;
use crate::{Client, Method, RequestMetadata, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`Appointments::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AppointmentFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Start and end of an appointment, as ISO 8601 timestamps.
#[derive(Debug, Clone, Default, Serialize)]
pub struct When {
    pub start: String,
    pub end: String,
}

/// A participant of a booked appointment, e.g. `{"id": 123, "type": "person"}`.
#[derive(Debug, Clone, Serialize)]
pub struct Invitee {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl Invitee {
    /// Invites a person.
    pub fn person(id: u64) -> Self {
        Self {
            id,
            kind: "person".to_string(),
        }
    }

    /// Invites a user.
    pub fn user(id: u64) -> Self {
        Self {
            id,
            kind: "user".to_string(),
        }
    }
}

/// Body for [`Appointments::book`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Booking {
    pub title: String,
    pub when: When,
    #[serde(rename = "appointmentTypeId")]
    pub appointment_type_id: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<Invitee>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Hosting user
    #[serde(rename = "hostId", skip_serializing_if = "Option::is_none")]
    pub host_user_id: Option<u64>,
}

/// Binding for `appointments`.
#[derive(Debug, Clone, Copy)]
pub struct Appointments<'a> {
    client: &'a Client,
}

impl<'a> Appointments<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &AppointmentFilter) -> Result<Value> {
        self.client.get("appointments", filter).await
    }

    /// Creates an appointment from raw wire fields. `query` carries options such as
    /// `sendInvitations`.
    pub async fn create(&self, appointment: &Extra, query: &Extra) -> Result<Value> {
        let metadata = RequestMetadata::new(Method::POST, "appointments")
            .with_query_params(crate::query::to_query_pairs(query)?)
            .with_json(appointment)?;
        self.client.execute(metadata).await
    }

    /// Books an appointment with a typed body.
    pub async fn book(&self, booking: &Booking) -> Result<Value> {
        self.client.post("appointments", booking).await
    }

    pub async fn retrieve(&self, appointment_id: u64) -> Result<Value> {
        self.client
            .get(format!("appointments/{appointment_id}"), &())
            .await
    }

    pub async fn update(&self, appointment_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("appointments/{appointment_id}"), update)
            .await
    }

    pub async fn delete(&self, appointment_id: u64) -> Result<Value> {
        self.client
            .delete(format!("appointments/{appointment_id}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_booking_body() {
        let booking = Booking {
            title: "Showing".into(),
            when: When {
                start: "2024-05-01T15:00:00Z".into(),
                end: "2024-05-01T16:00:00Z".into(),
            },
            appointment_type_id: 2,
            contacts: vec![Invitee::person(123)],
            host_user_id: Some(5),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&booking).unwrap(),
            json!({
                "title": "Showing",
                "when": {"start": "2024-05-01T15:00:00Z", "end": "2024-05-01T16:00:00Z"},
                "appointmentTypeId": 2,
                "contacts": [{"id": 123, "type": "person"}],
                "hostId": 5
            })
        );
    }
}
