//! Outcomes recorded against appointments (showed, no-show, ...).

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Body for [`AppointmentOutcomes::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAppointmentOutcome {
    pub name: String,
    /// Whether this outcome counts the appointment as successful
    #[serde(rename = "isSuccessful", skip_serializing_if = "Option::is_none")]
    pub is_successful: Option<bool>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `appointmentOutcomes`.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentOutcomes<'a> {
    client: &'a Client,
}

impl<'a> AppointmentOutcomes<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("appointmentOutcomes", page).await
    }

    pub async fn create(&self, outcome: &NewAppointmentOutcome) -> Result<Value> {
        self.client.post("appointmentOutcomes", outcome).await
    }

    pub async fn retrieve(&self, outcome_id: u64) -> Result<Value> {
        self.client
            .get(format!("appointmentOutcomes/{outcome_id}"), &())
            .await
    }

    pub async fn update(&self, outcome_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("appointmentOutcomes/{outcome_id}"), update)
            .await
    }

    /// Deletes an outcome. Appointments that used it are moved to `assign_outcome_id`.
    pub async fn delete(&self, outcome_id: u64, assign_outcome_id: u64) -> Result<Value> {
        self.client
            .delete(
                format!("appointmentOutcomes/{outcome_id}"),
                Some(&json!({ "assignOutcomeId": assign_outcome_id })),
            )
            .await
    }
}
