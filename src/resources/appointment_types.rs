use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Body for [`AppointmentTypes::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewAppointmentType {
    pub name: String,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `appointmentTypes`.
#[derive(Debug, Clone, Copy)]
pub struct AppointmentTypes<'a> {
    client: &'a Client,
}

impl<'a> AppointmentTypes<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("appointmentTypes", page).await
    }

    pub async fn create(&self, appointment_type: &NewAppointmentType) -> Result<Value> {
        self.client.post("appointmentTypes", appointment_type).await
    }

    pub async fn retrieve(&self, type_id: u64) -> Result<Value> {
        self.client
            .get(format!("appointmentTypes/{type_id}"), &())
            .await
    }

    pub async fn update(&self, type_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("appointmentTypes/{type_id}"), update)
            .await
    }

    pub async fn delete(&self, type_id: u64) -> Result<Value> {
        self.client
            .delete(format!("appointmentTypes/{type_id}"), None)
            .await
    }
}
