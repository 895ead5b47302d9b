//! Tasks assigned to users.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`Tasks::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct TaskFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    /// User id
    #[serde(rename = "assignedTo", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,
    /// `incomplete` or `complete`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(rename = "dueDateFrom", skip_serializing_if = "Option::is_none")]
    pub due_date_from: Option<String>,
    /// `YYYY-MM-DD`
    #[serde(rename = "dueDateTo", skip_serializing_if = "Option::is_none")]
    pub due_date_to: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`Tasks::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewTask {
    pub name: String,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    /// User the task is assigned to
    #[serde(rename = "assigneeId", skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<u64>,
    /// `YYYY-MM-DD`
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    /// Free text; the service stores it as `notes`
    #[serde(rename = "notes", skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `tasks`.
#[derive(Debug, Clone, Copy)]
pub struct Tasks<'a> {
    client: &'a Client,
}

impl<'a> Tasks<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &TaskFilter) -> Result<Value> {
        self.client.get("tasks", filter).await
    }

    /// Creates a task. A `description` key in `extra` is dropped; the service rejects it.
    pub async fn create(&self, task: &NewTask) -> Result<Value> {
        if task.extra.contains_key("description") {
            let mut task = task.clone();
            task.extra.remove("description");
            return self.client.post("tasks", &task).await;
        }
        self.client.post("tasks", task).await
    }

    pub async fn retrieve(&self, task_id: u64) -> Result<Value> {
        self.client.get(format!("tasks/{task_id}"), &()).await
    }

    /// Updates a task with raw wire fields such as `name`, `isCompleted`, or `dueDate`.
    pub async fn update(&self, task_id: u64, update: &Extra) -> Result<Value> {
        self.client.put(format!("tasks/{task_id}"), update).await
    }

    pub async fn delete(&self, task_id: u64) -> Result<Value> {
        self.client.delete(format!("tasks/{task_id}"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_task_wire_names() {
        let task = NewTask {
            name: "Call".into(),
            person_id: Some(1),
            assigned_to: Some(2),
            due_date: Some("2024-05-01".into()),
            details: Some("ask about financing".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&task).unwrap(),
            json!({
                "name": "Call",
                "personId": 1,
                "assigneeId": 2,
                "dueDate": "2024-05-01",
                "notes": "ask about financing"
            })
        );
    }
}
