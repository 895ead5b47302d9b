//! Action plans and the people enrolled in them.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`ActionPlans::list_assignments`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct AssignmentFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "actionPlanId", skip_serializing_if = "Option::is_none")]
    pub action_plan_id: Option<u64>,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    /// e.g. `Running`, `Paused`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`ActionPlans::assign`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct Assignment {
    #[serde(rename = "personId")]
    pub person_id: u64,
    #[serde(rename = "actionPlanId")]
    pub action_plan_id: u64,
    /// e.g. `startDate`
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `actionPlans` and `actionPlansPeople`.
#[derive(Debug, Clone, Copy)]
pub struct ActionPlans<'a> {
    client: &'a Client,
}

impl<'a> ActionPlans<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists the account's action plans.
    pub async fn list(&self, page: &Page) -> Result<Value> {
        self.client.get("actionPlans", page).await
    }

    /// Lists people enrolled in action plans.
    pub async fn list_assignments(&self, filter: &AssignmentFilter) -> Result<Value> {
        self.client.get("actionPlansPeople", filter).await
    }

    /// Enrolls a person in an action plan.
    pub async fn assign(&self, assignment: &Assignment) -> Result<Value> {
        self.client.post("actionPlansPeople", assignment).await
    }

    /// Pauses, resumes, or otherwise updates an enrollment, e.g. `{"status": "Paused"}`.
    pub async fn update_assignment(&self, assignment_id: u64, update: &Extra) -> Result<Value> {
        self.client
            .put(format!("actionPlansPeople/{assignment_id}"), update)
            .await
    }
}
