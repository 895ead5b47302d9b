//! Deals moving through pipelines.

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`Deals::list`].
///
/// The deals endpoint reads its id filters from snake_case keys.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DealFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    /// e.g. `Active`, `Won`, `Lost`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`Deals::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDeal {
    pub name: String,
    #[serde(rename = "stageId")]
    pub stage_id: u64,
    #[serde(rename = "pipelineId", skip_serializing_if = "Option::is_none")]
    pub pipeline_id: Option<u64>,
    /// Owning user; the service reads it from `userId`
    #[serde(rename = "userId", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<u64>,
    /// People attached to the deal
    #[serde(rename = "peopleIds", skip_serializing_if = "Vec::is_empty")]
    pub people_ids: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// `YYYY-MM-DD`
    #[serde(rename = "projectedCloseDate", skip_serializing_if = "Option::is_none")]
    pub close_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Commission fields go here as top-level keys, e.g. `commissionValue`
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `deals`.
#[derive(Debug, Clone, Copy)]
pub struct Deals<'a> {
    client: &'a Client,
}

impl<'a> Deals<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &DealFilter) -> Result<Value> {
        self.client.get("deals", filter).await
    }

    pub async fn create(&self, deal: &NewDeal) -> Result<Value> {
        self.client.post("deals", deal).await
    }

    pub async fn retrieve(&self, deal_id: u64) -> Result<Value> {
        self.client.get(format!("deals/{deal_id}"), &()).await
    }

    /// Updates a deal with camelCase wire fields, e.g. `{"stageId": 25, "price": 125000}`.
    pub async fn update(&self, deal_id: u64, update: &Extra) -> Result<Value> {
        self.client.put(format!("deals/{deal_id}"), update).await
    }

    pub async fn delete(&self, deal_id: u64) -> Result<Value> {
        self.client.delete(format!("deals/{deal_id}"), None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::to_query_pairs;
    use serde_json::json;

    #[test]
    fn test_list_filter_uses_snake_case_keys() {
        let filter = DealFilter {
            pipeline_id: Some(1),
            stage_id: Some(2),
            person_id: Some(3),
            ..Default::default()
        };
        let keys: Vec<String> = to_query_pairs(&filter)
            .unwrap()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, ["pipeline_id", "stage_id", "person_id"]);
    }

    #[test]
    fn test_owner_and_close_date_wire_names() {
        let mut extra = Extra::new();
        extra.insert("commissionValue".into(), json!(13500.0));
        let deal = NewDeal {
            name: "123 Main".into(),
            stage_id: 7,
            owner_id: Some(4),
            close_date: Some("2024-09-30".into()),
            extra,
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&deal).unwrap(),
            json!({
                "name": "123 Main",
                "stageId": 7,
                "userId": 4,
                "projectedCloseDate": "2024-09-30",
                "commissionValue": 13500.0
            })
        );
    }
}
