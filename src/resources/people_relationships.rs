//! Relationships between a person and their contacts (spouse, partner, ...).

use super::people::ContactPoint;
use super::{require_fields, Extra};
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Filters for [`PeopleRelationships::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationshipFilter {
    #[serde(flatten)]
    pub page: Page,
    #[serde(rename = "personId", skip_serializing_if = "Option::is_none")]
    pub person_id: Option<u64>,
    #[serde(rename = "relatedPersonId", skip_serializing_if = "Option::is_none")]
    pub related_person_id: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`PeopleRelationships::create`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewRelationship {
    #[serde(rename = "personId")]
    pub person_id: u64,
    /// e.g. `Spouse`, `Partner`
    #[serde(rename = "type")]
    pub relationship_type: String,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<ContactPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<ContactPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Value>>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Body for [`PeopleRelationships::update`].
///
/// The owning `personId` cannot change. Sending `emails`, `phones`, or `addresses`
/// overwrites the stored list.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelationshipUpdate {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub relationship_type: Option<String>,
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<ContactPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<ContactPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Value>>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `peopleRelationships`.
#[derive(Debug, Clone, Copy)]
pub struct PeopleRelationships<'a> {
    client: &'a Client,
}

impl<'a> PeopleRelationships<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &RelationshipFilter) -> Result<Value> {
        self.client.get("peopleRelationships", filter).await
    }

    pub async fn create(&self, relationship: &NewRelationship) -> Result<Value> {
        self.client.post("peopleRelationships", relationship).await
    }

    pub async fn retrieve(&self, relationship_id: u64) -> Result<Value> {
        self.client
            .get(format!("peopleRelationships/{relationship_id}"), &())
            .await
    }

    /// Updates a relationship.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](crate::Error::Validation) if `update` sets no field.
    pub async fn update(&self, relationship_id: u64, update: &RelationshipUpdate) -> Result<Value> {
        require_fields(update, "the relationship")?;
        self.client
            .put(format!("peopleRelationships/{relationship_id}"), update)
            .await
    }

    pub async fn delete(&self, relationship_id: u64) -> Result<Value> {
        self.client
            .delete(format!("peopleRelationships/{relationship_id}"), None)
            .await
    }
}
