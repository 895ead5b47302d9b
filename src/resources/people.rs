//! People: contacts and leads.

use super::{Extra, Fields};
use crate::query::Page;
use crate::{Client, Error, Result};
use serde::Serialize;
use serde_json::{json, Value};

/// Page size used by [`People::list_by_list_id`] when none is given.
pub const DEFAULT_LIST_PAGE_SIZE: u32 = 100;

/// Filters for [`People::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PeopleFilter {
    #[serde(flatten)]
    pub page: Page,
    /// Comma-separated list of fields to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Smart list id; switches the endpoint to cursor pagination
    #[serde(rename = "listId", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<u64>,
    /// Cursor from a previous page's `_metadata.next`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// An email address, phone number, or similar typed value on a person.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContactPoint {
    pub value: String,
    /// e.g. `work`, `home`, `mobile`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(rename = "isPrimary", skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

impl ContactPoint {
    /// Creates an untyped contact value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    /// Sets the value's type.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Body for [`People::create`] and [`People::update`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct PersonFields {
    #[serde(rename = "firstName", skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName", skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(rename = "sourceUrl", skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "assignedUserId", skip_serializing_if = "Option::is_none")]
    pub assigned_user_id: Option<u64>,
    #[serde(rename = "assignedLenderId", skip_serializing_if = "Option::is_none")]
    pub assigned_lender_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Replaces existing emails when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emails: Option<Vec<ContactPoint>>,
    /// Replaces existing phones when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phones: Option<Vec<ContactPoint>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub addresses: Option<Vec<Value>>,
    /// Replaces existing tags when present; see [`People::add_tags`] to merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Query for [`People::check_duplicate`]. At least one of `email` and `phone` is required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DuplicateQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// How [`People::add_tags`] combines new tags with existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOptions {
    /// Keep the person's current tags and append the new ones. When `false`, the given
    /// tags replace the current ones.
    pub merge: bool,
    /// Treat `Tag` and `tag` as different tags when de-duplicating.
    pub case_sensitive: bool,
}

impl Default for TagOptions {
    fn default() -> Self {
        Self {
            merge: true,
            case_sensitive: true,
        }
    }
}

/// Binding for `people`.
#[derive(Debug, Clone, Copy)]
pub struct People<'a> {
    client: &'a Client,
}

impl<'a> People<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists people.
    ///
    /// The result always has a `people` array, a `count`, and a `_metadata` object, even
    /// when the service omits them. `_metadata` is filled with the requested `limit` and
    /// `listId` if the service did not echo them.
    pub async fn list(&self, filter: &PeopleFilter) -> Result<Value> {
        let mut response = self.client.get("people", filter).await?;
        normalize_list(&mut response, filter);
        Ok(response)
    }

    /// Creates a person.
    pub async fn create(&self, person: &PersonFields) -> Result<Value> {
        self.client.post("people", person).await
    }

    /// Fetches one person, optionally limited to a comma-separated set of fields.
    pub async fn retrieve(&self, person_id: u64, fields: Option<&str>) -> Result<Value> {
        self.client
            .get(format!("people/{person_id}"), &Fields { fields })
            .await
    }

    /// Updates a person. Array fields replace the existing values.
    pub async fn update(&self, person_id: u64, update: &PersonFields) -> Result<Value> {
        self.client.put(format!("people/{person_id}"), update).await
    }

    /// Deletes a person.
    pub async fn delete(&self, person_id: u64) -> Result<Value> {
        self.client.delete(format!("people/{person_id}"), None).await
    }

    /// Looks for existing people matching an email or phone.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if neither `email` nor `phone` is set.
    pub async fn check_duplicate(&self, query: &DuplicateQuery) -> Result<Value> {
        if query.email.is_none() && query.phone.is_none() {
            return Err(Error::Validation(
                "Query must include at least 'email' or 'phone' to check for duplicates"
                    .to_string(),
            ));
        }
        self.client.get("people/checkDuplicate", query).await
    }

    /// Lists people waiting in the unclaimed queue.
    pub async fn list_unclaimed(&self, page: &Page) -> Result<Value> {
        self.client.get("people/unclaimed", page).await
    }

    /// Claims an unclaimed person, for `user_id` or for the API key's owner.
    pub async fn claim(&self, person_id: u64, user_id: Option<u64>) -> Result<Value> {
        let mut body = json!({ "personId": person_id });
        if let Some(user_id) = user_id {
            body["userId"] = json!(user_id);
        }
        self.client.post("people/claim", &body).await
    }

    /// Removes a person from the unclaimed queue.
    pub async fn ignore_unclaimed(&self, person_id: u64) -> Result<Value> {
        self.client
            .post("people/ignoreUnclaimed", &json!({ "personId": person_id }))
            .await
    }

    /// Adds tags to a person through `PUT /people/{id}`.
    ///
    /// Tags are trimmed and blank ones dropped. In merge mode the person is fetched first
    /// and the new tags are appended after the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if no non-blank tag is given.
    pub async fn add_tags<S: AsRef<str>>(
        &self,
        person_id: u64,
        tags: &[S],
        options: TagOptions,
    ) -> Result<Value> {
        let provided: Vec<String> = tags
            .iter()
            .map(|tag| tag.as_ref().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        if provided.is_empty() {
            return Err(Error::Validation(
                "'tags' must contain at least one non-empty tag".to_string(),
            ));
        }

        let existing = if options.merge {
            let person = self.retrieve(person_id, None).await?;
            existing_tags(&person)
        } else {
            Vec::new()
        };

        let tags = combine_tags(existing, provided, options.case_sensitive);
        tracing::debug!(person_id, tags = tags.len(), "Updating person tags");

        self.client
            .put(format!("people/{person_id}"), &json!({ "tags": tags }))
            .await
    }

    /// Fetches one page of a smart list's members.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if `list_id` is not positive.
    pub async fn list_by_list_id(
        &self,
        list_id: i64,
        limit: Option<u32>,
        next: Option<&str>,
    ) -> Result<Value> {
        let list_id = u64::try_from(list_id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| Error::Validation("list_id must be a positive integer".to_string()))?;

        let filter = PeopleFilter {
            page: Page::new().limit(limit.unwrap_or(DEFAULT_LIST_PAGE_SIZE)),
            list_id: Some(list_id),
            next: next.map(str::to_string),
            ..Default::default()
        };
        self.client.get("people", &filter).await
    }
}

fn normalize_list(response: &mut Value, filter: &PeopleFilter) {
    let Value::Object(map) = response else {
        return;
    };

    let people = map
        .entry("people")
        .or_insert_with(|| Value::Array(Vec::new()));
    let count = people.as_array().map_or(0, Vec::len);
    map.entry("count").or_insert_with(|| json!(count));

    let meta = map
        .entry("_metadata")
        .or_insert_with(|| Value::Object(Default::default()));
    if let Value::Object(meta) = meta {
        if let Some(limit) = filter.page.limit {
            meta.entry("limit").or_insert_with(|| json!(limit));
        }
        if let Some(list_id) = filter.list_id {
            meta.entry("listId").or_insert_with(|| json!(list_id));
        }
    }
}

fn existing_tags(person: &Value) -> Vec<String> {
    person
        .get("tags")
        .and_then(Value::as_array)
        .map(|tags| {
            tags.iter()
                .map(|tag| match tag {
                    Value::String(s) => s.trim().to_string(),
                    other => other.to_string(),
                })
                .filter(|tag| !tag.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Appends `provided` to `existing`, skipping tags already present. `existing` is kept
/// as-is, including its order and casing.
fn combine_tags(existing: Vec<String>, provided: Vec<String>, case_sensitive: bool) -> Vec<String> {
    let key = |tag: &str| {
        if case_sensitive {
            tag.to_string()
        } else {
            tag.to_lowercase()
        }
    };

    let mut seen: std::collections::HashSet<String> = existing.iter().map(|t| key(t)).collect();
    let mut tags = existing;
    for tag in provided {
        if seen.insert(key(&tag)) {
            tags.push(tag);
        }
    }
    tags
}
