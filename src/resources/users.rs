//! Users of the account (agents, lenders, admins).

use super::Extra;
use crate::query::Page;
use crate::{Client, Result};
use serde::Serialize;
use serde_json::Value;

/// Query for [`Users::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFilter {
    #[serde(flatten)]
    pub page: Page,
    /// e.g. `Agent`, `Broker`, `Lender`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten, serialize_with = "super::skip_nulls")]
    pub extra: Extra,
}

/// Binding for `users`.
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    client: &'a Client,
}

impl<'a> Users<'a> {
    /// Creates the binding.
    pub fn new(client: &'a Client) -> Self {
        Self { client }
    }

    pub async fn list(&self, filter: &UserFilter) -> Result<Value> {
        self.client.get("users", filter).await
    }

    pub async fn retrieve(&self, user_id: u64) -> Result<Value> {
        self.client.get(format!("users/{user_id}"), &()).await
    }

    /// Deletes a user. This cannot be undone.
    pub async fn delete(&self, user_id: u64) -> Result<Value> {
        tracing::warn!(user_id, "Deleting user");
        self.client.delete(format!("users/{user_id}"), None).await
    }

    /// Finds a user by email address, ignoring case.
    ///
    /// Only the first page of [`Users::list`] is searched. Returns `Ok(None)` for a blank
    /// address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Value>> {
        let email = email.trim();
        if email.is_empty() {
            return Ok(None);
        }

        let users = self.list(&UserFilter::default()).await?;
        Ok(find_user(&users, email).cloned())
    }

    /// Returns the id of the user with this email address, if any.
    pub async fn id_by_email(&self, email: &str) -> Result<Option<u64>> {
        let user = self.find_by_email(email).await?;
        Ok(user.as_ref().and_then(|u| u.get("id")).and_then(Value::as_u64))
    }
}

fn find_user<'v>(response: &'v Value, email: &str) -> Option<&'v Value> {
    response.get("users")?.as_array()?.iter().find(|user| {
        user.get("email")
            .and_then(Value::as_str)
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(email))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_user_ignores_case() {
        let response = json!({
            "users": [
                {"id": 1, "email": "owner@example.com"},
                {"id": 7, "email": "Agent@Example.com"},
                {"id": 9}
            ]
        });

        assert_eq!(find_user(&response, "agent@example.com").unwrap()["id"], 7);
        assert!(find_user(&response, "nobody@example.com").is_none());
        assert!(find_user(&json!({"_metadata": {}}), "owner@example.com").is_none());
    }
}
