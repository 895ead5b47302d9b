//! Successful responses.
//!
//! [`Client::execute`](crate::Client::execute) hands back only the decoded JSON. When the
//! status code, headers, or timing matter, [`Client::send`](crate::Client::send) returns
//! the full [`Response`].

use http::{HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// A successful (2xx) HTTP response.
///
/// # Examples
///
/// ```no_run
/// use follow_up_boss::{Client, RequestMetadata};
/// use http::Method;
///
/// # async fn example() -> Result<(), follow_up_boss::Error> {
/// let client = Client::builder().api_key("fka_xxx").build()?;
///
/// let response = client.send(RequestMetadata::new(Method::GET, "/identity")).await?;
/// println!("Status: {}", response.status);
/// println!("Request took {:?}", response.latency);
/// println!("Account: {}", response.data["account"]["name"]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Response<T = Value> {
    /// The decoded response body. An empty body decodes to an empty JSON object.
    pub data: T,

    /// The HTTP status code of the response.
    pub status: StatusCode,

    /// The response headers.
    pub headers: HeaderMap,

    /// Time from sending the request until the body was read.
    pub latency: Duration,
}

impl<T> Response<T> {
    /// Creates a new `Response`.
    pub fn new(data: T, status: StatusCode, headers: HeaderMap, latency: Duration) -> Self {
        Self {
            data,
            status,
            headers,
            latency,
        }
    }

    /// Maps the response data to a different type using the provided function.
    ///
    /// ```
    /// # use follow_up_boss::Response;
    /// # use http::{HeaderMap, StatusCode};
    /// # use std::time::Duration;
    /// let response = Response::new(42, StatusCode::OK, HeaderMap::new(), Duration::from_millis(5));
    /// let string_response = response.map(|n| n.to_string());
    /// assert_eq!(string_response.data, "42");
    /// ```
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        Response {
            data: f(self.data),
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        }
    }

    /// Returns a reference to a header value by name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)?.to_str().ok()
    }
}

impl Response<Value> {
    /// Deserializes the body into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationFailed`](crate::Error::SerializationFailed) when the
    /// body does not match `U`.
    pub fn into_typed<U>(self) -> crate::Result<Response<U>>
    where
        U: DeserializeOwned,
    {
        let data = serde_json::from_value(self.data)
            .map_err(|e| crate::Error::SerializationFailed(e.to_string()))?;
        Ok(Response {
            data,
            status: self.status,
            headers: self.headers,
            latency: self.latency,
        })
    }
}

impl<T> AsRef<T> for Response<T> {
    fn as_ref(&self) -> &T {
        &self.data
    }
}

impl<T> std::ops::Deref for Response<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Identity {
        account: Account,
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Account {
        id: u64,
        name: String,
    }

    #[test]
    fn test_into_typed() {
        let response = Response::new(
            json!({"account": {"id": 1, "name": "Acme"}}),
            StatusCode::OK,
            HeaderMap::new(),
            Duration::from_millis(3),
        );

        let typed = response.into_typed::<Identity>().unwrap();
        assert_eq!(typed.data.account.name, "Acme");
        assert_eq!(typed.status, StatusCode::OK);
    }

    #[test]
    fn test_into_typed_mismatch() {
        let response = Response::new(json!([1, 2]), StatusCode::OK, HeaderMap::new(), Duration::ZERO);
        assert!(response.into_typed::<Identity>().is_err());
    }

    #[test]
    fn test_header_lookup() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("abc"));
        let response = Response::new((), StatusCode::NO_CONTENT, headers, Duration::ZERO);

        assert_eq!(response.header("x-request-id"), Some("abc"));
        assert_eq!(response.header("missing"), None);
    }
}
