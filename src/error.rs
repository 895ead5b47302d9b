//! Error types for Follow Up Boss API calls.
//!
//! Every failure surfaced by this crate is an [`Error`]. Failures reported by the
//! remote service, and failures to reach it at all, share one shape: [`ApiError`].
//! Callers can therefore match on `Error::Api(_)` and inspect
//! [`ApiError::status`] to tell an HTTP rejection from a network failure.

use http::StatusCode;
use serde_json::Value;
use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

/// The main error type for this crate.
///
/// # Examples
///
/// ```no_run
/// use follow_up_boss::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder().api_key("fka_xxx").build()?;
///
/// match client.people().retrieve(42, None).await {
///     Ok(person) => println!("Person: {person}"),
///     Err(Error::Api(err)) if err.status.is_some() => {
///         eprintln!("Rejected with {:?}: {}", err.status, err.message);
///     }
///     Err(Error::Api(err)) => eprintln!("Could not reach Follow Up Boss: {}", err.message),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A required credential or setting was missing or malformed when the client was built.
    ///
    /// Raised before any network access and never retried.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The remote service rejected the request, or no response was received.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A binding refused to build a request the service is known to reject.
    ///
    /// Raised before any network access.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The request body could not be serialized to JSON.
    #[error("Failed to serialize request: {0}")]
    SerializationFailed(String),

    /// The base URL or a request path could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A local attachment file could not be read.
    #[error("Failed to read attachment {}: {source}", path.display())]
    Attachment {
        /// The path that was being read
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Returns the HTTP status code if the service answered with one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api(err) => err.status,
            _ => None,
        }
    }

    /// Returns the composed error message for API failures.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Api(err) => Some(&err.message),
            _ => None,
        }
    }

    /// Returns the decoded error body, when the service sent a JSON one.
    pub fn response_data(&self) -> Option<&Value> {
        match self {
            Error::Api(err) => err.response_data.as_ref(),
            _ => None,
        }
    }
}

/// A failure reported by the Follow Up Boss API, or a failure to reach it.
///
/// `status` is `None` for transport-level failures (DNS, refused connection, timeout).
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub struct ApiError {
    /// HTTP status code, absent when no response was received
    pub status: Option<StatusCode>,
    /// Human-readable message
    pub message: String,
    /// The decoded error body, when it was valid JSON
    pub response_data: Option<Value>,
}

impl ApiError {
    /// Builds an error from a non-2xx response.
    ///
    /// When the body is a JSON object, the message is its `title` (falling back to the
    /// raw body) followed by `": "` and the `detail` of every entry in `errors`, joined
    /// with `", "`. Otherwise the raw body is the message and `response_data` is `None`.
    ///
    /// ```
    /// use follow_up_boss::ApiError;
    /// use http::StatusCode;
    ///
    /// let err = ApiError::from_response(
    ///     StatusCode::FORBIDDEN,
    ///     r#"{"title":"Forbidden","errors":[{"detail":"no scope"}]}"#,
    /// );
    /// assert_eq!(err.message, "Forbidden: no scope");
    /// assert_eq!(err.status, Some(StatusCode::FORBIDDEN));
    /// ```
    pub fn from_response(status: StatusCode, body: &str) -> Self {
        let data = match serde_json::from_str::<Value>(body) {
            Ok(data) => data,
            Err(_) => {
                return Self {
                    status: Some(status),
                    message: body.to_string(),
                    response_data: None,
                }
            }
        };

        let mut message = match data.get("title") {
            Some(Value::String(title)) => title.clone(),
            Some(other) => other.to_string(),
            None => body.to_string(),
        };

        if let Some(Value::Array(errors)) = data.get("errors") {
            if !errors.is_empty() {
                let details: Vec<String> = errors.iter().map(render_detail).collect();
                message.push_str(": ");
                message.push_str(&details.join(", "));
            }
        }

        Self {
            status: Some(status),
            message,
            response_data: Some(data),
        }
    }

    /// Builds an error for a request that never produced a response.
    pub fn transport(err: &reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = StdError::source(err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = StdError::source(cause);
        }

        Self {
            status: None,
            message,
            response_data: None,
        }
    }

    /// Returns `true` if no HTTP response was received.
    pub fn is_transport(&self) -> bool {
        self.status.is_none()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "[Status {}] {}", status.as_u16(), self.message),
            None => f.write_str(&self.message),
        }
    }
}

fn render_detail(err: &Value) -> String {
    match err.get("detail") {
        Some(Value::String(detail)) => detail.clone(),
        Some(detail) => detail.to_string(),
        None => match err {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

/// A specialized `Result` type for Follow Up Boss API calls.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_title_and_details_are_joined() {
        let err = ApiError::from_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"title":"Invalid fields","errors":[{"detail":"name is required"},{"detail":"stageId is required"}]}"#,
        );

        assert_eq!(err.message, "Invalid fields: name is required, stageId is required");
        assert_eq!(err.status, Some(StatusCode::UNPROCESSABLE_ENTITY));
        assert_eq!(
            err.response_data.unwrap()["errors"][1]["detail"],
            json!("stageId is required")
        );
    }

    #[test]
    fn test_title_without_errors() {
        let err = ApiError::from_response(StatusCode::NOT_FOUND, r#"{"title":"Not Found"}"#);
        assert_eq!(err.message, "Not Found");
    }

    #[test]
    fn test_empty_errors_list_adds_nothing() {
        let err =
            ApiError::from_response(StatusCode::BAD_REQUEST, r#"{"title":"Bad","errors":[]}"#);
        assert_eq!(err.message, "Bad");
    }

    #[test]
    fn test_missing_title_falls_back_to_body() {
        let body = r#"{"errorMessage":"nope"}"#;
        let err = ApiError::from_response(StatusCode::BAD_REQUEST, body);
        assert_eq!(err.message, body);
        assert!(err.response_data.is_some());
    }

    #[test]
    fn test_error_without_detail_is_rendered() {
        let err = ApiError::from_response(
            StatusCode::BAD_REQUEST,
            r#"{"title":"Bad","errors":[{"code":7},"plain"]}"#,
        );
        assert_eq!(err.message, r#"Bad: {"code":7}, plain"#);
    }

    #[test]
    fn test_non_json_body_is_raw_text() {
        let err = ApiError::from_response(StatusCode::BAD_GATEWAY, "<html>upstream</html>");
        assert_eq!(err.message, "<html>upstream</html>");
        assert!(err.response_data.is_none());
    }

    #[test]
    fn test_display_includes_status() {
        let err = ApiError::from_response(
            StatusCode::FORBIDDEN,
            r#"{"title":"Forbidden","errors":[{"detail":"no scope"}]}"#,
        );
        assert_eq!(err.to_string(), "[Status 403] Forbidden: no scope");

        let transport = ApiError {
            status: None,
            message: "connection refused".to_string(),
            response_data: None,
        };
        assert!(transport.is_transport());
        assert_eq!(transport.to_string(), "connection refused");
    }

    #[test]
    fn test_error_accessors() {
        let err: Error = ApiError::from_response(StatusCode::FORBIDDEN, "denied").into();
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
        assert_eq!(err.message(), Some("denied"));
        assert!(err.response_data().is_none());

        let err = Error::Validation("missing options".to_string());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Validation error: missing options");
    }
}
