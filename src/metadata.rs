//! Request descriptors.
//!
//! A [`RequestMetadata`] describes exactly one call: method, path, query pairs, and at
//! most one kind of body. It is built by a resource binding, handed to
//! [`Client::send`](crate::Client::send), and dropped when the call returns.

use crate::{Error, Result};
use http::Method;
use serde::Serialize;
use serde_json::Value;

/// A file to upload as part of a `multipart/form-data` request.
#[derive(Debug, Clone)]
pub struct FilePart {
    /// Form field name the service reads the file from (`file` for attachments).
    pub field_name: String,

    /// File name reported to the service.
    pub file_name: String,

    /// Raw file contents.
    pub bytes: Vec<u8>,

    /// Optional MIME type; the service receives `application/octet-stream` otherwise.
    pub mime_type: Option<String>,
}

impl FilePart {
    /// Creates a part for the `file` field.
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            field_name: "file".to_string(),
            file_name: file_name.into(),
            bytes: bytes.into(),
            mime_type: None,
        }
    }

    /// Sets the MIME type of the part.
    pub fn with_mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Reads a part from a local file, using the file's name as the upload name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Attachment`] if the file cannot be read.
    pub async fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await.map_err(|source| Error::Attachment {
            path: path.to_path_buf(),
            source,
        })?;
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        Ok(Self::new(file_name, bytes))
    }
}

/// Metadata for an individual HTTP request.
#[derive(Debug, Clone)]
pub struct RequestMetadata {
    /// The HTTP method (GET, POST, etc.).
    pub method: Method,

    /// The request path, relative to the client's base URL. A leading `/` is optional.
    pub path: String,

    /// Query parameters in order. Keys may repeat for array-valued filters.
    pub query_params: Vec<(String, String)>,

    /// JSON body.
    pub json: Option<Value>,

    /// Plain form fields. Sent as multipart parts alongside `file`, or url-encoded alone.
    pub form_fields: Vec<(String, String)>,

    /// File payload for multipart uploads.
    pub file: Option<FilePart>,
}

impl RequestMetadata {
    /// Creates a new `RequestMetadata` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query_params: Vec::new(),
            json: None,
            form_fields: Vec::new(),
            file: None,
        }
    }

    /// Adds a query parameter to the request.
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_params.push((key.into(), value.into()));
        self
    }

    /// Adds multiple query parameters to the request, keeping their order.
    pub fn with_query_params(mut self, params: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query_params.extend(params);
        self
    }

    /// Sets the JSON body of the request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SerializationFailed`] if `body` cannot be represented as JSON.
    pub fn with_json<T>(mut self, body: &T) -> Result<Self>
    where
        T: Serialize + ?Sized,
    {
        let value =
            serde_json::to_value(body).map_err(|e| Error::SerializationFailed(e.to_string()))?;
        self.json = Some(value);
        Ok(self)
    }

    /// Adds a form field to the request.
    pub fn with_form_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.form_fields.push((name.into(), value.into()));
        self
    }

    /// Attaches a file, turning the request into a multipart upload.
    pub fn with_file(mut self, file: FilePart) -> Self {
        self.file = Some(file);
        self
    }

    /// Returns `true` if the request is sent as `multipart/form-data`.
    pub fn is_multipart(&self) -> bool {
        self.file.is_some()
    }

    /// Returns `true` if the JSON body decides the content type.
    ///
    /// Form fields and files take precedence over a JSON body.
    pub fn sends_json(&self) -> bool {
        self.json.is_some() && self.file.is_none() && self.form_fields.is_empty()
    }
}

impl Default for RequestMetadata {
    fn default() -> Self {
        Self::new(Method::GET, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_params_keep_order_and_repeats() {
        let metadata = RequestMetadata::new(Method::GET, "events")
            .with_query_param("type[]", "Registration")
            .with_query_param("type[]", "Inquiry")
            .with_query_param("limit", "10");

        assert_eq!(
            metadata.query_params,
            vec![
                ("type[]".to_string(), "Registration".to_string()),
                ("type[]".to_string(), "Inquiry".to_string()),
                ("limit".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_json_body_decides_content_type() {
        let metadata = RequestMetadata::new(Method::POST, "people")
            .with_json(&json!({"firstName": "A"}))
            .unwrap();
        assert!(metadata.sends_json());
        assert!(!metadata.is_multipart());
    }

    #[test]
    fn test_file_suppresses_json_content_type() {
        let metadata = RequestMetadata::new(Method::POST, "personAttachments")
            .with_json(&json!({"ignored": true}))
            .unwrap()
            .with_form_field("personId", "7")
            .with_file(FilePart::new("a.txt", b"hello".to_vec()));

        assert!(!metadata.sends_json());
        assert!(metadata.is_multipart());
    }

    #[tokio::test]
    async fn test_file_part_from_missing_path() {
        let err = FilePart::from_path("/definitely/not/here.pdf").await.unwrap_err();
        assert!(matches!(err, Error::Attachment { .. }));
    }
}
