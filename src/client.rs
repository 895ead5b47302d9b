//! The Follow Up Boss HTTP client.
//!
//! [`Client`] owns the connection pool, the credentials, and the shared header set.
//! Every resource binding funnels through [`Client::send`], so authentication, header
//! composition, response decoding, and error translation happen in exactly one place.
//! Use [`ClientBuilder`] to configure and create clients.

use crate::{
    metadata::{FilePart, RequestMetadata},
    ApiError, Error, Response, Result,
};
use http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};
use url::Url;

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://api.followupboss.com/v1";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable read when no API key is passed to the builder.
pub const API_KEY_ENV: &str = "FOLLOW_UP_BOSS_API_KEY";

/// Environment variable holding the `X-System` registration name.
pub const X_SYSTEM_ENV: &str = "X_SYSTEM";

/// Environment variable holding the `X-System-Key` registration key.
pub const X_SYSTEM_KEY_ENV: &str = "X_SYSTEM_KEY";

const USER_AGENT: &str = concat!("follow-up-boss-rust/", env!("CARGO_PKG_VERSION"));

const X_SYSTEM: &str = "x-system";
const X_SYSTEM_KEY: &str = "x-system-key";

// Custom headers may never replace these.
const PROTECTED_HEADERS: [&str; 2] = ["authorization", "content-length"];

/// An asynchronous client for the Follow Up Boss API.
///
/// The client is cheap to clone: clones share one connection pool and one immutable
/// configuration. Each call performs a single HTTP round-trip and is never retried.
///
/// # Examples
///
/// ```no_run
/// use follow_up_boss::Client;
/// use serde_json::json;
///
/// # async fn example() -> Result<(), follow_up_boss::Error> {
/// let client = Client::builder()
///     .api_key("fka_xxx")
///     .system("MyIntegration", "secret-system-key")
///     .build()?;
///
/// let identity = client.get("/identity", &()).await?;
/// println!("Account: {}", identity["account"]["name"]);
///
/// let person = client.post("people", &json!({"firstName": "Ada"})).await?;
/// println!("Created person {}", person["id"]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: Url,
    api_key: String,
    default_headers: HeaderMap,
    timeout: Duration,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("default_headers", &self.inner.default_headers)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Creates a client configured entirely from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if `FOLLOW_UP_BOSS_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self> {
        ClientBuilder::new().build()
    }

    /// Returns the base URL every request path is joined onto.
    pub fn base_url(&self) -> &Url {
        &self.inner.base_url
    }

    /// Returns the configured request timeout.
    pub fn timeout(&self) -> Duration {
        self.inner.timeout
    }

    /// Performs an authenticated request and returns the decoded body.
    ///
    /// 2xx responses with an empty body (such as `204 No Content`) yield an empty JSON
    /// object. 2xx JSON bodies are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] for any non-2xx status or transport failure.
    pub async fn execute(&self, metadata: RequestMetadata) -> Result<Value> {
        self.send(metadata).await.map(|response| response.data)
    }

    /// Performs an authenticated request and returns the full response.
    ///
    /// This is the single path to the network used by every binding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Api`] with a status code when the service answers with a non-2xx
    /// status, and without one when no response was received.
    pub async fn send(&self, metadata: RequestMetadata) -> Result<Response<Value>> {
        let url = self.build_url(&metadata.path)?;
        let method = metadata.method.clone();

        tracing::debug!(
            method = %method,
            url = %url,
            query_params = metadata.query_params.len(),
            json = metadata.sends_json(),
            multipart = metadata.is_multipart(),
            "Executing HTTP request"
        );

        let request = self.build_request(url.clone(), metadata)?;
        let start_time = Instant::now();

        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, method = %method, url = %url, "Request failed");
            ApiError::transport(&e)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let raw_body = response.text().await.map_err(|e| {
            tracing::warn!(error = %e, method = %method, url = %url, "Failed to read response body");
            ApiError::transport(&e)
        })?;
        let latency = start_time.elapsed();

        tracing::info!(
            status = status.as_u16(),
            latency_ms = latency.as_millis(),
            method = %method,
            url = %url,
            "Received HTTP response"
        );

        if !status.is_success() {
            if status.is_client_error() {
                tracing::error!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Client error (4xx)"
                );
            } else {
                tracing::warn!(
                    status = status.as_u16(),
                    response = %raw_body,
                    "Server error (5xx)"
                );
            }

            return Err(ApiError::from_response(status, &raw_body).into());
        }

        let data = decode_success_body(status, &raw_body);
        Ok(Response::new(data, status, headers, latency))
    }

    /// Makes a GET request. `query` is flattened with [`crate::query::to_query_pairs`];
    /// pass `&()` for none.
    pub async fn get<Q>(&self, path: impl Into<String>, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(Method::GET, path)
            .with_query_params(crate::query::to_query_pairs(query)?);
        self.execute(metadata).await
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<B>(&self, path: impl Into<String>, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(Method::POST, path).with_json(body)?;
        self.execute(metadata).await
    }

    /// Makes a PUT request with a JSON body.
    pub async fn put<B>(&self, path: impl Into<String>, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let metadata = RequestMetadata::new(Method::PUT, path).with_json(body)?;
        self.execute(metadata).await
    }

    /// Makes a DELETE request, optionally carrying a JSON body.
    ///
    /// Several endpoints (stages, appointment outcomes, reactions) read reassignment
    /// targets from the body of a DELETE.
    pub async fn delete(&self, path: impl Into<String>, body: Option<&Value>) -> Result<Value> {
        let mut metadata = RequestMetadata::new(Method::DELETE, path);
        if let Some(body) = body {
            metadata = metadata.with_json(body)?;
        }
        self.execute(metadata).await
    }

    /// Makes a multipart POST request carrying form fields and one file.
    pub async fn post_multipart(
        &self,
        path: impl Into<String>,
        fields: impl IntoIterator<Item = (String, String)>,
        file: FilePart,
    ) -> Result<Value> {
        let mut metadata = RequestMetadata::new(Method::POST, path).with_file(file);
        for (name, value) in fields {
            metadata = metadata.with_form_field(name, value);
        }
        self.execute(metadata).await
    }

    fn build_url(&self, path: &str) -> Result<Url> {
        let normalized = path.trim_start_matches('/');
        Ok(self.inner.base_url.join(normalized)?)
    }

    /// Composes the headers for one request.
    ///
    /// `Content-Type: application/json` is added only when the JSON body decides the
    /// payload; multipart and form requests get their content type from reqwest.
    pub(crate) fn compose_headers(&self, metadata: &RequestMetadata) -> HeaderMap {
        let mut headers = self.inner.default_headers.clone();
        if metadata.sends_json() {
            headers.insert(
                header::CONTENT_TYPE,
                HeaderValue::from_static("application/json"),
            );
        }
        headers
    }

    fn build_request(&self, url: Url, metadata: RequestMetadata) -> Result<reqwest::RequestBuilder> {
        let headers = self.compose_headers(&metadata);

        let mut request = self
            .inner
            .http_client
            .request(metadata.method.clone(), url)
            .headers(headers)
            .basic_auth(&self.inner.api_key, Some(""));

        if !metadata.query_params.is_empty() {
            request = request.query(&metadata.query_params);
        }

        if let Some(file) = metadata.file {
            let mut form = reqwest::multipart::Form::new();
            for (name, value) in metadata.form_fields {
                form = form.text(name, value);
            }
            let mime = file
                .mime_type
                .as_deref()
                .unwrap_or("application/octet-stream");
            let part = reqwest::multipart::Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(mime)
                .map_err(|e| Error::Validation(format!("Invalid MIME type `{mime}`: {e}")))?;
            request = request.multipart(form.part(file.field_name, part));
        } else if !metadata.form_fields.is_empty() {
            request = request.form(&metadata.form_fields);
        } else if let Some(json) = metadata.json {
            let body =
                serde_json::to_vec(&json).map_err(|e| Error::SerializationFailed(e.to_string()))?;
            request = request.body(body);
        }

        Ok(request)
    }
}

fn decode_success_body(status: StatusCode, raw_body: &str) -> Value {
    if status == StatusCode::NO_CONTENT || raw_body.trim().is_empty() {
        return Value::Object(Map::new());
    }

    match serde_json::from_str(raw_body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "Success body is not JSON, returning it as text");
            Value::String(raw_body.to_string())
        }
    }
}

/// Builder for configuring and creating a [`Client`].
///
/// Values not set explicitly fall back to the environment: the API key to
/// `FOLLOW_UP_BOSS_API_KEY`, the system pair to `X_SYSTEM` / `X_SYSTEM_KEY`.
///
/// # Examples
///
/// ```no_run
/// use follow_up_boss::ClientBuilder;
/// use std::time::Duration;
///
/// # fn example() -> Result<(), follow_up_boss::Error> {
/// let client = ClientBuilder::new()
///     .api_key("fka_xxx")
///     .timeout(Duration::from_secs(10))
///     .default_header("X-Request-Source", "nightly-sync")?
///     .build()?;
/// # Ok(())
/// # }
/// ```
pub struct ClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    x_system: Option<String>,
    x_system_key: Option<String>,
    default_headers: HeaderMap,
    timeout: Duration,
    user_agent: String,
    read_env: bool,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            x_system: None,
            x_system_key: None,
            default_headers: HeaderMap::new(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: USER_AGENT.to_string(),
            read_env: true,
        }
    }

    /// Creates a builder after loading a `.env` file from the working directory
    /// (or one of its parents) into the process environment.
    ///
    /// A missing `.env` file is not an error.
    pub fn from_dotenv() -> Self {
        if let Err(e) = dotenv::dotenv() {
            tracing::debug!(error = %e, "No .env file loaded");
        }
        Self::new()
    }

    /// Sets the API key used as the Basic auth username.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Overrides the API root. A trailing slash is optional.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        self.base_url = Some(parse_base_url(url.as_ref())?);
        Ok(self)
    }

    /// Sets the `X-System` / `X-System-Key` pair for registered integrations.
    pub fn system(mut self, name: impl Into<String>, key: impl Into<String>) -> Self {
        self.x_system = Some(name.into());
        self.x_system_key = Some(key.into());
        self
    }

    /// Adds a header that will be included in all requests.
    ///
    /// `Authorization` and `Content-Length` are reserved and ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header name: {}", e)))?;
        if PROTECTED_HEADERS.contains(&name.as_str()) {
            tracing::warn!(header = %name, "Ignoring protected custom header");
            return Ok(self);
        }
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid header value: {}", e)))?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Overrides the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Disables the environment fallback for the API key and system headers.
    pub fn ignore_env(mut self) -> Self {
        self.read_env = false;
        self
    }

    /// Builds the configured `Client`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] if no API key was provided and none is found in
    /// the environment, or if a configured header value is invalid.
    pub fn build(self) -> Result<Client> {
        let api_key = self
            .api_key
            .filter(|key| !key.is_empty())
            .or_else(|| self.read_env.then(|| env_value(API_KEY_ENV)).flatten())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "API key not found. Pass it to the builder or set {API_KEY_ENV}"
                ))
            })?;

        let x_system = self
            .x_system
            .or_else(|| self.read_env.then(|| env_value(X_SYSTEM_ENV)).flatten());
        let x_system_key = self
            .x_system_key
            .or_else(|| self.read_env.then(|| env_value(X_SYSTEM_KEY_ENV)).flatten());

        let base_url = match self.base_url {
            Some(url) => url,
            None => parse_base_url(DEFAULT_BASE_URL)?,
        };

        let mut default_headers = HeaderMap::new();
        default_headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in [(X_SYSTEM, x_system), (X_SYSTEM_KEY, x_system_key)] {
            if let Some(value) = value {
                let value = HeaderValue::try_from(value).map_err(|e| {
                    Error::Configuration(format!("Invalid {name} header value: {e}"))
                })?;
                default_headers.insert(HeaderName::from_static(name), value);
            }
        }
        for (name, value) in &self.default_headers {
            default_headers.insert(name.clone(), value.clone());
        }

        let http_client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| {
                Error::Configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        tracing::debug!(
            base_url = %base_url,
            timeout_secs = self.timeout.as_secs(),
            system = default_headers.contains_key(X_SYSTEM),
            "Built Follow Up Boss client"
        );

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                base_url,
                api_key,
                default_headers,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn env_value(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

// `Url::join` replaces the last segment unless the base path ends in `/`.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client() -> Client {
        Client::builder()
            .api_key("test-key")
            .ignore_env()
            .build()
            .unwrap()
    }

    #[test]
    fn test_paths_join_with_or_without_slash() {
        let client = client();
        assert_eq!(
            client.build_url("/people/5").unwrap().as_str(),
            "https://api.followupboss.com/v1/people/5"
        );
        assert_eq!(
            client.build_url("people/5").unwrap().as_str(),
            "https://api.followupboss.com/v1/people/5"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_is_optional() {
        let client = Client::builder()
            .api_key("k")
            .ignore_env()
            .base_url("http://localhost:9000/v1/")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            client.build_url("notes").unwrap().as_str(),
            "http://localhost:9000/v1/notes"
        );
    }

    #[test]
    fn test_json_body_sets_content_type() {
        let client = client();
        let metadata = RequestMetadata::new(Method::POST, "people")
            .with_json(&json!({"firstName": "A"}))
            .unwrap();

        let headers = client.compose_headers(&metadata);
        assert_eq!(headers[header::CONTENT_TYPE], "application/json");
        assert_eq!(headers[header::ACCEPT], "application/json");
    }

    #[test]
    fn test_file_payload_leaves_content_type_alone() {
        let client = client();
        let metadata = RequestMetadata::new(Method::POST, "personAttachments")
            .with_form_field("personId", "1")
            .with_file(FilePart::new("a.txt", b"x".to_vec()));

        let headers = client.compose_headers(&metadata);
        assert!(!headers.contains_key(header::CONTENT_TYPE));
    }

    #[test]
    fn test_get_has_no_content_type() {
        let client = client();
        let headers = client.compose_headers(&RequestMetadata::new(Method::GET, "identity"));
        assert!(!headers.contains_key(header::CONTENT_TYPE));
    }

    #[test]
    fn test_system_and_custom_headers() {
        let client = Client::builder()
            .api_key("k")
            .ignore_env()
            .system("Acme", "acme-key")
            .default_header("X-Trace", "on")
            .unwrap()
            .default_header("Authorization", "Bearer nope")
            .unwrap()
            .build()
            .unwrap();

        let headers = client.compose_headers(&RequestMetadata::new(Method::GET, "identity"));
        assert_eq!(headers["x-system"], "Acme");
        assert_eq!(headers["x-system-key"], "acme-key");
        assert_eq!(headers["x-trace"], "on");
        assert!(!headers.contains_key(header::AUTHORIZATION));
    }

    #[test]
    fn test_missing_api_key_is_configuration_error() {
        let err = Client::builder().ignore_env().build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));

        let err = Client::builder().api_key("").ignore_env().build().unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let rendered = format!("{:?}", client());
        assert!(!rendered.contains("test-key"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_decode_success_body() {
        assert_eq!(decode_success_body(StatusCode::NO_CONTENT, ""), json!({}));
        assert_eq!(decode_success_body(StatusCode::OK, "  "), json!({}));
        assert_eq!(decode_success_body(StatusCode::OK, "[1,2]"), json!([1, 2]));
        assert_eq!(decode_success_body(StatusCode::OK, "ok"), json!("ok"));
    }
}
