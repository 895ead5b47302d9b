//! # follow-up-boss - An async client for the Follow Up Boss CRM API
//!
//! The crate has two layers. The transport layer ([`Client`]) owns the HTTP session,
//! authentication, header composition, and error translation. On top of it sit thin
//! resource bindings ([`resources`]), one per remote collection, that turn method calls
//! into requests and hand back the service's JSON unchanged.
//!
//! ## Quick Start
//!
//! ```no_run
//! use follow_up_boss::query::Page;
//! use follow_up_boss::resources::people::{PeopleFilter, PersonFields};
//! use follow_up_boss::Client;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), follow_up_boss::Error> {
//!     // Reads FOLLOW_UP_BOSS_API_KEY (and X_SYSTEM / X_SYSTEM_KEY) from the environment
//!     let client = Client::from_env()?;
//!
//!     let identity = client.identity().get().await?;
//!     println!("Signed in to {}", identity["account"]["name"]);
//!
//!     let person = client
//!         .people()
//!         .create(&PersonFields {
//!             first_name: Some("Ada".into()),
//!             last_name: Some("Lovelace".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("Created person {}", person["id"]);
//!
//!     let page = client
//!         .people()
//!         .list(&PeopleFilter {
//!             page: Page::new().limit(25),
//!             tag: Some("Buyer".into()),
//!             ..Default::default()
//!         })
//!         .await?;
//!     println!("{} people on this page", page["people"].as_array().map_or(0, Vec::len));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **One transport path** - every binding goes through [`Client::send`], so every request is
//!   authenticated and decorated the same way
//! - **Declarative field mapping** - request bodies and filters are serde structs whose renames
//!   are the wire names; `None` fields are never sent
//! - **Structured errors** - [`ApiError`] carries the status, a composed message, and the decoded
//!   error body
//! - **Automatic logging** - structured logging with `tracing`
//! - **Environment configuration** - API key and integration headers from the environment or a
//!   `.env` file
//!
//! ## Error Handling
//!
//! ```no_run
//! use follow_up_boss::{Client, Error};
//! use serde_json::json;
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().api_key("fka_xxx").build()?;
//! match client.post("people", &json!({"firstName": "Ada"})).await {
//!     Ok(person) => println!("Created: {person}"),
//!     Err(Error::Api(err)) => {
//!         // e.g. "[Status 403] Forbidden: no scope"
//!         eprintln!("{err}");
//!         if let Some(body) = &err.response_data {
//!             eprintln!("  Body: {body}");
//!         }
//!     }
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Webhooks
//!
//! ```
//! use follow_up_boss::webhook;
//! use serde_json::json;
//!
//! let payload = json!({"event": "peopleUpdated", "resourceIds": [512]});
//! assert_eq!(webhook::event_name(&payload), "peopleUpdated");
//! assert_eq!(webhook::extract_person_id(&payload), Some(512));
//! ```

mod client;
mod error;
pub mod metadata;
pub mod query;
mod response;
pub mod resources;
pub mod webhook;

pub use client::{
    Client, ClientBuilder, API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, X_SYSTEM_ENV,
    X_SYSTEM_KEY_ENV,
};
pub use error::{ApiError, Error, Result};
pub use http::{Method, StatusCode};
pub use metadata::{FilePart, RequestMetadata};
pub use response::Response;
