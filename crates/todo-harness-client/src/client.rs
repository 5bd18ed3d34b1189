// crates/todo-harness-client/src/client.rs
// ============================================================================
// Module: Todo HTTP Client
// Description: Blocking wrapper over the todo service's six HTTP operations.
// Purpose: Issue CRUD, list, health, and log requests with one shared timeout.
// Dependencies: reqwest, url, todo-harness-core
// ============================================================================

//! ## Overview
//! [`TodoClient`] performs the six logical operations the remote service
//! exposes. All calls are blocking, bounded by one configured timeout, and
//! never retried; retry policy belongs to callers (see
//! [`crate::readiness::wait_for_ready`]).
//! Invariants:
//! - Any 2xx response is success; anything else is
//!   [`ClientError::RequestFailed`] with status and body intact.
//! - `health_check` swallows every failure and returns a boolean.
//! - List responses are bounded by the server's own page-size limit; this
//!   client does not paginate.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::blocking::Response;
use serde::de::DeserializeOwned;
use todo_harness_core::DeleteAck;
use todo_harness_core::TodoItem;
use todo_harness_core::UpdateAck;
use url::Url;

use crate::error::ClientError;

// ============================================================================
// SECTION: Todo Client
// ============================================================================

/// Blocking HTTP client for the remote todo service.
///
/// # Invariants
/// - Holds no request state between calls; every operation is stateless.
/// - Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct TodoClient {
    /// Base address of the remote service, path-normalized to end in `/`.
    base_url: Url,
    /// Underlying blocking HTTP client carrying the shared timeout.
    http: Client,
}

impl TodoClient {
    /// Builds a client for the given base address with one shared timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidBaseUrl`] when the address does not
    /// parse as an `http`/`https` URL, and [`ClientError::Transport`] when
    /// the underlying HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)
            .map_err(|err| ClientError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        match base_url.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ClientError::InvalidBaseUrl(format!("unsupported scheme: {scheme}")));
            }
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        Ok(Self {
            base_url,
            http,
        })
    }

    /// Returns the configured base address.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Probes the health endpoint; true only on HTTP 200.
    ///
    /// This is the one operation that deliberately swallows transport errors
    /// (timeouts, DNS failures, refused connections) instead of propagating
    /// them: callers use it as a readiness-poll predicate.
    #[must_use]
    pub fn health_check(&self) -> bool {
        let Ok(url) = self.endpoint("healthz") else {
            return false;
        };
        match self.http.get(url).send() {
            Ok(response) => response.status() == StatusCode::OK,
            Err(_) => false,
        }
    }

    /// Creates a todo item from a form-encoded body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on any non-2xx response and
    /// [`ClientError::Transport`] when no response arrived.
    pub fn create_todo(&self, description: &str, completed: bool) -> Result<TodoItem, ClientError> {
        let url = self.endpoint("todo")?;
        let form = [("description", description), ("completed", bool_str(completed))];
        let response = self
            .http
            .post(url)
            .form(&form)
            .send()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        decode(expect_success(response)?)
    }

    /// Updates the completion flag of an existing item.
    ///
    /// Updating a non-existent id surfaces as an error response from the
    /// remote service; the exact status is an external contract.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on any non-2xx response and
    /// [`ClientError::Transport`] when no response arrived.
    pub fn update_todo(&self, id: &str, completed: bool) -> Result<UpdateAck, ClientError> {
        let url = self.endpoint(&format!("todo/{id}"))?;
        // The service reads the id from the path; the form copy matches the
        // original wire traffic.
        let form = [("id", id), ("completed", bool_str(completed))];
        let response = self
            .http
            .post(url)
            .form(&form)
            .send()
            .map_err(|err| ClientError::Transport(err.to_string()))?;
        decode(expect_success(response)?)
    }

    /// Deletes an existing item by id.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on any non-2xx response and
    /// [`ClientError::Transport`] when no response arrived.
    pub fn delete_todo(&self, id: &str) -> Result<DeleteAck, ClientError> {
        let url = self.endpoint(&format!("todo/{id}"))?;
        let response =
            self.http.delete(url).send().map_err(|err| ClientError::Transport(err.to_string()))?;
        decode(expect_success(response)?)
    }

    /// Lists completed items, bounded by the server's page-size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on any non-2xx response and
    /// [`ClientError::Transport`] when no response arrived.
    pub fn completed_todos(&self) -> Result<Vec<TodoItem>, ClientError> {
        self.fetch_list("todo-completed")
    }

    /// Lists incomplete items, bounded by the server's page-size limit.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on any non-2xx response and
    /// [`ClientError::Transport`] when no response arrived.
    pub fn incomplete_todos(&self) -> Result<Vec<TodoItem>, ClientError> {
        self.fetch_list("todo-incomplete")
    }

    /// Fetches the service's raw log text; non-empty on success.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::RequestFailed`] on any non-2xx response and
    /// [`ClientError::Transport`] when no response arrived.
    pub fn logs(&self) -> Result<String, ClientError> {
        let url = self.endpoint("log")?;
        let response =
            self.http.get(url).send().map_err(|err| ClientError::Transport(err.to_string()))?;
        expect_success(response)?.text().map_err(|err| ClientError::Decode(err.to_string()))
    }

    /// Issues a GET against a list endpoint and decodes the JSON array.
    fn fetch_list(&self, path: &str) -> Result<Vec<TodoItem>, ClientError> {
        let url = self.endpoint(path)?;
        let response =
            self.http.get(url).send().map_err(|err| ClientError::Transport(err.to_string()))?;
        decode(expect_success(response)?)
    }

    /// Joins a relative path onto the normalized base address.
    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        self.base_url.join(path).map_err(|err| ClientError::InvalidBaseUrl(err.to_string()))
    }
}

// ============================================================================
// SECTION: Response Helpers
// ============================================================================

/// Maps a non-2xx response into `RequestFailed` with status and body intact.
fn expect_success(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().unwrap_or_default();
    Err(ClientError::RequestFailed {
        status: status.as_u16(),
        body,
    })
}

/// Decodes a successful response body into the expected JSON shape.
fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    response.json().map_err(|err| ClientError::Decode(err.to_string()))
}

/// Renders a boolean the way the service's form parser expects it.
const fn bool_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
