//! Blocking client for the Splitwise REST API
//!
//! Only two endpoints are used:
//!
//! - `GET {base}/get_groups` → `{"groups": [...]}`
//! - `GET {base}/get_expenses?group_id=<id>&limit=<n>` → `{"expenses": [...]}`
//!
//! Requests authenticate with the personal API key as a bearer token. Each
//! call is a single round trip: no pagination, no retries. Non-success
//! statuses become [`ExportError::Api`] with the service's error text.

use crate::config::Config;
use crate::core::ExpenseService;
use crate::types::{Expense, ExportError, Group, GroupId};
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

const GROUPS_ENDPOINT: &str = "get_groups";
const EXPENSES_ENDPOINT: &str = "get_expenses";

#[derive(Debug, Deserialize)]
struct GroupsResponse {
    groups: Vec<Group>,
}

#[derive(Debug, Deserialize)]
struct ExpensesResponse {
    expenses: Vec<Expense>,
}

/// Splitwise API client
///
/// Built from a [`Config`]; holds its own copy of the API key and base URL.
#[derive(Debug)]
pub struct SplitwiseClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl SplitwiseClient {
    /// Create a client for the service described by `config`
    ///
    /// # Returns
    ///
    /// * `Err(ExportError::Http)` if the HTTP client cannot be built (TLS backend)
    pub fn new(config: &Config) -> Result<Self, ExportError> {
        let http = Client::builder()
            .user_agent(concat!("splitwise-export/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_http(http, config))
    }

    fn with_http(http: Client, config: &Config) -> Self {
        SplitwiseClient {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Full URL of an endpoint
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<T, ExportError> {
        let url = self.endpoint_url(endpoint);
        debug!(%url, ?query, "requesting");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.api_key)
            .query(query)
            .send()?;

        let status = response.status();
        let body = response.text()?;
        debug!(%url, status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(ExportError::api(status.as_u16(), &api_error_message(&body)));
        }

        serde_json::from_str(&body).map_err(|e| ExportError::decode(endpoint, &e))
    }
}

impl ExpenseService for SplitwiseClient {
    fn list_groups(&self) -> Result<Vec<Group>, ExportError> {
        let response: GroupsResponse = self.get(GROUPS_ENDPOINT, &[])?;
        Ok(response.groups)
    }

    fn list_expenses(&self, group_id: GroupId, limit: usize) -> Result<Vec<Expense>, ExportError> {
        let query = [
            ("group_id", group_id.to_string()),
            ("limit", limit.to_string()),
        ];
        let response: ExpensesResponse = self.get(EXPENSES_ENDPOINT, &query)?;
        Ok(response.expenses)
    }
}

/// Decode a `get_groups` response body
pub fn parse_groups(body: &str) -> Result<Vec<Group>, ExportError> {
    serde_json::from_str::<GroupsResponse>(body)
        .map(|response| response.groups)
        .map_err(|e| ExportError::decode(GROUPS_ENDPOINT, &e))
}

/// Decode a `get_expenses` response body
///
/// Fails if any expense lacks a category.
pub fn parse_expenses(body: &str) -> Result<Vec<Expense>, ExportError> {
    serde_json::from_str::<ExpensesResponse>(body)
        .map(|response| response.expenses)
        .map_err(|e| ExportError::decode(EXPENSES_ENDPOINT, &e))
}

/// Summarize an error response body
///
/// Splitwise reports failures either as `{"error": "..."}` or as
/// `{"errors": {"base": ["...", ...], ...}}`. Anything else is returned as-is.
pub fn api_error_message(body: &str) -> String {
    let raw = || body.trim().to_string();

    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) => return raw(),
    };

    if let Some(message) = value.get("error").and_then(Value::as_str) {
        return message.to_string();
    }

    if let Some(errors) = value.get("errors") {
        let mut messages = Vec::new();
        collect_strings(errors, &mut messages);
        if !messages.is_empty() {
            return messages.join("; ");
        }
    }

    raw()
}

fn collect_strings(value: &Value, out: &mut Vec<String>) {
    match value {
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => items.iter().for_each(|item| collect_strings(item, out)),
        Value::Object(map) => map.values().for_each(|item| collect_strings(item, out)),
        _ => {}
    }
}
