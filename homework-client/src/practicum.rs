//! Homework review API

use crate::error::{ClientError, Result};
use reqwest::{Client, StatusCode, header::AUTHORIZATION};
use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Production endpoint of the homework status API
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// HTTP client for the homework review API
#[derive(Debug, Clone)]
pub struct PracticumClient {
    /// Full URL of the homework statuses endpoint
    endpoint: String,
    /// OAuth token sent with every request
    token: String,
    /// HTTP client instance
    client: Client,
}

impl PracticumClient {
    /// Create a new client with a default HTTP client
    ///
    /// # Arguments
    /// * `endpoint` - Full URL of the homework statuses endpoint
    /// * `token` - OAuth token of the student account
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self::with_client(endpoint, token, Client::new())
    }

    /// Create a new client with a configured reqwest Client (timeouts, proxies)
    pub fn with_client(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            token: token.into(),
            client,
        }
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the homework statuses changed since `from_date`
    ///
    /// A `from_date` of zero means "now". The payload is returned as raw JSON;
    /// checking its shape is up to the caller.
    ///
    /// # Errors
    /// * [`ClientError::Transport`] if the request cannot be completed
    /// * [`ClientError::UnexpectedStatus`] for any status other than 200
    /// * [`ClientError::Parse`] if the body is not JSON
    pub async fn fetch_statuses(&self, from_date: i64) -> Result<Value> {
        let from_date = if from_date == 0 {
            unix_now()
        } else {
            from_date
        };

        debug!("Sending request to {} (from_date={})", self.endpoint, from_date);

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ClientError::UnexpectedStatus(status.as_u16()));
        }

        debug!("Response received from review API");

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
