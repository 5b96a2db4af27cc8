//! Homeworks repository
//!
//! Fetches raw homework status payloads from the review API.

use async_trait::async_trait;
use homework_client::{ClientError, PracticumClient};
use serde_json::Value;

/// Repository trait for the homework review API
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches statuses changed since `from_date`
    ///
    /// Returns the payload as received; no shape checks are made.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    /// Creates a new repository backed by a review API client
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        self.client.fetch_statuses(from_date).await
    }
}
