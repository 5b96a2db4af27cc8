//! Status poller
//!
//! Polls the review API for status changes and notifies the recipient.
//! One iteration is fetch, validate, format, notify; the poller then sleeps
//! for the retry period and starts over until cancelled.

use homework_core::{format_status, validate_response};
use std::sync::Arc;
use tokio::time;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::config::Config;
use crate::error::PollError;
use crate::repository::HomeworkRepository;
use crate::service::NotificationService;

/// Status poller that continuously checks for homework review updates
pub struct StatusPoller {
    config: Config,
    homeworks: Arc<dyn HomeworkRepository>,
    notifier: Arc<dyn NotificationService>,
    /// Lower bound of the next poll window (Unix seconds)
    cursor: i64,
    /// Last failure reported to the recipient; cleared by a clean iteration
    last_error: Option<String>,
}

impl StatusPoller {
    /// Creates a new poller starting from the current time
    pub fn new(
        config: Config,
        homeworks: Arc<dyn HomeworkRepository>,
        notifier: Arc<dyn NotificationService>,
    ) -> Self {
        Self {
            config,
            homeworks,
            notifier,
            cursor: chrono::Utc::now().timestamp(),
            last_error: None,
        }
    }

    /// Starts polling from `cursor` instead of the current time
    #[allow(dead_code)]
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    /// Current lower bound of the poll window
    #[allow(dead_code)]
    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    /// Failure message most recently sent to the recipient
    #[allow(dead_code)]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Starts the polling loop
    ///
    /// Runs until `shutdown` is cancelled. Failures never end the loop.
    pub async fn run(&mut self, shutdown: CancellationToken) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.retry_period
        );

        while !shutdown.is_cancelled() {
            self.poll_once().await;

            tokio::select! {
                biased;

                _ = shutdown.cancelled() => break,
                _ = time::sleep(self.config.retry_period) => {}
            }
        }

        info!("Status poller stopped");
    }

    /// Performs a single poll iteration without sleeping
    pub async fn poll_once(&mut self) {
        match self.check_statuses().await {
            Ok(()) => self.last_error = None,
            Err(e) => self.report_failure(e).await,
        }
    }

    async fn check_statuses(&mut self) -> Result<(), PollError> {
        debug!("Polling review API (from_date={})", self.cursor);
        let payload = self.homeworks.fetch_statuses(self.cursor).await?;

        debug!("Validating API response");
        let response = validate_response(&payload)?;

        match response.latest() {
            Some(record) => {
                debug!("Formatting latest homework status");
                let message = format_status(record)?;
                self.notifier.notify(&message).await;
                info!("Status notification sent: {}", message);
            }
            None => debug!("Homework status has not changed"),
        }

        self.cursor = response.current_date;
        Ok(())
    }

    async fn report_failure(&mut self, err: PollError) {
        let message = err.notification();
        error!("{}", message);

        if self.last_error.as_deref() == Some(message.as_str()) {
            debug!("Same failure as last iteration, notification suppressed");
            return;
        }

        self.notifier.notify(&message).await;
        self.last_error = Some(message);
    }
}
