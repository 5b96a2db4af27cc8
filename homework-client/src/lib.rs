//! Homework HTTP Clients
//!
//! Thin, typed HTTP clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework review API (polled for status changes)
//! - [`TelegramClient`]: the Telegram Bot API (used to deliver notifications)
//!
//! Neither client retries; the caller decides when to try again.
//!
//! # Example
//!
//! ```no_run
//! use homework_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let payload = client.fetch_statuses(0).await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use practicum::{DEFAULT_ENDPOINT, PracticumClient};
pub use telegram::{DEFAULT_API_URL, TelegramClient};

use reqwest::Client;
use std::time::Duration;

/// Builds an HTTP client whose requests give up after `timeout`
///
/// Falls back to a client without a timeout if the builder fails.
pub fn http_client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).build().unwrap_or_else(|e| {
        tracing::warn!("Failed to build HTTP client with timeout: {}", e);
        Client::new()
    })
}
