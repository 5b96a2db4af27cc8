//! Notification service
//!
//! Best-effort delivery of text messages to the configured recipient.
//! Delivery failures are logged here and never reach the caller, so a
//! broken chat API cannot stop the poll loop.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error};

use crate::repository::ChatRepository;

/// Service trait for notifying the recipient
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Attempts to deliver `text`; never fails outward
    async fn notify(&self, text: &str);
}

/// Sends every notification to one fixed chat
pub struct ChatNotifier {
    chat: Arc<dyn ChatRepository>,
    chat_id: String,
}

impl ChatNotifier {
    /// Creates a notifier for a single recipient
    ///
    /// # Arguments
    /// * `chat` - Chat delivery repository
    /// * `chat_id` - Recipient chat identifier
    pub fn new(chat: Arc<dyn ChatRepository>, chat_id: String) -> Self {
        Self { chat, chat_id }
    }
}

#[async_trait]
impl NotificationService for ChatNotifier {
    async fn notify(&self, text: &str) {
        debug!("Sending notification to chat {}", self.chat_id);

        if let Err(e) = self.chat.send_message(&self.chat_id, text).await {
            error!("Failed to send notification: {}", e);
        }
    }
}
