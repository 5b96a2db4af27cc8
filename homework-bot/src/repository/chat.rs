//! Chat repository
//!
//! Delivers text messages to a chat.

use async_trait::async_trait;
use homework_client::{ClientError, TelegramClient};

/// Repository trait for the chat delivery API
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Sends a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Recipient chat identifier
    /// * `text` - Message body
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ClientError>;
}

/// Telegram implementation of ChatRepository
pub struct TelegramChatRepository {
    client: TelegramClient,
}

impl TelegramChatRepository {
    /// Creates a new repository backed by a Telegram client
    pub fn new(client: TelegramClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatRepository for TelegramChatRepository {
    async fn send_message(&self, chat_id: &str, text: &str) -> Result<(), ClientError> {
        self.client.send_message(chat_id, text).await
    }
}
