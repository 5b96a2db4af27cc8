//! Telegram Bot API

use crate::error::{ClientError, Result};
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

/// Public Telegram Bot API base URL
pub const DEFAULT_API_URL: &str = "https://api.telegram.org";

/// A client for pushing text messages via the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramClient {
    /// Base URL of the Bot API, without trailing slash
    api_url: String,
    /// Bot token from @BotFather
    token: String,
    client: Client,
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

impl TelegramClient {
    /// Create a client against the public Bot API
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_client(DEFAULT_API_URL, token, Client::new())
    }

    /// Create a client against a custom API base URL with a configured HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            token: token.into(),
            client,
        }
    }

    /// Get the API base URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain-text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Recipient chat identifier
    /// * `text` - Message text, delivered verbatim
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.token);

        debug!("Sending Telegram message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::Delivery(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_body));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TelegramClient::with_client("http://localhost:8081/", "t", Client::new());
        assert_eq!(client.api_url(), "http://localhost:8081");
    }

    #[test]
    fn test_default_api_url() {
        assert_eq!(TelegramClient::new("t").api_url(), DEFAULT_API_URL);
    }

    #[tokio::test]
    async fn test_send_message_posts_chat_and_text() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/bot123:abc/sendMessage")
            .match_body(Matcher::Json(json!({
                "chat_id": "42",
                "text": "Изменился статус"
            })))
            .with_status(200)
            .with_body(r#"{"ok":true}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_client(server.url(), "123:abc", Client::new());
        client.send_message("42", "Изменился статус").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_message_api_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/bott/sendMessage")
            .with_status(400)
            .with_body(r#"{"ok":false,"description":"Bad Request: chat not found"}"#)
            .create_async()
            .await;

        let client = TelegramClient::with_client(server.url(), "t", Client::new());
        let err = client.send_message("1", "hi").await.unwrap_err();

        match err {
            ClientError::ApiError { status, message } => {
                assert_eq!(status, 400);
                assert!(message.contains("chat not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unreachable_api_error_hides_token() {
        let client =
            TelegramClient::with_client("http://127.0.0.1:1", "123:SECRETBOTTOKEN", Client::new());
        let err = client.send_message("1", "hi").await.unwrap_err();

        assert!(matches!(err, ClientError::Delivery(_)));
        let text = err.to_string();
        assert!(text.starts_with("Ошибка при отправке сообщения: "));
        assert!(!text.contains("SECRETBOTTOKEN"));
        assert!(!format!("{err:?}").contains("SECRETBOTTOKEN"));
    }
}
