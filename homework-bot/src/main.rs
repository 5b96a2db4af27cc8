//! Homework Bot
//!
//! Polls the homework review API and relays status changes to a Telegram chat.
//!
//! Architecture:
//! - Configuration: Credentials and intervals from the environment (or `.env`)
//! - Repositories: HTTP adapters for the review API and the chat API
//! - Services: Best-effort notification delivery
//! - Scheduler: The poll loop with failure de-duplication
//!
//! Every iteration fetches statuses changed since the last server date,
//! reports the newest one, then sleeps for the retry period.

mod config;
mod error;
mod repository;
mod scheduler;
mod service;

use anyhow::{Context, Result};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{Config, ConfigError};
use crate::repository::{HttpHomeworkRepository, TelegramChatRepository};
use crate::scheduler::StatusPoller;
use crate::service::{ChatNotifier, NotificationService};
use homework_client::{PracticumClient, TelegramClient};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "homework_bot=debug,homework_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting homework bot");

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(critical = true, "{}", e);
            return Err(e).context("Startup configuration check failed");
        }
    };
    info!(
        "Loaded configuration: endpoint={}, chat_id={}",
        config.endpoint, config.telegram_chat_id
    );

    let http = homework_client::http_client(config.request_timeout);

    let practicum =
        PracticumClient::with_client(&config.endpoint, &config.practicum_token, http.clone());
    let telegram =
        TelegramClient::with_client(&config.telegram_api_url, &config.telegram_token, http);

    let notifier: Arc<dyn NotificationService> = Arc::new(ChatNotifier::new(
        Arc::new(TelegramChatRepository::new(telegram)),
        config.telegram_chat_id.clone(),
    ));
    let homeworks = Arc::new(HttpHomeworkRepository::new(practicum));

    info!("Clients initialized");

    let shutdown = CancellationToken::new();
    spawn_shutdown_listener(shutdown.clone());

    let mut poller = StatusPoller::new(config, homeworks, notifier);
    poller.run(shutdown).await;

    info!("Homework bot stopped");
    Ok(())
}

/// Loads and validates configuration from the environment
fn load_config() -> Result<Config, ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

/// Cancels `shutdown` on Ctrl-C
fn spawn_shutdown_listener(shutdown: CancellationToken) {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Shutdown signal received");
                shutdown.cancel();
            }
            Err(e) => error!("Failed to listen for shutdown signal: {}", e),
        }
    });
}
