//! Bot configuration
//!
//! Credentials and tuning knobs, read once at startup and passed by value
//! into the poller.

use std::fmt;
use std::time::Duration;
use thiserror::Error;

use homework_client::{DEFAULT_API_URL, DEFAULT_ENDPOINT};

const DEFAULT_RETRY_PERIOD: Duration = Duration::from_secs(600);
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Names of the required credential variables, in check order
pub const REQUIRED_CREDENTIALS: [&str; 3] =
    ["PRACTICUM_TOKEN", "TELEGRAM_TOKEN", "TELEGRAM_CHAT_ID"];

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// One or more credentials are absent or empty
    #[error("Отсутствует один или несколько токенов: {}", .0.join(", "))]
    MissedCredential(Vec<&'static str>),

    #[error("{0}")]
    Invalid(String),
}

/// Bot configuration
#[derive(Clone)]
pub struct Config {
    /// OAuth token for the review API
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives every notification
    pub telegram_chat_id: String,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Telegram Bot API base URL
    pub telegram_api_url: String,

    /// Sleep between poll iterations
    pub retry_period: Duration,

    /// Upper bound on each HTTP request
    pub request_timeout: Duration,
}

impl Config {
    /// Creates a configuration with default endpoints and intervals
    pub fn new(
        practicum_token: String,
        telegram_token: String,
        telegram_chat_id: String,
    ) -> Self {
        Self {
            practicum_token,
            telegram_token,
            telegram_chat_id,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            telegram_api_url: DEFAULT_API_URL.to_string(),
            retry_period: DEFAULT_RETRY_PERIOD,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - PRACTICUM_TOKEN (required)
    /// - TELEGRAM_TOKEN (required)
    /// - TELEGRAM_CHAT_ID (required)
    /// - PRACTICUM_ENDPOINT (optional, default: production endpoint)
    /// - TELEGRAM_API_URL (optional, default: https://api.telegram.org)
    /// - RETRY_PERIOD (optional, seconds, default: 600)
    /// - REQUEST_TIMEOUT (optional, seconds, default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Creates configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let missing: Vec<&'static str> = REQUIRED_CREDENTIALS
            .into_iter()
            .filter(|key| value(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissedCredential(missing));
        }

        let mut config = Self::new(
            value("PRACTICUM_TOKEN").unwrap_or_default(),
            value("TELEGRAM_TOKEN").unwrap_or_default(),
            value("TELEGRAM_CHAT_ID").unwrap_or_default(),
        );

        if let Some(endpoint) = value("PRACTICUM_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Some(api_url) = value("TELEGRAM_API_URL") {
            config.telegram_api_url = api_url;
        }

        config.retry_period = value("RETRY_PERIOD")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_RETRY_PERIOD);

        config.request_timeout = value("REQUEST_TIMEOUT")
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT);

        Ok(config)
    }

    /// Sets the sleep between poll iterations
    #[allow(dead_code)]
    pub fn with_retry_period(mut self, retry_period: Duration) -> Self {
        self.retry_period = retry_period;
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let missing: Vec<&'static str> = [
            ("PRACTICUM_TOKEN", &self.practicum_token),
            ("TELEGRAM_TOKEN", &self.telegram_token),
            ("TELEGRAM_CHAT_ID", &self.telegram_chat_id),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect();
        if !missing.is_empty() {
            return Err(ConfigError::MissedCredential(missing));
        }

        for (name, url) in [
            ("endpoint", &self.endpoint),
            ("telegram_api_url", &self.telegram_api_url),
        ] {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::Invalid(format!(
                    "{name} must start with http:// or https://"
                )));
            }
        }

        if self.retry_period.is_zero() {
            return Err(ConfigError::Invalid(
                "retry_period must be greater than 0".to_string(),
            ));
        }

        if self.request_timeout.is_zero() {
            return Err(ConfigError::Invalid(
                "request_timeout must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

// Tokens stay out of logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("endpoint", &self.endpoint)
            .field("telegram_api_url", &self.telegram_api_url)
            .field("retry_period", &self.retry_period)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("PRACTICUM_TOKEN", "p-token"),
        ("TELEGRAM_TOKEN", "t-token"),
        ("TELEGRAM_CHAT_ID", "42"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();
        assert_eq!(config.practicum_token, "p-token");
        assert_eq!(config.telegram_token, "t-token");
        assert_eq!(config.telegram_chat_id, "42");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.telegram_api_url, DEFAULT_API_URL);
        assert_eq!(config.retry_period, Duration::from_secs(600));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_each_missing_credential_is_fatal() {
        for skipped in REQUIRED_CREDENTIALS {
            let vars: Vec<_> = CREDENTIALS
                .into_iter()
                .filter(|(k, _)| *k != skipped)
                .collect();
            assert_eq!(
                Config::from_lookup(lookup(&vars)).unwrap_err(),
                ConfigError::MissedCredential(vec![skipped])
            );
        }
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let vars = [
            ("PRACTICUM_TOKEN", ""),
            ("TELEGRAM_TOKEN", "  "),
            ("TELEGRAM_CHAT_ID", "42"),
        ];
        let err = Config::from_lookup(lookup(&vars)).unwrap_err();
        assert_eq!(
            err,
            ConfigError::MissedCredential(vec!["PRACTICUM_TOKEN", "TELEGRAM_TOKEN"])
        );
        assert_eq!(
            err.to_string(),
            "Отсутствует один или несколько токенов: PRACTICUM_TOKEN, TELEGRAM_TOKEN"
        );
    }

    #[test]
    fn test_optional_overrides() {
        let mut vars = CREDENTIALS.to_vec();
        vars.extend([
            ("PRACTICUM_ENDPOINT", "http://localhost:9000/statuses/"),
            ("TELEGRAM_API_URL", "http://localhost:9001"),
            ("RETRY_PERIOD", "15"),
            ("REQUEST_TIMEOUT", "5"),
        ]);
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/statuses/");
        assert_eq!(config.telegram_api_url, "http://localhost:9001");
        assert_eq!(config.retry_period, Duration::from_secs(15));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_unparseable_interval_falls_back() {
        let mut vars = CREDENTIALS.to_vec();
        vars.push(("RETRY_PERIOD", "ten minutes"));
        let config = Config::from_lookup(lookup(&vars)).unwrap();
        assert_eq!(config.retry_period, Duration::from_secs(600));
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::new("p".into(), "t".into(), "1".into());
        assert!(config.validate().is_ok());

        config.endpoint = "not-a-url".to_string();
        assert!(config.validate().is_err());
        config.endpoint = DEFAULT_ENDPOINT.to_string();

        config.retry_period = Duration::ZERO;
        assert!(config.validate().is_err());
        config.retry_period = Duration::from_secs(1);

        config.telegram_chat_id = String::new();
        assert_eq!(
            config.validate(),
            Err(ConfigError::MissedCredential(vec!["TELEGRAM_CHAT_ID"]))
        );
    }

    #[test]
    fn test_debug_hides_tokens() {
        let config = Config::from_lookup(lookup(&CREDENTIALS)).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("p-token"));
        assert!(!printed.contains("t-token"));
    }
}
