use std::env;
use std::fmt;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::debug;

pub const BOT_TOKEN_VAR: &str = "TELEGRAM_BOT_TOKEN";
pub const CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";
pub const API_URL_VAR: &str = "TELEGRAM_API_URL";
pub const LISTEN_ADDR_VAR: &str = "NOTIFIER_LISTEN_ADDR";

pub const DEFAULT_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Credentials and addressing for the Telegram Bot API.
#[derive(Clone, PartialEq)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub chat_id: String,
    pub api_base_url: String,
}

impl TelegramConfig {
    pub fn new(bot_token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self {
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_base_url, self.bot_token)
    }
}

// The token ends up in URLs and must never reach the logs.
impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum NotifierConfig {
    Configured(TelegramConfig),
    NotConfigured { missing: Vec<&'static str> },
}

impl NotifierConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the configuration through `lookup`; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bot_token = read(BOT_TOKEN_VAR);
        let chat_id = read(CHAT_ID_VAR);

        match (bot_token, chat_id) {
            (Some(bot_token), Some(chat_id)) => {
                let mut config = TelegramConfig::new(bot_token, chat_id);
                if let Some(url) = read(API_URL_VAR) {
                    debug!("Using Telegram API override: {}", &url);
                    config = config.with_api_base_url(url);
                }
                NotifierConfig::Configured(config)
            }
            (bot_token, chat_id) => {
                let mut missing = vec![];
                if bot_token.is_none() {
                    missing.push(BOT_TOKEN_VAR);
                }
                if chat_id.is_none() {
                    missing.push(CHAT_ID_VAR);
                }
                NotifierConfig::NotConfigured { missing }
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        matches!(self, NotifierConfig::Configured(_))
    }
}

impl From<TelegramConfig> for NotifierConfig {
    fn from(config: TelegramConfig) -> Self {
        NotifierConfig::Configured(config)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServerSettings {
    pub listen_addr: SocketAddr,
}

impl ServerSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(LISTEN_ADDR_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        let listen_addr = raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: LISTEN_ADDR_VAR,
            value: raw.clone(),
        })?;

        Ok(Self { listen_addr })
    }
}
