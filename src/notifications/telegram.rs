use crate::activity::ActivityRecord;
use crate::configuration::NotifierConfig;
use crate::messages::render;
use crate::traits::Notifier;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Telegram credentials not configured, missing: {}", .missing.join(", "))]
    NotConfigured { missing: Vec<&'static str> },
    #[error("failed to reach the Telegram API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Telegram API error: {status} - {body}")]
    Api { status: StatusCode, body: String },
    #[error("malformed Telegram API response: {0}")]
    InvalidResponse(#[source] reqwest::Error),
}

/// Acknowledgement returned by `sendMessage`.
#[derive(Clone, Debug, PartialEq)]
pub struct Delivery {
    pub ok: bool,
    pub message_id: Option<i64>,
}

#[derive(Serialize, Debug)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'static str,
}

#[derive(Deserialize, Debug)]
struct SendMessageResponse {
    ok: bool,
    #[serde(default)]
    result: Option<SentMessage>,
}

#[derive(Deserialize, Debug)]
struct SentMessage {
    message_id: i64,
}

/// Sends activity notifications through the Telegram Bot API.
#[derive(Clone, Debug)]
pub struct TelegramNotifier {
    client: reqwest::Client,
    config: NotifierConfig,
}

impl TelegramNotifier {
    pub fn new(config: NotifierConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: NotifierConfig) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    #[tracing::instrument(name = "dispatch", skip(self, activity), fields(kind = %activity.kind))]
    async fn dispatch(&self, activity: &ActivityRecord) -> Result<Delivery, DispatchError> {
        let config = match &self.config {
            NotifierConfig::Configured(config) => config,
            NotifierConfig::NotConfigured { missing } => {
                return Err(DispatchError::NotConfigured { missing: missing.clone() });
            }
        };

        let text = render(activity);
        let payload = SendMessage {
            chat_id: &config.chat_id,
            text: &text,
            parse_mode: "HTML",
        };

        debug!("Sending notification to chat {}", &config.chat_id);
        let response = self
            .client
            .post(config.send_message_url())
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| DispatchError::Transport(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!("Failed to read Telegram error body: {}", e.without_url());
                    String::new()
                }
            };
            warn!("Telegram API returned {}: {}", status, &body);
            return Err(DispatchError::Api { status, body });
        }

        let parsed: SendMessageResponse = response
            .json()
            .await
            .map_err(|e| DispatchError::InvalidResponse(e.without_url()))?;

        Ok(Delivery {
            ok: parsed.ok,
            message_id: parsed.result.map(|m| m.message_id),
        })
    }
}
