use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("unknown activity kind: {0:?}")]
    UnknownKind(String),
    #[error("invalid activity payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Which notification template applies to an activity.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "&'static str")]
pub enum ActivityKind {
    Visit,
    WalletConnect,
}

impl ActivityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityKind::Visit => "visit",
            ActivityKind::WalletConnect => "wallet_connect",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityKind {
    type Err = ActivityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visit" => Ok(ActivityKind::Visit),
            "wallet_connect" => Ok(ActivityKind::WalletConnect),
            other => Err(ActivityError::UnknownKind(other.to_string())),
        }
    }
}

impl TryFrom<String> for ActivityKind {
    type Error = ActivityError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ActivityKind> for &'static str {
    fn from(kind: ActivityKind) -> Self {
        kind.as_str()
    }
}

/// Best-effort geolocation, never validated.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

/// A single tracked user event, read once per dispatch.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRecord {
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub timestamp: String,
    pub user_agent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wallet_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_keys_provided: Option<bool>,
    /// Free text forwarded as-is; redacting secrets is up to the caller.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_keys: Option<String>,
}

impl ActivityRecord {
    fn new(kind: ActivityKind, timestamp: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            kind,
            timestamp: timestamp.into(),
            user_agent: user_agent.into(),
            location: None,
            wallet_type: None,
            security_keys_provided: None,
            security_keys: None,
        }
    }

    pub fn visit(timestamp: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self::new(ActivityKind::Visit, timestamp, user_agent)
    }

    pub fn wallet_connect(timestamp: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self::new(ActivityKind::WalletConnect, timestamp, user_agent)
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_wallet_type(mut self, wallet_type: impl Into<String>) -> Self {
        self.wallet_type = Some(wallet_type.into());
        self
    }

    pub fn with_security_keys(mut self, provided: bool, keys: Option<String>) -> Self {
        self.security_keys_provided = Some(provided);
        self.security_keys = keys;
        self
    }

    pub fn from_json(payload: &str) -> Result<Self, ActivityError> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn city(&self) -> Option<&str> {
        self.location.as_ref()?.city.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.location.as_ref()?.country.as_deref()
    }

    pub fn ip(&self) -> Option<&str> {
        self.location.as_ref()?.ip.as_deref()
    }
}
