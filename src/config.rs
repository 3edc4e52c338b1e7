use std::str::FromStr;
use std::time::Duration;

use crate::error::{CardBotError, Result};

pub const API_BASE: &str = "https://api.deckbrew.com";
pub const TYPEAHEAD_PATH: &str = "/mtg/cards/typeahead";

/// Cache policy sent with every webhook response.
pub const CACHE_CONTROL: &str = "no-transform,public,max-age=300,s-maxage=900";

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";

pub const ENV_BIND: &str = "CARDBOT_BIND";
pub const ENV_API_BASE: &str = "CARDBOT_API_BASE";
pub const ENV_TIMEOUT_SECS: &str = "CARDBOT_TIMEOUT_SECS";
pub const ENV_LOG_FORMAT: &str = "CARDBOT_LOG_FORMAT";

/// Output style of the process-wide log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = CardBotError;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(CardBotError::InvalidArgument(format!(
                "{ENV_LOG_FORMAT} must be one of compact, pretty, json (got '{other}')"
            ))),
        }
    }
}

/// Process-level settings for the webhook server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: String,
    pub api_base: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND.to_string(),
            api_base: API_BASE.to_string(),
            timeout: None,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// Blank values are treated as unset. Malformed values fail with
    /// [`CardBotError::InvalidArgument`] naming the offending variable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(bind) = read(ENV_BIND) {
            config.bind_address = bind.trim().to_string();
        }
        if let Some(base) = read(ENV_API_BASE) {
            config.api_base = base.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = read(ENV_TIMEOUT_SECS) {
            config.timeout = Some(parse_timeout(&secs)?);
        }
        if let Some(format) = read(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }
}

fn parse_timeout(value: &str) -> Result<Duration> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(CardBotError::InvalidArgument(format!(
            "{ENV_TIMEOUT_SECS} must be a positive integer (got '{value}')"
        ))),
    }
}
