//! Request orchestration: text in, Slack JSON out.
//!
//! Every request runs parse, fetch, normalize and render in order. Any
//! failure short-circuits to a `{"text": ...}` reply; the caller always gets
//! a body to send back.

use std::time::Duration;

use crate::config;
use crate::error::{CardBotError, Result};
use crate::fetch::{CardSource, TypeaheadClient};
use crate::input;
use crate::normalize::retrieve_cards;
use crate::render::{render_cards, render_error};

/// Body used if even the error reply cannot be serialized.
const FALLBACK_BODY: &str = r#"{"text":"Error"}"#;

// ---------------------------------------------------------------------------
// HookResponse
// ---------------------------------------------------------------------------

/// Logical status reported in the `Status` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
    UnprocessableEntity,
    InternalServerError,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::BadRequest => 400,
            Self::UnprocessableEntity => 422,
            Self::InternalServerError => 500,
        }
    }

    /// Text for the `Status` header.
    pub fn status_line(self) -> &'static str {
        match self {
            Self::Ok => "200 OK",
            Self::BadRequest => "400 Bad Request",
            Self::UnprocessableEntity => "Unprocessable Entity",
            Self::InternalServerError => "500 Internal Server Error",
        }
    }
}

/// A finished webhook reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookResponse {
    pub status: ResponseStatus,
    /// JSON body for Slack.
    pub body: String,
}

impl HookResponse {
    /// Value for the `Cache-Control` header.
    pub fn cache_control(&self) -> &'static str {
        config::CACHE_CONTROL
    }

    /// A `{"text": ...}` reply carrying `message`.
    pub fn error(status: ResponseStatus, message: &str) -> Self {
        let body = render_error(message).unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to serialize error reply");
            FALLBACK_BODY.to_string()
        });
        Self { status, body }
    }
}

// ---------------------------------------------------------------------------
// CardBotBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`CardBot`] backed by the HTTP typeahead client.
pub struct CardBotBuilder {
    api_base: String,
    timeout: Option<Duration>,
}

impl Default for CardBotBuilder {
    fn default() -> Self {
        Self {
            api_base: config::API_BASE.to_string(),
            timeout: None,
        }
    }
}

impl CardBotBuilder {
    /// Point the bot at a different API host. Defaults to [`config::API_BASE`].
    pub fn api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Set an overall request timeout for card lookups.
    ///
    /// Unset by default, leaving the HTTP client's own default in place.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<CardBot> {
        if self.api_base.trim().is_empty() {
            return Err(CardBotError::InvalidArgument(
                "API base URL must not be empty".to_string(),
            ));
        }
        let source = TypeaheadClient::new(&self.api_base, self.timeout)?;
        Ok(CardBot::with_source(source))
    }
}

// ---------------------------------------------------------------------------
// CardBot
// ---------------------------------------------------------------------------

/// Answers card lookups for the slash command.
///
/// Holds no per-request state; one instance serves any number of requests.
pub struct CardBot<S = TypeaheadClient> {
    source: S,
}

impl CardBot<TypeaheadClient> {
    pub fn builder() -> CardBotBuilder {
        CardBotBuilder::default()
    }
}

impl<S: CardSource> CardBot<S> {
    /// Use an arbitrary [`CardSource`] for lookups.
    pub fn with_source(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Handle one slash-command invocation.
    ///
    /// `text` is the command's `text` form field; `raw_body` is the full
    /// request body, echoed back when `text` is unusable.
    pub fn handle(&self, text: Option<&str>, raw_body: &str) -> HookResponse {
        match self.lookup(text, raw_body) {
            Ok(body) => {
                tracing::info!("card found");
                HookResponse {
                    status: ResponseStatus::Ok,
                    body,
                }
            }
            Err(e @ (CardBotError::InputMissing(_) | CardBotError::NoCardsFound(_))) => {
                tracing::info!(reason = %e, "no card to show");
                HookResponse::error(ResponseStatus::Ok, &e.to_string())
            }
            Err(e) => {
                tracing::error!(error = %e, "card lookup failed");
                HookResponse::error(ResponseStatus::InternalServerError, &e.to_string())
            }
        }
    }

    /// Run the pipeline, returning the success body or the reason there is none.
    pub fn lookup(&self, text: Option<&str>, raw_body: &str) -> Result<String> {
        let query = input::parse(text, raw_body)?;
        tracing::debug!(query = %query.query, set_id = ?query.set_id, "parsed card query");

        // A failed fetch reads the same as an empty result.
        let body = match self.source.typeahead(&query.query) {
            Ok(body) => Some(body),
            Err(e) => {
                tracing::warn!(error = %e, "typeahead request failed");
                None
            }
        };

        let cards = retrieve_cards(body.as_deref(), query.set_id.as_deref());
        tracing::debug!(count = cards.len(), "normalized cards");

        render_cards(&cards)?
            .ok_or_else(|| CardBotError::NoCardsFound(text.unwrap_or_default().to_string()))
    }
}
