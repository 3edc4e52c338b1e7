//! HTTP surface for the slash command (feature `server`).
//!
//! Slack posts a form-encoded body; the reply is always transport status
//! 200, with the logical status mirrored in a `Status` header.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderName, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::fetch::CardSource;
use crate::handler::{CardBot, HookResponse, ResponseStatus};

/// The slash-command form fields this service looks at.
///
/// Slack sends more (`token`, `team_id`, `response_url`, ...); they are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SlashCommand {
    pub text: Option<String>,
    pub command: Option<String>,
    pub user_name: Option<String>,
    pub channel_id: Option<String>,
}

impl SlashCommand {
    /// Decode a form body. Undecodable bodies yield an empty command.
    pub fn from_body(body: &str) -> Self {
        serde_urlencoded::from_str(body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "undecodable slash-command body");
            Self::default()
        })
    }
}

/// Build the router around a shared [`CardBot`].
pub fn router<S>(bot: Arc<CardBot<S>>) -> Router
where
    S: CardSource + Send + Sync + 'static,
{
    Router::new()
        .route("/", post(find_card::<S>))
        .route("/find_card", post(find_card::<S>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(bot)
}

/// POST / and /find_card
async fn find_card<S>(State(bot): State<Arc<CardBot<S>>>, body: String) -> Response
where
    S: CardSource + Send + Sync + 'static,
{
    let form = SlashCommand::from_body(&body);
    tracing::debug!(
        command = form.command.as_deref().unwrap_or_default(),
        user_name = form.user_name.as_deref().unwrap_or_default(),
        channel_id = form.channel_id.as_deref().unwrap_or_default(),
        "slash command received"
    );

    let reply = tokio::task::spawn_blocking(move || bot.handle(form.text.as_deref(), &body))
        .await
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "card lookup task failed");
            HookResponse::error(
                ResponseStatus::InternalServerError,
                "Error, card lookup failed",
            )
        });

    into_http(reply)
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

fn into_http(reply: HookResponse) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (header::CACHE_CONTROL, reply.cache_control()),
            (HeaderName::from_static("status"), reply.status.status_line()),
        ],
        reply.body,
    )
        .into_response()
}
