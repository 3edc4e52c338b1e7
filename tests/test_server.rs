//! In-process tests for the webhook router.

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use common::StubSource;
use mtg_cardbot::server::{router, SlashCommand};
use mtg_cardbot::CardBot;
use serde_json::Value;
use tower::ServiceExt;

fn app(source: StubSource) -> Router {
    router(Arc::new(CardBot::with_source(source)))
}

fn slash_post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// SlashCommand
// ---------------------------------------------------------------------------

#[test]
fn slash_command_decodes_form_fields() {
    let form = SlashCommand::from_body(
        "token=x&command=%2Fcard&text=Shivan+Dragon+%3CLEA%3E&user_name=jo&channel_id=C1",
    );
    assert_eq!(form.text.as_deref(), Some("Shivan Dragon <LEA>"));
    assert_eq!(form.command.as_deref(), Some("/card"));
    assert_eq!(form.user_name.as_deref(), Some("jo"));
    assert_eq!(form.channel_id.as_deref(), Some("C1"));
}

#[test]
fn slash_command_without_text() {
    let form = SlashCommand::from_body("token=x&command=%2Fcard");
    assert_eq!(form.text, None);
}

// ---------------------------------------------------------------------------
// Routes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn found_card_sets_headers_and_body() {
    let resp = app(StubSource::replying(common::typeahead_body()))
        .oneshot(slash_post("/", "command=%2Fcard&text=Lightning+Bolt"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    assert_eq!(
        resp.headers()[header::CACHE_CONTROL],
        "no-transform,public,max-age=300,s-maxage=900"
    );
    assert_eq!(resp.headers()["status"], "200 OK");

    let v = body_json(resp).await;
    assert_eq!(v["response_type"], "in_channel");
}

#[tokio::test]
async fn find_card_route_is_an_alias() {
    let resp = app(StubSource::replying("[]"))
        .oneshot(slash_post("/find_card", "text=Foo"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CACHE_CONTROL],
        mtg_cardbot::config::CACHE_CONTROL
    );
    let v = body_json(resp).await;
    assert_eq!(v["text"], "Error, didnt find any card with the name: Foo");
}

#[tokio::test]
async fn missing_text_echoes_raw_body() {
    let resp = app(StubSource::replying("[]"))
        .oneshot(slash_post("/", "token=x&command=%2Fcard"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let v = body_json(resp).await;
    assert_eq!(
        v["text"],
        "Error, can't extract card name from input: token=x&command=%2Fcard"
    );
}

#[tokio::test]
async fn health_reports_ok() {
    let resp = app(StubSource::failing())
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["status"], "ok");
}
