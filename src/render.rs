//! Slack message rendering.
//!
//! A found card becomes one `in_channel` attachment. When the card has an
//! image only the legality field is sent, since the image already shows
//! cost, set and rules text.

use serde::Serialize;

use crate::error::Result;
use crate::models::{CardRecord, FormatLegality};

pub const LEGAL: &str = ":green_circle:";
pub const RESTRICTED: &str = ":orange_circle:";
pub const BANNED: &str = ":red_circle:";

// ---------------------------------------------------------------------------
// Slack payload types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SlackMessage {
    Text {
        text: String,
    },
    Attachments {
        response_type: ResponseType,
        attachments: Vec<Attachment>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseType {
    InChannel,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    pub fields: Vec<Field>,
    pub text: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub title: String,
    pub value: Option<String>,
    pub short: bool,
}

impl Field {
    fn new(title: &str, value: Option<String>, short: bool) -> Self {
        Self {
            title: title.to_string(),
            value,
            short,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Display token for one legality status.
pub fn status_token(status: &str) -> String {
    match status {
        "legal" => LEGAL.to_string(),
        "restricted" => RESTRICTED.to_string(),
        "banned" => BANNED.to_string(),
        other => format!("=> {other},"),
    }
}

/// One line listing every format with its status token.
pub fn legality_line(formats: &[FormatLegality]) -> String {
    let line: String = formats
        .iter()
        .map(|f| format!("{} {} ", f.format, status_token(&f.status)))
        .collect();
    line.trim_end_matches([',', ' ']).to_string()
}

/// Build the message for the first card. Further cards are ignored.
///
/// Returns `None` for an empty slice.
pub fn card_message(cards: &[CardRecord]) -> Option<SlackMessage> {
    let card = cards.first()?;
    let legality = legality_line(card.formats.as_deref().unwrap_or_default());

    let fields = match card.image_url {
        None => vec![
            Field::new("Mana cost", card.cost.clone(), true),
            Field::new("Set", card.set.clone(), true),
            Field::new("Legality", Some(legality), false),
            Field::new("Rule text", card.rule_text.clone(), false),
        ],
        Some(_) => vec![Field::new("Legality", Some(legality), false)],
    };

    Some(SlackMessage::Attachments {
        response_type: ResponseType::InChannel,
        attachments: vec![Attachment {
            fields,
            text: String::new(),
            image_url: card.image_url.clone(),
        }],
    })
}

/// Serialize the card message, or `None` when there is no card.
pub fn render_cards(cards: &[CardRecord]) -> Result<Option<String>> {
    card_message(cards)
        .map(|message| serde_json::to_string(&message))
        .transpose()
        .map_err(Into::into)
}

/// Serialize a plain `{"text": ...}` reply.
pub fn render_error(message: &str) -> Result<String> {
    let message = SlackMessage::Text {
        text: message.to_string(),
    };
    Ok(serde_json::to_string(&message)?)
}
