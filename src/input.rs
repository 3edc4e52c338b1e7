//! Slash-command text parsing.
//!
//! Users type a card name, optionally followed by a set code in angle
//! brackets: `/card Shivan Dragon <LEA>`. The set code narrows which edition
//! image is shown; the rest of the text becomes the typeahead query.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{CardBotError, Result};

static SET_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<([A-Za-z0-9_]{3})>").expect("valid set code pattern"));

// Closed tags, plus an unterminated `<` running to the end of input.
static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*(?:>|$)").expect("valid markup pattern"));

/// A parsed card lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardQuery {
    /// URL-ready card name: markup stripped, ASCII-folded, spaces as `%20`.
    pub query: String,
    /// Requested set code, case preserved.
    pub set_id: Option<String>,
}

/// Parse raw slash-command text into a [`CardQuery`].
///
/// # Errors
///
/// Returns [`CardBotError::InputMissing`] when `text` is absent or blank.
/// The error carries `raw_body` so the reply can show what was received.
pub fn parse(text: Option<&str>, raw_body: &str) -> Result<CardQuery> {
    let text = match text {
        Some(t) if !t.trim().is_empty() => t,
        _ => return Err(CardBotError::InputMissing(raw_body.to_string())),
    };

    Ok(CardQuery {
        query: clean_query(text),
        set_id: extract_set_id(text),
    })
}

/// Return the code of the first `<XXX>` token, if any.
pub fn extract_set_id(text: &str) -> Option<String> {
    SET_CODE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Build the query string sent to the typeahead endpoint.
pub fn clean_query(text: &str) -> String {
    let stripped = MARKUP.replace_all(text, "");
    let folded = deunicode::deunicode_with_tofu(stripped.trim(), "");
    folded.trim().replace(' ', "%20")
}
