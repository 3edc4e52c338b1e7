//! Shared fixtures for the card bot integration tests.
//!
//! Provides typeahead response bodies shaped like the card API's output and
//! `StubSource`, a `CardSource` that answers without touching the network.

#![allow(dead_code)]

use std::sync::Mutex;

use mtg_cardbot::{CardBotError, CardSource, Result};

/// Two cards: Lightning Bolt (text only, placeholder images) and
/// Shivan Dragon (two editions, one with a real image).
pub fn typeahead_body() -> String {
    serde_json::json!([
        {
            "name": "Lightning Bolt",
            "id": "lightning-bolt",
            "types": ["instant"],
            "colors": ["red"],
            "cmc": 1,
            "cost": "{R}",
            "text": "Lightning Bolt deals 3 damage to any target.",
            "formats": {
                "commander": "legal",
                "legacy": "legal",
                "vintage": "restricted",
                "standard": "banned"
            },
            "editions": [
                {
                    "set": "Limited Edition Alpha",
                    "set_id": "LEA",
                    "rarity": "common",
                    "multiverse_id": 0,
                    "image_url": "https://image.deckbrew.com/mtg/multiverseid/0.jpg"
                }
            ]
        },
        {
            "name": "Shivan Dragon",
            "id": "shivan-dragon",
            "cost": "{4}{R}{R}",
            "text": "Flying\n{R}: Shivan Dragon gets +1/+0 until end of turn.",
            "formats": { "vintage": "legal" },
            "editions": [
                {
                    "set": "Limited Edition Alpha",
                    "set_id": "LEA",
                    "image_url": "https://image.deckbrew.com/mtg/multiverseid/1223.jpg"
                },
                {
                    "set": "Magic 2010",
                    "set_id": "M10",
                    "image_url": "https://image.deckbrew.com/mtg/multiverseid/0.jpg"
                }
            ]
        }
    ])
    .to_string()
}

/// A single card record with the given editions.
pub fn card_with_editions(editions: serde_json::Value) -> String {
    serde_json::json!([
        {
            "name": "Counterspell",
            "cost": "{U}{U}",
            "text": "Counter target spell.",
            "formats": { "legacy": "legal" },
            "editions": editions
        }
    ])
    .to_string()
}

/// Canned `CardSource` that records every query it sees.
pub struct StubSource {
    reply: Option<String>,
    pub queries: Mutex<Vec<String>>,
}

impl StubSource {
    /// Answer every query with `body`.
    pub fn replying(body: impl Into<String>) -> Self {
        Self {
            reply: Some(body.into()),
            queries: Mutex::new(Vec::new()),
        }
    }

    /// Fail every query as if the network were down.
    pub fn failing() -> Self {
        Self {
            reply: None,
            queries: Mutex::new(Vec::new()),
        }
    }
}

impl CardSource for StubSource {
    fn typeahead(&self, query: &str) -> Result<String> {
        self.queries.lock().unwrap().push(query.to_string());
        self.reply
            .clone()
            .ok_or_else(|| CardBotError::InvalidArgument("connection refused".to_string()))
    }
}
