use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::edition::Edition;
use super::{lenient, lenient_seq};

// ---------------------------------------------------------------------------
// ApiResponse — Top-level typeahead payload, decoded defensively
// ---------------------------------------------------------------------------

/// The typeahead endpoint answers with a JSON array of cards. Anything else
/// (an error object, a bare string) lands in `Other`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Records(Vec<Value>),
    Other(Value),
}

// ---------------------------------------------------------------------------
// RawApiRecord — One card as returned by the API
// ---------------------------------------------------------------------------

/// Only the fields the bot displays are read. Each one decodes on its own:
/// a field of the wrong shape becomes `None` and the rest of the card is kept.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawApiRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Format name to legality status, in API order.
    #[serde(default, deserialize_with = "lenient")]
    pub formats: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub text: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub cost: Option<String>,
    /// Entries that are not edition objects decode as `None`.
    #[serde(default, deserialize_with = "lenient_seq")]
    pub editions: Option<Vec<Option<Edition>>>,
}

// ---------------------------------------------------------------------------
// CardRecord — Display-ready card
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CardRecord {
    pub name: Option<String>,
    pub formats: Option<Vec<FormatLegality>>,
    pub rule_text: Option<String>,
    pub cost: Option<String>,
    pub set: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatLegality {
    pub format: String,
    pub status: String,
}

impl FormatLegality {
    /// Build from one `formats` entry. Non-string statuses keep their JSON text.
    pub fn from_entry(format: &str, status: &Value) -> Self {
        let status = match status {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Self {
            format: format.to_string(),
            status,
        }
    }
}
