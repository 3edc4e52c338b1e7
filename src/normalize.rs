//! Turns typeahead response bodies into display-ready [`CardRecord`]s.
//!
//! Malformed or empty bodies never fail; they produce no cards, and the
//! handler reports "no card found" to the user.

use serde_json::Value;

use crate::models::{ApiResponse, CardRecord, FormatLegality, RawApiRecord};
use crate::symbols::convert_optional;

/// Decode a raw response body into cards, in API order.
///
/// `set_id` only affects which edition image is picked; every record in the
/// body produces a card.
pub fn retrieve_cards(body: Option<&str>, set_id: Option<&str>) -> Vec<CardRecord> {
    let body = match body {
        Some(b) if !b.trim().is_empty() && b != "[]" => b,
        _ => return Vec::new(),
    };

    let items = match serde_json::from_str::<ApiResponse>(body) {
        Ok(ApiResponse::Records(items)) => items,
        Ok(ApiResponse::Other(other)) => {
            tracing::warn!(kind = json_kind(&other), "typeahead body is not a card list");
            return Vec::new();
        }
        Err(e) => {
            tracing::warn!(error = %e, "typeahead body is not valid JSON");
            return Vec::new();
        }
    };

    if items.first().is_none_or(is_blank) {
        return Vec::new();
    }

    items
        .into_iter()
        .filter(|item| item.is_object())
        .filter_map(|item| match serde_json::from_value::<RawApiRecord>(item) {
            Ok(record) => Some(parse_record(&record, set_id)),
            Err(e) => {
                tracing::warn!(error = %e, "skipping undecodable card record");
                None
            }
        })
        .collect()
}

/// Normalize a single API record.
///
/// Every edition overwrites `set`, whether or not it matches `set_id`. Only
/// matching editions with a real image overwrite `image_url`. In both cases
/// the last qualifying edition wins.
pub fn parse_record(record: &RawApiRecord, set_id: Option<&str>) -> CardRecord {
    let mut card = CardRecord {
        name: record.name.clone(),
        formats: record.formats.as_ref().map(|formats| {
            formats
                .iter()
                .map(|(format, status)| FormatLegality::from_entry(format, status))
                .collect()
        }),
        rule_text: convert_optional(record.text.as_deref()),
        cost: convert_optional(record.cost.as_deref()),
        set: None,
        image_url: None,
    };

    let editions = match record.editions.as_deref() {
        Some(editions @ [Some(_), ..]) => editions,
        _ => return card,
    };

    for edition in editions.iter().flatten() {
        card.set = Some(edition.display_set());
        if !edition.matches_set(set_id) {
            continue;
        }
        if let Some(image) = edition.usable_image() {
            card.image_url = Some(image.to_string());
        }
    }

    card
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
