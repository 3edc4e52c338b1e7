//! Mana-symbol substitution.
//!
//! Card text from the API spells mana symbols as bracketed tokens such as
//! `{U}` or `{W/P}`. Slack renders custom emoji written as `:name:`, so every
//! known token is rewritten to its emoji. The emoji have to be uploaded to
//! the Slack workspace; without them Slack shows the `:name:` text.
//!
//! The rewrite is a single left-to-right pass over the input with a lookup
//! table, so replaced output is never scanned again.

/// Token to emoji lookup table. Tokens are unique and never overlap.
pub const MANA_SYMBOLS: &[(&str, &str)] = &[
    // Colors
    ("{W}", ":white_mana:"),
    ("{U}", ":blue_mana:"),
    ("{B}", ":black_mana:"),
    ("{R}", ":red_mana:"),
    ("{G}", ":green_mana:"),
    // Special
    ("{T}", ":tap_symbol:"),
    ("{X}", ":x_mana:"),
    ("{C}", ":colorless_mana:"),
    // Generic
    ("{0}", ":zero_mana:"),
    ("{1}", ":one_mana:"),
    ("{2}", ":two_mana:"),
    ("{3}", ":three_mana:"),
    ("{4}", ":four_mana:"),
    ("{5}", ":five_mana:"),
    ("{6}", ":six_mana:"),
    ("{7}", ":seven_mana:"),
    ("{8}", ":eight_mana:"),
    ("{9}", ":nine_mana:"),
    ("{10}", ":ten_mana:"),
    ("{11}", ":eleven_mana:"),
    ("{12}", ":twelve_mana:"),
    // Phyrexian
    ("{W/P}", ":white_phyrexian_mana:"),
    ("{U/P}", ":blue_phyrexian_mana:"),
    ("{B/P}", ":black_phyrexian_mana:"),
    ("{R/P}", ":red_phyrexian_mana:"),
    ("{G/P}", ":green_phyrexian_mana:"),
    // Hybrid, only in the listed color order
    ("{W/U}", ":white_blue_mana:"),
    ("{W/B}", ":white_black_mana:"),
    ("{U/B}", ":blue_black_mana:"),
    ("{U/R}", ":blue_red_mana:"),
    ("{B/R}", ":black_red_mana:"),
    ("{R/W}", ":red_white_mana:"),
    ("{R/G}", ":red_green_mana:"),
    ("{G/W}", ":green_white_mana:"),
    ("{B/G}", ":black_green_mana:"),
    ("{G/U}", ":green_blue_mana:"),
];

/// Look up the emoji for a complete bracketed token like `{G/U}`.
pub fn symbol_for(token: &str) -> Option<&'static str> {
    MANA_SYMBOLS
        .iter()
        .find(|(t, _)| *t == token)
        .map(|(_, emoji)| *emoji)
}

/// Replace every known mana token in `text` with its emoji.
///
/// Unknown bracketed text such as `{Q}` or `{U/W}` is left as-is.
pub fn convert_text_to_emoji(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        let replaced = candidate
            .find('}')
            .and_then(|close| symbol_for(&candidate[..=close]).map(|emoji| (emoji, close)));

        match replaced {
            Some((emoji, close)) => {
                out.push_str(emoji);
                rest = &candidate[close + 1..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// [`convert_text_to_emoji`] lifted over optional API fields.
pub fn convert_optional(text: Option<&str>) -> Option<String> {
    text.map(convert_text_to_emoji)
}
