use serde::{Deserialize, Serialize};

use super::lenient;

/// Placeholder suffix the API uses for editions without a scanned image.
pub const MISSING_IMAGE_SUFFIX: &str = "0.jpg";

// ---------------------------------------------------------------------------
// Edition — One printing of a card, as returned inside `editions`
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edition {
    #[serde(default, deserialize_with = "lenient")]
    pub set: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub set_id: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub image_url: Option<String>,
}

impl Edition {
    /// `"<set name> (<set code>)"`, with missing parts rendered empty.
    pub fn display_set(&self) -> String {
        format!(
            "{} ({})",
            self.set.as_deref().unwrap_or_default(),
            self.set_id.as_deref().unwrap_or_default()
        )
    }

    /// Whether this edition belongs to the requested set.
    ///
    /// No requested set matches every edition. Codes compare ASCII
    /// case-insensitively.
    pub fn matches_set(&self, set_id: Option<&str>) -> bool {
        match set_id {
            None => true,
            Some(wanted) => self
                .set_id
                .as_deref()
                .is_some_and(|own| own.eq_ignore_ascii_case(wanted)),
        }
    }

    /// The image URL, unless it is blank or the "no image" placeholder.
    pub fn usable_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|url| !url.trim().is_empty() && !url.ends_with(MISSING_IMAGE_SUFFIX))
    }
}
