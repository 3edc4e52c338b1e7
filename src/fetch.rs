//! Typeahead lookups against the card API.
//!
//! Lookups are blocking and never retried.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::config;
use crate::error::Result;

/// Anything that can answer a typeahead query with a raw response body.
pub trait CardSource {
    /// Fetch the raw body for `query`, which must already be URL-ready.
    fn typeahead(&self, query: &str) -> Result<String>;
}

/// Blocking HTTP client for the typeahead endpoint.
#[derive(Debug, Clone)]
pub struct TypeaheadClient {
    client: Client,
    api_base: String,
}

impl TypeaheadClient {
    /// Create a client for `api_base` (scheme and host, no trailing slash).
    ///
    /// With `timeout` unset the transport default applies.
    pub fn new(api_base: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().redirect(reqwest::redirect::Policy::limited(10));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    /// Full request URL for `query`. The query is appended verbatim.
    pub fn typeahead_url(&self, query: &str) -> String {
        format!("{}{}?q={}", self.api_base, config::TYPEAHEAD_PATH, query)
    }
}

impl CardSource for TypeaheadClient {
    fn typeahead(&self, query: &str) -> Result<String> {
        let url = self.typeahead_url(query);
        tracing::debug!(%url, "querying card typeahead");
        let resp = self.client.get(&url).send()?;
        Ok(resp.text()?)
    }
}
