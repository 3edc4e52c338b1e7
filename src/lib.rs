//! Slack slash-command handler for Magic: The Gathering card lookups.
//!
//! A user types `/card Lightning Bolt` (optionally with a set code such as
//! `/card Shivan Dragon <LEA>`). The handler queries the card API's typeahead
//! endpoint, turns the first matching card into a Slack attachment with
//! mana symbols rendered as emoji, and returns the JSON reply.
//!
//! # Quick start
//!
//! ```no_run
//! use mtg_cardbot::CardBot;
//!
//! let bot = CardBot::builder().build().unwrap();
//!
//! let reply = bot.handle(Some("Lightning Bolt"), "text=Lightning+Bolt");
//! println!("{} {}", reply.status.status_line(), reply.body);
//! ```
//!
//! The HTTP server lives behind the `server` feature.

pub mod config;
pub mod error;
pub mod fetch;
pub mod handler;
pub mod input;
pub mod models;
pub mod normalize;
pub mod render;
#[cfg(feature = "server")]
pub mod server;
pub mod symbols;

pub use error::{CardBotError, Result};
pub use fetch::{CardSource, TypeaheadClient};
pub use handler::{CardBot, CardBotBuilder, HookResponse, ResponseStatus};
pub use input::CardQuery;
pub use models::{CardRecord, Edition, FormatLegality, RawApiRecord};
