//! Live smoke test against the public card API.
//!
//! Run with:
//! ```sh
//! cargo test --test smoke_test -- --ignored --nocapture
//! ```

use mtg_cardbot::{CardBot, ResponseStatus};

#[test]
#[ignore]
fn live_lookup_returns_a_reply() {
    let bot = CardBot::builder().build().unwrap();
    let reply = bot.handle(Some("Lightning Bolt"), "text=Lightning+Bolt");

    eprintln!("{} {}", reply.status.status_line(), reply.body);
    assert_eq!(reply.status, ResponseStatus::Ok);
    let v: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
    assert!(v.get("text").is_some() || v.get("attachments").is_some());
}
