use std::sync::Arc;

use mtg_cardbot::config::{LogFormat, ServerConfig};
use mtg_cardbot::CardBot;
use tracing_subscriber::EnvFilter;

fn init_logging(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_target(false).with_env_filter(filter);

    match format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> mtg_cardbot::Result<()> {
    let config = ServerConfig::from_env()?;
    init_logging(config.log_format);

    // The blocking HTTP client owns its own runtime, so it is created (and
    // later dropped) outside the server's async context.
    let mut builder = CardBot::builder().api_base(config.api_base.clone());
    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }
    let bot = Arc::new(builder.build()?);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
        tracing::info!(
            bind_address = %config.bind_address,
            api_base = %config.api_base,
            "listening for slash commands"
        );
        axum::serve(listener, mtg_cardbot::server::router(Arc::clone(&bot))).await?;
        Ok::<_, mtg_cardbot::CardBotError>(())
    })
}
