//! Guild bot entry point
//!
//! Run with:
//! ```bash
//! cargo run -p guild-bot
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored when present).

use guild_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Bot failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting MapleStory Guild Bot...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        port = config.server.port,
        carry_webhook = config.webhooks.carry_channel.is_some(),
        reminder_webhook = config.webhooks.boss_reminder.is_some(),
        "Configuration loaded"
    );

    // Run the server
    guild_bot::server::run(config).await?;

    Ok(())
}
