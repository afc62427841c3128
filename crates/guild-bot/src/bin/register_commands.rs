//! One-time slash-command registration
//!
//! Bulk-overwrites the bot's global application commands. Run once after a
//! command surface change:
//! ```bash
//! DISCORD_TOKEN=... APPLICATION_ID=... cargo run -p guild-bot --bin register-commands
//! ```

use anyhow::{Context, Result};
use guild_common::try_init_tracing;
use serde_json::json;
use tracing::{error, info};

/// Discord option type discriminants
const OPTION_STRING: u8 = 3;
const OPTION_USER: u8 = 6;

fn command_definitions() -> serde_json::Value {
    json!([
        {
            "name": "register",
            "description": "Register or update your MapleStory IGN",
            "options": [{
                "type": OPTION_STRING,
                "name": "ign",
                "description": "Your MapleStory In-Game Name",
                "required": true
            }]
        },
        {
            "name": "whois",
            "description": "Look up someone's MapleStory IGN",
            "options": [{
                "type": OPTION_USER,
                "name": "user",
                "description": "Discord user to look up",
                "required": true
            }]
        },
        {
            "name": "needcarry",
            "description": "Request a carry for a boss",
            "options": [
                {
                    "type": OPTION_STRING,
                    "name": "boss",
                    "description": "Which boss you need help with",
                    "required": true
                },
                {
                    "type": OPTION_STRING,
                    "name": "notes",
                    "description": "Additional notes (optional)",
                    "required": false
                }
            ]
        },
        {
            "name": "guildlist",
            "description": "Show all registered guild members"
        }
    ])
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = try_init_tracing();
    let _ = dotenvy::dotenv();

    let token = std::env::var("DISCORD_TOKEN").context("DISCORD_TOKEN not set")?;
    let application_id = std::env::var("APPLICATION_ID").context("APPLICATION_ID not set")?;

    let url = format!("https://discord.com/api/v10/applications/{application_id}/commands");
    let client = reqwest::Client::new();

    let response = client
        .put(&url)
        .header("Authorization", format!("Bot {token}"))
        .json(&command_definitions())
        .send()
        .await
        .context("command registration request failed")?;

    if response.status().is_success() {
        let registered: Vec<serde_json::Value> = response.json().await?;
        let names: Vec<&str> = registered
            .iter()
            .filter_map(|cmd| cmd["name"].as_str())
            .collect();
        info!(count = names.len(), commands = ?names, "Registered slash commands");
        Ok(())
    } else {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        error!(%status, %body, "Failed to register commands");
        anyhow::bail!("command registration failed with status {status}")
    }
}
