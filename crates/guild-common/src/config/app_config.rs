//! Application configuration structs
//!
//! Loads configuration from environment variables. Everything the bot needs
//! is gathered here once at startup and passed down explicitly; there are no
//! ambient globals.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub redis: RedisConfig,
    pub discord: DiscordConfig,
    pub webhooks: WebhookConfig,
    pub reminder: ReminderConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RedisConfig {
    pub url: String,
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
}

/// Discord-side configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Hex-encoded ed25519 public key used to verify interaction signatures
    pub public_key: String,
    /// Role id that earns the cosmetic officer badge in `/whois`
    #[serde(default)]
    pub officer_role_id: Option<String>,
}

/// Outbound webhook endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Carry-request channel; forwarding is disabled when unset
    #[serde(default)]
    pub carry_channel: Option<String>,
    /// Weekly boss reminder; the reminder loop is disabled when unset
    #[serde(default)]
    pub boss_reminder: Option<String>,
    /// Bound on every outbound webhook call, in seconds
    #[serde(default = "default_webhook_timeout_secs")]
    pub timeout_secs: u64,
}

/// Weekly reminder schedule
#[derive(Debug, Clone, Deserialize)]
pub struct ReminderConfig {
    /// Cron expression the reminder loop expects; anything else disables it
    #[serde(default = "default_reminder_cron")]
    pub cron: String,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_redis_max_connections() -> u32 {
    16
}

fn default_webhook_timeout_secs() -> u64 {
    5
}

fn default_reminder_cron() -> String {
    "0 0 * * 4".to_string()
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| default_host()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .ok_or(ConfigError::MissingVar("SERVER_PORT"))?,
            },
            redis: RedisConfig {
                url: env::var("REDIS_URL").map_err(|_| ConfigError::MissingVar("REDIS_URL"))?,
                max_connections: env::var("REDIS_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_redis_max_connections),
            },
            discord: DiscordConfig {
                public_key: env::var("DISCORD_PUBLIC_KEY")
                    .map_err(|_| ConfigError::MissingVar("DISCORD_PUBLIC_KEY"))?,
                officer_role_id: env::var("OFFICER_ROLE_ID").ok().filter(|s| !s.is_empty()),
            },
            webhooks: WebhookConfig {
                carry_channel: env::var("CARRY_CHANNEL_WEBHOOK").ok().filter(|s| !s.is_empty()),
                boss_reminder: env::var("BOSS_REMINDER_WEBHOOK").ok().filter(|s| !s.is_empty()),
                timeout_secs: env::var("WEBHOOK_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_webhook_timeout_secs),
            },
            reminder: ReminderConfig {
                cron: env::var("REMINDER_CRON").unwrap_or_else(|_| default_reminder_cron()),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
}
