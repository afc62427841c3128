//! Configuration loading

mod app_config;

pub use app_config::{
    AppConfig, ConfigError, DiscordConfig, RedisConfig, ReminderConfig, ServerConfig,
    WebhookConfig,
};
