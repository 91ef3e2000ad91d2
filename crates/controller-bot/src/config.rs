//! Configuration management for controller-bot

#[path = "config_tests.rs"]
mod config_tests;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;

use crate::registry::Endpoint;

/// Default URL for the assistant bot when `ASSISTANT_BOT_URL` is not set.
const DEFAULT_ASSISTANT_URL: &str = "https://your-assistant-bot-url.com/bot";

/// Read access to the process environment. Swapped for an in-memory map in
/// tests.
pub trait ReadEnv {
    fn var(&self, key: &str) -> Option<String>;
}

/// `ReadEnv` backed by the real process environment.
pub struct SystemEnv;

impl ReadEnv for SystemEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Complete bot configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub discord: DiscordBotConfig,
    /// Controllable bot endpoints, in the order they should be listed.
    #[serde(default)]
    pub bots: Vec<BotEndpointConfig>,
}

/// Discord bot specific configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscordBotConfig {
    /// Bot token from the Discord developer portal
    #[serde(default = "default_bot_token")]
    pub bot_token: String,
}

/// A single named control endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotEndpointConfig {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;

        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_impl(&SystemEnv)
    }

    pub fn from_env_impl<E: ReadEnv>(env: &E) -> Result<Self> {
        let bot_token = env
            .var("DISCORD_BOT_TOKEN")
            .context("DISCORD_BOT_TOKEN not set")?;

        // Default registry: the reasoning bot's URL comes from the
        // environment, the assistant bot's placeholder can be overridden.
        let bots = vec![
            BotEndpointConfig {
                name: "reasoning".to_string(),
                url: env.var("DISCORD_BOT_URL").unwrap_or_default(),
            },
            BotEndpointConfig {
                name: "assistant".to_string(),
                url: env
                    .var("ASSISTANT_BOT_URL")
                    .unwrap_or_else(|| DEFAULT_ASSISTANT_URL.to_string()),
            },
        ];

        Ok(Config {
            discord: DiscordBotConfig { bot_token },
            bots,
        })
    }

    /// Endpoints for the registry, in configuration order.
    pub fn endpoints(&self) -> Vec<Endpoint> {
        self.bots
            .iter()
            .map(|b| Endpoint {
                name: b.name.clone(),
                url: b.url.clone(),
            })
            .collect()
    }

    /// Warnings about suspicious configuration, surfaced at startup.
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if self.bots.is_empty() {
            warnings.push(
                "no bot endpoints configured; control commands will always report not found"
                    .to_string(),
            );
        }
        for bot in &self.bots {
            if bot.url.is_empty() {
                warnings.push(format!(
                    "bot '{}' has an empty control URL; !startbot/!stopbot will fail for it",
                    bot.name
                ));
            }
        }
        warnings
    }
}

fn default_bot_token() -> String {
    std::env::var("DISCORD_BOT_TOKEN").unwrap_or_default()
}
