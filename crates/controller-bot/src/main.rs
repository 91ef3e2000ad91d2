//! Discord Controller Bot
//!
//! Listens for control commands in Discord channels and starts or stops
//! remote bot processes by POSTing to their control endpoints, relaying the
//! result back to the channel.

mod commands;
mod config;
mod controller;
mod dispatcher;
mod errors;
mod handlers;
mod health;
mod registry;
mod relay;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::controller::BotController;
use crate::dispatcher::Dispatcher;
use crate::handlers::Handler;
use crate::health::AppState;
use crate::registry::EndpointRegistry;

/// Discord Controller Bot CLI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/controller-bot.toml")]
    config: String,

    /// Discord bot token (overrides config file)
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    bot_token: Option<String>,

    /// Control URL for the reasoning bot (overrides config file)
    #[arg(long, env = "DISCORD_BOT_URL")]
    bot_url: Option<String>,

    /// Health check server port
    #[arg(long, env = "HEALTH_CHECK_PORT", default_value = "3001")]
    health_port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "controller_bot=debug,info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Discord Controller Bot");

    // Parse CLI arguments
    let args = Args::parse();

    // Load configuration
    let mut config = if std::path::Path::new(&args.config).exists() {
        info!("Loading config from file: {}", args.config);
        Config::from_file(&args.config)?
    } else {
        info!("Config file not found, loading from environment");
        Config::from_env()?
    };

    if let Some(bot_token) = args.bot_token {
        config.discord.bot_token = bot_token;
    }
    if let Some(bot_url) = args.bot_url {
        if let Some(bot) = config.bots.iter_mut().find(|b| b.name == "reasoning") {
            bot.url = bot_url;
        }
    }

    // Warn about suspicious endpoint configuration
    for w in config.warnings() {
        warn!("Config: {}", w);
    }

    // Build the fixed endpoint registry; it is never mutated after this point.
    let registry = Arc::new(EndpointRegistry::new(config.endpoints()));
    info!("Available bots: {}", registry.listing());

    let dispatcher = Arc::new(Dispatcher::new(registry.clone(), BotController::new()));

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&config.discord.bot_token, intents)
        .event_handler(Handler)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create Discord client: {}", e))?;

    // Set up health check state before inserting into client data
    let health_state = AppState::new(registry.names().map(String::from).collect());

    // Insert dispatcher and health state into client data
    {
        let mut data = client.data.write().await;
        data.insert::<Dispatcher>(dispatcher);
        data.insert::<AppState>(health_state.clone());
    }

    // Start health check server
    let health_port = args.health_port;
    tokio::spawn(async move {
        if let Err(e) = health::start_health_server(health_state, health_port).await {
            error!("Health server error: {}", e);
        }
    });

    // Graceful shutdown: close all shards on SIGTERM or Ctrl+C.
    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};
            let mut sigterm = signal(SignalKind::terminate()).expect("SIGTERM handler");
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        #[cfg(not(unix))]
        {
            tokio::signal::ctrl_c().await.ok();
        }
        info!("Shutdown signal received, stopping Discord client...");
        shard_manager.shutdown_all().await;
    });

    info!("Starting Discord gateway connection...");

    // Start the Discord client (blocks until all shards are stopped)
    client
        .start()
        .await
        .map_err(|e| anyhow::anyhow!("Discord client error: {}", e))?;

    info!("Controller bot stopped");
    Ok(())
}
