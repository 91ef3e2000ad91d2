//! Per-message command dispatch.
//!
//! Stateless: each inbound message is parsed, resolved against the endpoint
//! registry, and turned into at most one control call plus a channel reply.

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod dispatcher_tests;

use std::sync::Arc;

use serenity::prelude::TypeMapKey;
use tracing::{error, info};

use crate::commands::{self, Command};
use crate::controller::BotController;
use crate::registry::EndpointRegistry;
use crate::relay::Relay;

pub struct Dispatcher {
    registry: Arc<EndpointRegistry>,
    controller: BotController,
}

impl TypeMapKey for Dispatcher {
    type Value = Arc<Dispatcher>;
}

impl Dispatcher {
    pub fn new(registry: Arc<EndpointRegistry>, controller: BotController) -> Self {
        Self {
            registry,
            controller,
        }
    }

    pub fn registry(&self) -> &EndpointRegistry {
        &self.registry
    }

    /// Handle one inbound message.
    ///
    /// Relay failures are logged inside the relay and deliberately dropped
    /// here; a reply that cannot be delivered is not worth crashing the
    /// handler over.
    pub async fn handle<R: Relay>(
        &self,
        relay: &R,
        channel_id: u64,
        author_is_bot: bool,
        content: &str,
    ) {
        // Ignore other automated accounts to avoid feedback loops.
        if author_is_bot {
            return;
        }

        let Some(command) = commands::parse(content) else {
            return;
        };

        match command {
            Command::Control { bot: None, .. } => {
                let text = format!(
                    "Please specify the bot name. Available bots: {}",
                    self.registry.listing()
                );
                let _ = relay.send(channel_id, &text).await;
            }
            Command::Control {
                action,
                bot: Some(name),
            } => {
                let Some(endpoint) = self.registry.find(&name) else {
                    let text = format!(
                        "Bot \"{}\" not found. Available bots: {}",
                        name,
                        self.registry.listing()
                    );
                    let _ = relay.send(channel_id, &text).await;
                    return;
                };

                info!("Received {} command for {} bot", action, endpoint.name);
                match self.controller.control(endpoint, action).await {
                    Ok(body) => {
                        let _ = relay.send(channel_id, &body).await;
                    }
                    Err(e) => {
                        let _ = relay.send(channel_id, &e.user_message()).await;
                        error!("Error controlling {} bot: {}", endpoint.name, e);
                    }
                }
            }
            Command::ListBots => {
                let text = format!("Available bots: {}", self.registry.listing());
                let _ = relay.send(channel_id, &text).await;
            }
        }
    }
}
