//! Serenity event handler implementation

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{error, info};

use crate::dispatcher::Dispatcher;
use crate::health::AppState;
use crate::relay::ChannelRelay;

pub struct Handler;

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Controller bot logged in as {}", ready.user.name);

        let data = ctx.data.read().await;
        if let Some(dispatcher) = data.get::<Dispatcher>() {
            info!("Available bots: {}", dispatcher.registry().listing());
        }
        if let Some(health) = data.get::<AppState>() {
            health.set_bot_username(ready.user.name.clone()).await;
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let dispatcher = {
            let data = ctx.data.read().await;
            match data.get::<Dispatcher>() {
                Some(d) => d.clone(),
                None => {
                    error!("Dispatcher not found in context data");
                    return;
                }
            }
        };

        let relay = ChannelRelay::new(ctx.http.clone());
        dispatcher
            .handle(&relay, msg.channel_id.get(), msg.author.bot, &msg.content)
            .await;
    }
}
