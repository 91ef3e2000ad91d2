//! Message relay back to the originating Discord channel.

use std::sync::Arc;

use serenity::model::id::ChannelId;
use tracing::error;

use crate::errors::RelayError;

/// Trait over the send-message primitive.
/// Implemented by `ChannelRelay` (real Discord) and `MockRelay` (in-memory, tests).
#[allow(async_fn_in_trait)]
pub trait Relay {
    async fn send(&self, channel_id: u64, text: &str) -> Result<(), RelayError>;
}

/// Relay backed by serenity's HTTP client.
///
/// Failures are logged here and returned; callers treat relay as best-effort
/// notification and do not escalate further.
#[derive(Clone)]
pub struct ChannelRelay {
    http: Arc<serenity::http::Http>,
}

impl ChannelRelay {
    pub fn new(http: Arc<serenity::http::Http>) -> Self {
        Self { http }
    }
}

impl Relay for ChannelRelay {
    async fn send(&self, channel_id: u64, text: &str) -> Result<(), RelayError> {
        if let Err(e) = ChannelId::new(channel_id).say(&self.http, text).await {
            error!("Error sending message to channel {}: {}", channel_id, e);
            return Err(RelayError::Send(e));
        }
        Ok(())
    }
}

/// In-memory relay that records every send, in order. Use in tests instead of
/// a real `ChannelRelay`.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MockRelay {
    messages: Arc<std::sync::Mutex<Vec<(u64, String)>>>,
}

#[cfg(test)]
impl MockRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured (channel, text) pairs in send order.
    pub fn sent(&self) -> Vec<(u64, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Return true if nothing has been relayed.
    pub fn is_empty(&self) -> bool {
        self.messages.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
impl Relay for MockRelay {
    async fn send(&self, channel_id: u64, text: &str) -> Result<(), RelayError> {
        self.messages
            .lock()
            .unwrap()
            .push((channel_id, text.to_string()));
        Ok(())
    }
}
