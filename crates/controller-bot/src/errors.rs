//! Error types for the controller bot.
//!
//! Control failures carry enough context to render the single user-facing
//! message the dispatcher relays back to the channel; everything else about
//! them goes to the log.

use thiserror::Error;

use crate::commands::ControlAction;

/// Errors from controlling a remote bot endpoint.
#[derive(Debug, Error)]
pub enum ControlError {
    /// The endpoint could not be reached (connection refused, timeout, DNS
    /// failure) or the response body could not be read.
    #[error("failed to {action} {bot} bot: {source}")]
    Unreachable {
        bot: String,
        action: ControlAction,
        #[source]
        source: reqwest::Error,
    },

    /// The endpoint answered with a non-2xx status.
    #[error("HTTP error! Status: {0}")]
    BadStatus(u16),
}

impl ControlError {
    /// User-facing rendering, relayed verbatim to the originating channel.
    pub fn user_message(&self) -> String {
        match self {
            ControlError::Unreachable { bot, action, .. } => {
                format!("Failed to {} {} bot.", action, bot)
            }
            ControlError::BadStatus(code) => format!("HTTP error! Status: {}", code),
        }
    }
}

/// Errors from relaying a message back to a Discord channel.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Discord send failed: {0}")]
    Send(#[from] serenity::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    // A real reqwest::Error cannot be constructed directly, so the
    // Unreachable variant is built from an actual failed connect.
    async fn connect_error() -> reqwest::Error {
        reqwest::Client::new()
            .post("http://127.0.0.1:1/on")
            .send()
            .await
            .unwrap_err()
    }

    #[tokio::test]
    async fn test_unreachable_user_message() {
        let err = ControlError::Unreachable {
            bot: "reasoning".to_string(),
            action: ControlAction::Stop,
            source: connect_error().await,
        };
        assert_eq!(err.user_message(), "Failed to off reasoning bot.");
    }

    #[tokio::test]
    async fn test_unreachable_display_includes_source() {
        let err = ControlError::Unreachable {
            bot: "assistant".to_string(),
            action: ControlAction::Start,
            source: connect_error().await,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("failed to on assistant bot:"), "{}", msg);
    }

    #[test]
    fn test_bad_status_user_message() {
        let err = ControlError::BadStatus(500);
        assert_eq!(err.user_message(), "HTTP error! Status: 500");
    }

    #[test]
    fn test_bad_status_display_matches_user_message() {
        let err = ControlError::BadStatus(404);
        assert_eq!(err.to_string(), err.user_message());
    }
}
