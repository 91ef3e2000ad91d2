//! HTTP control client for remote bot endpoints.

use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::commands::ControlAction;
use crate::errors::ControlError;
use crate::registry::Endpoint;

/// Issues lifecycle requests against bot control endpoints.
///
/// One POST per command, no retries; the client's default connect and
/// response timeouts are the only deadline.
#[derive(Clone)]
pub struct BotController {
    http: reqwest::Client,
}

impl BotController {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
        }
    }

    /// POST `<endpoint.url>/<action>` with an empty JSON body and return the
    /// response body as text. The body is fully buffered before return.
    pub async fn control(
        &self,
        endpoint: &Endpoint,
        action: ControlAction,
    ) -> Result<String, ControlError> {
        let url = format!("{}/{}", endpoint.url, action);
        debug!("Controlling {} bot: POST {}", endpoint.name, url);

        let resp = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .map_err(|e| ControlError::Unreachable {
                bot: endpoint.name.clone(),
                action,
                source: e,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ControlError::BadStatus(status.as_u16()));
        }

        resp.text().await.map_err(|e| ControlError::Unreachable {
            bot: endpoint.name.clone(),
            action,
            source: e,
        })
    }
}

impl Default for BotController {
    fn default() -> Self {
        Self::new()
    }
}
