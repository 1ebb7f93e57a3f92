//! Slack incoming-webhook delivery.

use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::error::{NotifyError, Result};
use crate::message::NotificationDocument;

/// Environment variable holding the Slack webhook URL.
pub const ENV_SLACK_HOOK_URL: &str = "SLACK_HOOK_URL";

/// Posts notification documents to a Slack incoming webhook.
pub struct SlackWebhook {
    webhook_url: Option<String>,
    client: reqwest::Client,
}

impl SlackWebhook {
    /// Create a webhook sender. An empty URL counts as not configured.
    #[must_use]
    pub fn new(webhook_url: Option<String>) -> Self {
        Self {
            webhook_url: webhook_url.filter(|url| !url.trim().is_empty()),
            client: reqwest::Client::new(),
        }
    }

    /// Check if a webhook URL is configured.
    #[must_use]
    pub fn enabled(&self) -> bool {
        self.webhook_url.is_some()
    }

    /// Send the document to the webhook.
    ///
    /// Exactly one request is made. Anything other than `200 OK` is an error.
    ///
    /// # Errors
    ///
    /// - [`NotifyError::MissingConfiguration`] when no webhook URL is set
    /// - [`NotifyError::Http`] when the request cannot be sent
    /// - [`NotifyError::DeliveryFailed`] with the status and body on a non-200 reply
    pub async fn send(&self, document: &NotificationDocument) -> Result<()> {
        let webhook_url = self
            .webhook_url
            .as_ref()
            .ok_or(NotifyError::MissingConfiguration(ENV_SLACK_HOOK_URL))?;

        debug!(channel = "slack", "Sending notification");

        let response = self.client.post(webhook_url).json(document).send().await?;

        let status = response.status();
        if status == StatusCode::OK {
            debug!(channel = "slack", "Notification sent successfully");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();

        warn!(
            channel = "slack",
            status = %status,
            body = %body,
            "Slack webhook request failed"
        );

        Err(NotifyError::DeliveryFailed {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_url_is_not_configured() {
        assert!(!SlackWebhook::new(None).enabled());
        assert!(!SlackWebhook::new(Some("  ".to_string())).enabled());
        assert!(SlackWebhook::new(Some("https://hooks.slack.com/services/T/B/X".to_string())).enabled());
    }

    #[tokio::test]
    async fn test_send_without_url_fails_before_request() {
        let webhook = SlackWebhook::new(None);
        let document = NotificationDocument {
            attachments: vec![],
        };

        let err = webhook.send(&document).await.unwrap_err();
        assert!(matches!(err, NotifyError::MissingConfiguration("SLACK_HOOK_URL")));
    }
}
