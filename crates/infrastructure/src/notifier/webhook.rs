use async_trait::async_trait;
use dns_failover_application::ports::Notifier;
use dns_failover_domain::DomainError;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, instrument};

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Posts notifications to a chat webhook as `{"text": ...}`.
pub struct WebhookNotifier {
    http: reqwest::Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: &str, timeout_secs: u64) -> Result<Self, DomainError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| {
                DomainError::Notification(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    fn format_text(message: &str, detail: &str) -> String {
        if detail.is_empty() {
            message.to_string()
        } else {
            format!("{}\n{}", message, detail)
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    #[instrument(skip(self, detail))]
    async fn notify(&self, message: &str, detail: &str) -> Result<(), DomainError> {
        let text = Self::format_text(message, detail);

        let response = self
            .http
            .post(&self.url)
            .json(&WebhookPayload { text: &text })
            .send()
            .await
            .map_err(|e| DomainError::Notification(format!("webhook request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Notification(format!(
                "webhook returned HTTP {}",
                status
            )));
        }

        debug!("Notification delivered");
        Ok(())
    }
}
