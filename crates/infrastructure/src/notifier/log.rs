use async_trait::async_trait;
use dns_failover_application::ports::Notifier;
use dns_failover_domain::DomainError;
use tracing::info;

/// Fallback notifier when no webhook is configured.
#[derive(Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, message: &str, detail: &str) -> Result<(), DomainError> {
        info!(notification = %message, detail = %detail, "Notification");
        Ok(())
    }
}
