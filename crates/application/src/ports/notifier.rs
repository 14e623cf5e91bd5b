use async_trait::async_trait;
use dns_failover_domain::DomainError;

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, message: &str, detail: &str) -> Result<(), DomainError>;
}
