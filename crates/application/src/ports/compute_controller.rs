use async_trait::async_trait;
use dns_failover_domain::DomainError;

/// Starts and stops standby instances. Calls return once the request is
/// accepted; instance state is not polled.
#[async_trait]
pub trait ComputeController: Send + Sync {
    async fn start(&self, instance_id: &str) -> Result<(), DomainError>;

    async fn stop(&self, instance_id: &str) -> Result<(), DomainError>;
}
