use async_trait::async_trait;
use dns_failover_domain::{DomainError, MonitorTarget, StatusUpdate, TargetScan};

#[async_trait]
pub trait MonitorTargetRepository: Send + Sync {
    /// Full scan. Rows that fail to load are reported, not dropped silently.
    async fn scan(&self) -> Result<TargetScan, DomainError>;

    /// Writes the updates in one transaction and returns how many rows were
    /// written. Updates naming a target that no longer exists are skipped.
    async fn commit(&self, updates: &[StatusUpdate]) -> Result<usize, DomainError>;

    async fn upsert(&self, target: &MonitorTarget) -> Result<(), DomainError>;
}
