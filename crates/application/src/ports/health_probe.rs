use async_trait::async_trait;

/// Reduces one resolution attempt against a target endpoint to a boolean.
///
/// Implementations never fail: every transport, protocol or provider error
/// is logged and reported as unhealthy.
#[async_trait]
pub trait HealthProbe: Send + Sync {
    async fn probe(&self, target_name: &str) -> bool;
}
