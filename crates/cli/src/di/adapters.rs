use dns_failover_application::ports::{
    ComputeController, DnsProvider, HealthProbe, MonitorTargetRepository, Notifier,
};
use dns_failover_domain::{Config, DomainError};
use dns_failover_infrastructure::compute::CommandComputeController;
use dns_failover_infrastructure::dns::DotHealthProbe;
use dns_failover_infrastructure::notifier::{LogNotifier, WebhookNotifier};
use dns_failover_infrastructure::provider::CloudflareDnsProvider;
use dns_failover_infrastructure::repositories::SqliteMonitorTargetRepository;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::info;

/// Concrete implementations behind every port.
pub struct Adapters {
    pub repo: Arc<dyn MonitorTargetRepository>,
    pub probe: Arc<dyn HealthProbe>,
    pub provider: Arc<dyn DnsProvider>,
    pub compute: Arc<dyn ComputeController>,
    pub notifier: Arc<dyn Notifier>,
}

impl Adapters {
    pub fn new(config: &Config, pool: SqlitePool) -> Result<Self, DomainError> {
        let notifier: Arc<dyn Notifier> = match config.notifier.webhook_url.as_deref() {
            Some(url) => {
                info!("Notifications go to the configured webhook");
                Arc::new(WebhookNotifier::new(url, config.notifier.timeout_secs)?)
            }
            None => {
                info!("No webhook configured, notifications go to the log");
                Arc::new(LogNotifier::new())
            }
        };

        Ok(Self {
            repo: Arc::new(SqliteMonitorTargetRepository::new(pool)),
            probe: Arc::new(DotHealthProbe::new(&config.probe)?),
            provider: Arc::new(CloudflareDnsProvider::new(&config.provider)?),
            compute: Arc::new(CommandComputeController::new(&config.compute)?),
            notifier,
        })
    }
}
