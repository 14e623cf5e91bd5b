use crate::di::{Adapters, UseCases};
use dns_failover_domain::Config;
use dns_failover_jobs::{JobRunner, ReconciliationJob};
use sqlx::SqlitePool;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

pub async fn run(config: &Config, pool: SqlitePool) -> anyhow::Result<()> {
    config.validate()?;

    let adapters = Adapters::new(config, pool)?;
    let use_cases = UseCases::new(&adapters);

    let shutdown = CancellationToken::new();
    let job = ReconciliationJob::new(use_cases.reconcile.clone())
        .with_interval(config.reconciler.interval_secs);

    let handles = JobRunner::new()
        .with_reconciliation(job)
        .with_shutdown_token(shutdown.clone())
        .start()
        .await;

    tokio::signal::ctrl_c().await?;
    info!("Shutdown requested, waiting for the current pass to finish");
    shutdown.cancel();

    for handle in handles {
        if let Err(e) = handle.await {
            error!(error = %e, "Background job ended abnormally");
        }
    }

    info!("Shutdown complete");
    Ok(())
}
