use dns_failover_application::ports::MonitorTargetRepository;
use dns_failover_domain::MonitorTarget;
use dns_failover_infrastructure::repositories::SqliteMonitorTargetRepository;
use sqlx::SqlitePool;
use tracing::info;

pub async fn import(pool: SqlitePool, file: &str) -> anyhow::Result<()> {
    let targets = read_targets(file).await?;

    let repo = SqliteMonitorTargetRepository::new(pool);
    for target in &targets {
        repo.upsert(target).await?;
        info!(target = %target.target_name, status = %target.status, "Monitor target imported");
    }

    println!("imported {} monitor target(s)", targets.len());
    Ok(())
}

async fn read_targets(file: &str) -> anyhow::Result<Vec<MonitorTarget>> {
    let contents = tokio::fs::read_to_string(file)
        .await
        .map_err(|e| anyhow::anyhow!("failed to read {}: {}", file, e))?;
    serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("invalid monitor targets in {}: {}", file, e))
}
