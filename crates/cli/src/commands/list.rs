use dns_failover_application::ports::MonitorTargetRepository;
use dns_failover_infrastructure::repositories::SqliteMonitorTargetRepository;
use sqlx::SqlitePool;

pub async fn list(pool: SqlitePool) -> anyhow::Result<()> {
    let repo = SqliteMonitorTargetRepository::new(pool);
    let scan = repo.scan().await?;

    println!(
        "{:<40} {:<12} {:<22} {:>9} {:>9}  CHANGED",
        "TARGET", "STATUS", "STANDBY", "FAILOVER", "FAILBACK"
    );
    for target in &scan.targets {
        let changed = target
            .status_changed_at
            .map(|ts| ts.to_rfc3339())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<40} {:<12} {:<22} {:>9} {:>9}  {}",
            target.target_name,
            target.status,
            target.standby_instance_id,
            target.failover_changeset.len(),
            target.failback_changeset.len(),
            changed
        );
    }

    for malformed in &scan.malformed {
        println!("{:<40} MALFORMED    {}", malformed.target_name, malformed.reason);
    }

    Ok(())
}
