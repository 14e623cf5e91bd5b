use crate::di::{Adapters, UseCases};
use dns_failover_domain::Config;
use sqlx::SqlitePool;

/// Exit status reflects start-up only; per-target failures are in the report.
pub async fn once(config: &Config, pool: SqlitePool) -> anyhow::Result<()> {
    config.validate()?;

    let adapters = Adapters::new(config, pool)?;
    let use_cases = UseCases::new(&adapters);

    let report = use_cases.reconcile.execute().await;

    println!("evaluated:   {}", report.evaluated);
    println!("unchanged:   {}", report.unchanged);
    println!("transitions: {}", report.transitions());
    println!("failed over: {}", report.failed_over);
    println!("failed back: {}", report.failed_back);
    println!("aborted:     {}", report.aborted);
    println!("malformed:   {}", report.malformed);
    println!("committed:   {}", report.committed);
    if let Some(e) = &report.scan_error {
        println!("scan error:  {}", e);
    }
    if let Some(e) = &report.commit_error {
        println!("commit error: {}", e);
    }

    Ok(())
}
