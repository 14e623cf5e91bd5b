use dns_failover_domain::config::DatabaseConfig;
use dns_failover_infrastructure::database::create_pool;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Initializing database: {}", cfg.path);

    let pool = create_pool(cfg).await.map_err(|e| {
        error!("Failed to initialize database: {}", e);
        anyhow::anyhow!(e)
    })?;

    info!(
        "Database initialized successfully (max connections={})",
        cfg.max_connections
    );

    Ok(pool)
}
