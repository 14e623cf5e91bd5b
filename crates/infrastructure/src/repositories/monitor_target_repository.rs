use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dns_failover_application::ports::MonitorTargetRepository;
use dns_failover_domain::{
    Changeset, DomainError, FailoverStatus, MalformedTarget, MonitorTarget, StatusUpdate,
    TargetScan,
};
use sqlx::SqlitePool;
use tracing::{debug, error, instrument, warn};

type MonitorTargetRow = (String, String, String, String, String, Option<String>);

pub struct SqliteMonitorTargetRepository {
    pool: SqlitePool,
}

impl SqliteMonitorTargetRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_target(row: MonitorTargetRow) -> Result<MonitorTarget, MalformedTarget> {
        let (
            target_name,
            status,
            standby_instance_id,
            failover_changeset,
            failback_changeset,
            status_changed_at,
        ) = row;

        let malformed = |reason: String| MalformedTarget {
            target_name: target_name.clone(),
            reason,
        };

        let status = status
            .parse::<FailoverStatus>()
            .map_err(|e| malformed(format!("status: {}", e)))?;
        let failover_changeset = Changeset::parse(&failover_changeset)
            .map_err(|e| malformed(format!("failover_changeset: {}", e)))?;
        let failback_changeset = Changeset::parse(&failback_changeset)
            .map_err(|e| malformed(format!("failback_changeset: {}", e)))?;
        let status_changed_at = status_changed_at
            .map(|ts| {
                DateTime::parse_from_rfc3339(&ts)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| malformed(format!("status_changed_at: {}", e)))
            })
            .transpose()?;

        Ok(MonitorTarget {
            target_name,
            status,
            standby_instance_id,
            failover_changeset,
            failback_changeset,
            status_changed_at,
        })
    }
}

#[async_trait]
impl MonitorTargetRepository for SqliteMonitorTargetRepository {
    #[instrument(skip(self))]
    async fn scan(&self) -> Result<TargetScan, DomainError> {
        let rows = sqlx::query_as::<_, MonitorTargetRow>(
            "SELECT target_name, status, standby_instance_id, failover_changeset, failback_changeset, status_changed_at
             FROM monitor_targets ORDER BY target_name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to scan monitor targets");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut scan = TargetScan::default();
        for row in rows {
            match Self::row_to_target(row) {
                Ok(target) => scan.targets.push(target),
                Err(malformed) => {
                    warn!(
                        target = %malformed.target_name,
                        reason = %malformed.reason,
                        "Stored monitor target is malformed"
                    );
                    scan.malformed.push(malformed);
                }
            }
        }

        debug!(
            targets = scan.targets.len(),
            malformed = scan.malformed.len(),
            "Monitor targets scanned"
        );
        Ok(scan)
    }

    #[instrument(skip(self, updates), fields(updates = updates.len()))]
    async fn commit(&self, updates: &[StatusUpdate]) -> Result<usize, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin status commit");
            DomainError::DatabaseError(e.to_string())
        })?;

        let mut written = 0;
        for update in updates {
            let result = sqlx::query(
                "UPDATE monitor_targets SET status = ?, status_changed_at = ? WHERE target_name = ?",
            )
            .bind(update.status.as_str())
            .bind(update.status_changed_at.to_rfc3339())
            .bind(&update.target_name)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, target = %update.target_name, "Failed to write status");
                DomainError::DatabaseError(e.to_string())
            })?;

            if result.rows_affected() == 0 {
                // Deleted since the scan; the rest of the batch still lands.
                warn!(
                    target = %update.target_name,
                    "Monitor target no longer exists, status update skipped"
                );
                continue;
            }
            written += 1;
        }

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit status updates");
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(written, skipped = updates.len() - written, "Status updates committed");
        Ok(written)
    }

    #[instrument(skip(self, target), fields(target = %target.target_name))]
    async fn upsert(&self, target: &MonitorTarget) -> Result<(), DomainError> {
        MonitorTarget::validate_name(&target.target_name).map_err(DomainError::ConfigError)?;

        let failover = target.failover_changeset.to_json()?;
        let failback = target.failback_changeset.to_json()?;

        sqlx::query(
            "INSERT INTO monitor_targets
                (target_name, status, standby_instance_id, failover_changeset, failback_changeset, status_changed_at)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(target_name) DO UPDATE SET
                status = excluded.status,
                standby_instance_id = excluded.standby_instance_id,
                failover_changeset = excluded.failover_changeset,
                failback_changeset = excluded.failback_changeset,
                status_changed_at = excluded.status_changed_at",
        )
        .bind(&target.target_name)
        .bind(target.status.as_str())
        .bind(&target.standby_instance_id)
        .bind(&failover)
        .bind(&failback)
        .bind(target.status_changed_at.map(|ts| ts.to_rfc3339()))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to upsert monitor target");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }
}
