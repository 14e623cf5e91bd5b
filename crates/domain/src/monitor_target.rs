use crate::changeset::Changeset;
use crate::failover_status::FailoverStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One DNS name under failover management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonitorTarget {
    pub target_name: String,
    #[serde(default)]
    pub status: FailoverStatus,
    pub standby_instance_id: String,
    #[serde(default)]
    pub failover_changeset: Changeset,
    #[serde(default)]
    pub failback_changeset: Changeset,
    #[serde(default)]
    pub status_changed_at: Option<DateTime<Utc>>,
}

impl MonitorTarget {
    pub fn new(
        target_name: impl Into<String>,
        standby_instance_id: impl Into<String>,
        failover_changeset: Changeset,
        failback_changeset: Changeset,
    ) -> Self {
        Self {
            target_name: target_name.into(),
            status: FailoverStatus::Normal,
            standby_instance_id: standby_instance_id.into(),
            failover_changeset,
            failback_changeset,
            status_changed_at: None,
        }
    }

    pub fn with_status(mut self, status: FailoverStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.trim().is_empty() {
            return Err("Target name cannot be empty".to_string());
        }
        if name.len() > 253 {
            return Err("Target name cannot exceed 253 characters".to_string());
        }
        Ok(())
    }
}

/// A status flip staged during a pass and written at commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub target_name: String,
    pub status: FailoverStatus,
    pub status_changed_at: DateTime<Utc>,
}

/// A stored row that could not be turned into a `MonitorTarget`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedTarget {
    pub target_name: String,
    pub reason: String,
}

/// Result of a full table scan.
#[derive(Debug, Clone, Default)]
pub struct TargetScan {
    pub targets: Vec<MonitorTarget>,
    pub malformed: Vec<MalformedTarget>,
}
