use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which delivery path currently carries traffic for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailoverStatus {
    /// Primary path is live.
    #[default]
    Normal,
    /// Standby path is live.
    FailedOver,
}

impl FailoverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailoverStatus::Normal => "normal",
            FailoverStatus::FailedOver => "failed_over",
        }
    }

    pub fn is_failed_over(&self) -> bool {
        matches!(self, FailoverStatus::FailedOver)
    }
}

impl fmt::Display for FailoverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FailoverStatus {
    type Err = String;

    /// Accepts the legacy `"0"` / `"1"` flags alongside the named forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" | "0" => Ok(FailoverStatus::Normal),
            "failed_over" | "failedover" | "1" => Ok(FailoverStatus::FailedOver),
            other => Err(format!("unknown failover status '{}'", other)),
        }
    }
}
