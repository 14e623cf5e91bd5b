use dns_failover_domain::StatusUpdate;
use std::fmt;

use crate::use_cases::changesets::ChangesetReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionDirection {
    Failover,
    Failback,
}

impl TransitionDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionDirection::Failover => "failover",
            TransitionDirection::Failback => "failback",
        }
    }
}

impl fmt::Display for TransitionDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step of a transition that can fail and end it early.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStage {
    ComputeStart,
    DnsApply,
    ComputeStop,
}

impl TransitionStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionStage::ComputeStart => "compute-start",
            TransitionStage::DnsApply => "dns-apply",
            TransitionStage::ComputeStop => "compute-stop",
        }
    }
}

impl fmt::Display for TransitionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    Unchanged,
    FailedOver { dns: ChangesetReport },
    FailedBack { dns: ChangesetReport },
    Aborted {
        direction: TransitionDirection,
        stage: TransitionStage,
        reason: String,
    },
}

/// What the state machine decided for one target in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetEvaluation {
    pub target_name: String,
    pub outcome: TransitionOutcome,
    /// Present only when a transition completed.
    pub update: Option<StatusUpdate>,
}

impl TargetEvaluation {
    pub fn unchanged(target_name: &str) -> Self {
        Self {
            target_name: target_name.to_string(),
            outcome: TransitionOutcome::Unchanged,
            update: None,
        }
    }
}
