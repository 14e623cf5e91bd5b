use crate::use_cases::failover::{TargetEvaluation, TransitionOutcome};

/// Tally of a single reconciliation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassReport {
    pub evaluated: usize,
    pub unchanged: usize,
    pub failed_over: usize,
    pub failed_back: usize,
    pub aborted: usize,
    pub malformed: usize,
    /// Status updates durably written at the end of the pass.
    pub committed: usize,
    pub scan_error: Option<String>,
    pub commit_error: Option<String>,
}

impl PassReport {
    pub fn record(&mut self, evaluation: &TargetEvaluation) {
        self.evaluated += 1;
        match evaluation.outcome {
            TransitionOutcome::Unchanged => self.unchanged += 1,
            TransitionOutcome::FailedOver { .. } => self.failed_over += 1,
            TransitionOutcome::FailedBack { .. } => self.failed_back += 1,
            TransitionOutcome::Aborted { .. } => self.aborted += 1,
        }
    }

    pub fn transitions(&self) -> usize {
        self.failed_over + self.failed_back
    }

    pub fn is_clean(&self) -> bool {
        self.aborted == 0
            && self.malformed == 0
            && self.scan_error.is_none()
            && self.commit_error.is_none()
    }
}
