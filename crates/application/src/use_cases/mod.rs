pub mod changesets;
pub mod failover;
pub mod reconciliation;

// Re-export use cases
pub use changesets::{ApplyChangesetUseCase, ChangesetReport, DirectiveOutcome, DirectiveResult};
pub use failover::{
    EvaluateTargetUseCase, TargetEvaluation, TransitionDirection, TransitionOutcome,
    TransitionStage,
};
pub use reconciliation::{PassReport, RunReconciliationPassUseCase};
