mod evaluate_target;
mod outcome;

pub use evaluate_target::EvaluateTargetUseCase;
pub use outcome::{TargetEvaluation, TransitionDirection, TransitionOutcome, TransitionStage};
