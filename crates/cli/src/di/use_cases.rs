use super::Adapters;
use dns_failover_application::use_cases::{
    ApplyChangesetUseCase, EvaluateTargetUseCase, RunReconciliationPassUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub reconcile: Arc<RunReconciliationPassUseCase>,
}

impl UseCases {
    pub fn new(adapters: &Adapters) -> Self {
        let applier = Arc::new(ApplyChangesetUseCase::new(adapters.provider.clone()));
        let evaluator = Arc::new(EvaluateTargetUseCase::new(
            applier,
            adapters.compute.clone(),
            adapters.notifier.clone(),
        ));
        let reconcile = Arc::new(RunReconciliationPassUseCase::new(
            adapters.repo.clone(),
            adapters.probe.clone(),
            evaluator,
            adapters.notifier.clone(),
        ));

        Self { reconcile }
    }
}
