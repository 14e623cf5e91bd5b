use dns_failover_domain::{MonitorTarget, StatusUpdate};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::report::PassReport;
use crate::ports::{HealthProbe, MonitorTargetRepository, Notifier};
use crate::use_cases::failover::{EvaluateTargetUseCase, TargetEvaluation};

/// One reconciliation pass over every stored target.
///
/// Targets are probed and evaluated sequentially so that changesets touching
/// the same records never interleave. Status updates are collected and
/// committed in one batch once all targets have been handled.
pub struct RunReconciliationPassUseCase {
    repo: Arc<dyn MonitorTargetRepository>,
    probe: Arc<dyn HealthProbe>,
    evaluator: Arc<EvaluateTargetUseCase>,
    notifier: Arc<dyn Notifier>,
}

impl RunReconciliationPassUseCase {
    pub fn new(
        repo: Arc<dyn MonitorTargetRepository>,
        probe: Arc<dyn HealthProbe>,
        evaluator: Arc<EvaluateTargetUseCase>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            repo,
            probe,
            evaluator,
            notifier,
        }
    }

    /// Scan, evaluate, commit. Never fails: every error is logged, notified
    /// and folded into the report.
    #[instrument(skip(self))]
    pub async fn execute(&self) -> PassReport {
        let mut report = PassReport::default();

        let scan = match self.repo.scan().await {
            Ok(scan) => scan,
            Err(e) => {
                error!(error = %e, "Failed to load monitor targets, pass skipped");
                self.send(
                    "Reconciliation pass skipped: targets could not be loaded",
                    &e.to_string(),
                )
                .await;
                report.scan_error = Some(e.to_string());
                return report;
            }
        };

        for malformed in &scan.malformed {
            warn!(
                target = %malformed.target_name,
                reason = %malformed.reason,
                "Skipping malformed monitor target"
            );
            let message = format!(
                "Monitor target {} skipped: stored configuration is invalid",
                malformed.target_name
            );
            self.send(&message, &malformed.reason).await;
            report.malformed += 1;
        }

        let evaluations = self.run(&scan.targets).await;
        for evaluation in &evaluations {
            report.record(evaluation);
        }

        let updates: Vec<StatusUpdate> = evaluations
            .into_iter()
            .filter_map(|evaluation| evaluation.update)
            .collect();

        if !updates.is_empty() {
            match self.repo.commit(&updates).await {
                Ok(written) => {
                    if written < updates.len() {
                        warn!(
                            written,
                            staged = updates.len(),
                            "Some status updates matched no stored target"
                        );
                    }
                    report.committed = written;
                }
                Err(e) => {
                    error!(
                        error = %e,
                        updates = updates.len(),
                        "Failed to persist status updates; external changes stay in place"
                    );
                    let names = updates
                        .iter()
                        .map(|u| u.target_name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ");
                    self.send(
                        &format!("Failed to persist status for {}", names),
                        &e.to_string(),
                    )
                    .await;
                    report.commit_error = Some(e.to_string());
                }
            }
        }

        info!(
            evaluated = report.evaluated,
            transitions = report.transitions(),
            failed_over = report.failed_over,
            failed_back = report.failed_back,
            aborted = report.aborted,
            malformed = report.malformed,
            committed = report.committed,
            "Reconciliation pass completed"
        );

        report
    }

    /// Probe and evaluate each target in order. A failing target never stops
    /// the ones after it.
    pub async fn run(&self, targets: &[MonitorTarget]) -> Vec<TargetEvaluation> {
        let mut evaluations = Vec::with_capacity(targets.len());
        for target in targets {
            let healthy = self.probe.probe(&target.target_name).await;
            let evaluation = self.evaluator.execute(target, healthy).await;
            evaluations.push(evaluation);
        }
        evaluations
    }

    async fn send(&self, message: &str, detail: &str) {
        if let Err(e) = self.notifier.notify(message, detail).await {
            warn!(error = %e, message = %message, "Notification delivery failed");
        }
    }
}
