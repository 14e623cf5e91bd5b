use chrono::Utc;
use dns_failover_domain::{DomainError, FailoverStatus, MonitorTarget, StatusUpdate};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use super::outcome::{TargetEvaluation, TransitionDirection, TransitionOutcome, TransitionStage};
use crate::ports::{ComputeController, Notifier};
use crate::use_cases::changesets::{ApplyChangesetUseCase, ChangesetReport};

/// Failover state machine for a single target.
///
/// | status      | healthy | action   |
/// |-------------|---------|----------|
/// | normal      | yes     | none     |
/// | normal      | no      | failover |
/// | failed over | no      | none     |
/// | failed over | yes     | failback |
///
/// Failover starts the standby before pointing DNS at it; failback moves DNS
/// off the standby before stopping it. The first failing stage ends the
/// transition without staging a status change, so the next pass retries it.
pub struct EvaluateTargetUseCase {
    applier: Arc<ApplyChangesetUseCase>,
    compute: Arc<dyn ComputeController>,
    notifier: Arc<dyn Notifier>,
}

impl EvaluateTargetUseCase {
    pub fn new(
        applier: Arc<ApplyChangesetUseCase>,
        compute: Arc<dyn ComputeController>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            applier,
            compute,
            notifier,
        }
    }

    #[instrument(skip(self, target), fields(target = %target.target_name, status = %target.status))]
    pub async fn execute(&self, target: &MonitorTarget, healthy: bool) -> TargetEvaluation {
        match (target.status, healthy) {
            (FailoverStatus::Normal, true) | (FailoverStatus::FailedOver, false) => {
                TargetEvaluation::unchanged(&target.target_name)
            }
            (FailoverStatus::Normal, false) => self.fail_over(target).await,
            (FailoverStatus::FailedOver, true) => self.fail_back(target).await,
        }
    }

    async fn fail_over(&self, target: &MonitorTarget) -> TargetEvaluation {
        let direction = TransitionDirection::Failover;
        warn!(
            instance = %target.standby_instance_id,
            "Target unhealthy, failing over to standby"
        );

        if let Err(e) = self.compute.start(&target.standby_instance_id).await {
            return self
                .abort(target, direction, TransitionStage::ComputeStart, e)
                .await;
        }

        let dns = match self.applier.execute(&target.failover_changeset).await {
            Ok(report) => report,
            Err(e) => {
                return self
                    .abort(target, direction, TransitionStage::DnsApply, e)
                    .await
            }
        };

        self.complete(target, direction, FailoverStatus::FailedOver, &dns)
            .await;
        TargetEvaluation {
            target_name: target.target_name.clone(),
            update: Some(Self::stage_update(target, FailoverStatus::FailedOver)),
            outcome: TransitionOutcome::FailedOver { dns },
        }
    }

    async fn fail_back(&self, target: &MonitorTarget) -> TargetEvaluation {
        let direction = TransitionDirection::Failback;
        info!(
            instance = %target.standby_instance_id,
            "Target healthy again, failing back to primary"
        );

        let dns = match self.applier.execute(&target.failback_changeset).await {
            Ok(report) => report,
            Err(e) => {
                return self
                    .abort(target, direction, TransitionStage::DnsApply, e)
                    .await
            }
        };

        if let Err(e) = self.compute.stop(&target.standby_instance_id).await {
            return self
                .abort(target, direction, TransitionStage::ComputeStop, e)
                .await;
        }

        self.complete(target, direction, FailoverStatus::Normal, &dns)
            .await;
        TargetEvaluation {
            target_name: target.target_name.clone(),
            update: Some(Self::stage_update(target, FailoverStatus::Normal)),
            outcome: TransitionOutcome::FailedBack { dns },
        }
    }

    fn stage_update(target: &MonitorTarget, status: FailoverStatus) -> StatusUpdate {
        StatusUpdate {
            target_name: target.target_name.clone(),
            status,
            status_changed_at: Utc::now(),
        }
    }

    async fn complete(
        &self,
        target: &MonitorTarget,
        direction: TransitionDirection,
        new_status: FailoverStatus,
        dns: &ChangesetReport,
    ) {
        if dns.has_failures() {
            warn!(
                direction = %direction,
                failed = dns.failures().count(),
                "Transition completed with failed DNS directives"
            );
        }
        info!(
            direction = %direction,
            new_status = %new_status,
            mutations = dns.mutation_count(),
            "Transition executed"
        );

        let message = format!(
            "{} executed for {}",
            capitalize(direction.as_str()),
            target.target_name
        );
        self.send(&message, &dns.summary()).await;
    }

    async fn abort(
        &self,
        target: &MonitorTarget,
        direction: TransitionDirection,
        stage: TransitionStage,
        e: DomainError,
    ) -> TargetEvaluation {
        error!(
            direction = %direction,
            stage = %stage,
            error = %e,
            "Transition aborted, status left unchanged"
        );

        let message = format!(
            "{} failed for {} at stage {}",
            capitalize(direction.as_str()),
            target.target_name,
            stage
        );
        self.send(&message, &e.to_string()).await;

        TargetEvaluation {
            target_name: target.target_name.clone(),
            outcome: TransitionOutcome::Aborted {
                direction,
                stage,
                reason: e.to_string(),
            },
            update: None,
        }
    }

    async fn send(&self, message: &str, detail: &str) {
        if let Err(e) = self.notifier.notify(message, detail).await {
            warn!(error = %e, message = %message, "Notification delivery failed");
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
