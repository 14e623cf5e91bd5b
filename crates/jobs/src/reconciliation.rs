use dns_failover_application::use_cases::{PassReport, RunReconciliationPassUseCase};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

const DEFAULT_INTERVAL_SECS: u64 = 60;

/// Runs a reconciliation pass on every tick until cancelled.
///
/// The first pass runs immediately. A pass that outlives the interval delays
/// the next tick, so passes never overlap.
pub struct ReconciliationJob {
    pass: Arc<RunReconciliationPassUseCase>,
    interval_secs: u64,
    shutdown: CancellationToken,
}

impl ReconciliationJob {
    pub fn new(pass: Arc<RunReconciliationPassUseCase>) -> Self {
        Self {
            pass,
            interval_secs: DEFAULT_INTERVAL_SECS,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_interval(mut self, interval_secs: u64) -> Self {
        self.interval_secs = interval_secs;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) {
        info!(interval_secs = self.interval_secs, "Starting reconciliation job");

        let mut interval = tokio::time::interval(Duration::from_secs(self.interval_secs.max(1)));
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = self.shutdown.cancelled() => {
                    info!("ReconciliationJob: shutting down");
                    break;
                }
                _ = interval.tick() => {
                    if let Some(report) = self.run_once().await {
                        if !report.is_clean() {
                            warn!(
                                aborted = report.aborted,
                                malformed = report.malformed,
                                scan_failed = report.scan_error.is_some(),
                                commit_failed = report.commit_error.is_some(),
                                "Reconciliation pass finished with problems"
                            );
                        }
                    }
                }
            }
        }
    }

    /// Runs one pass in its own task. A panic inside the pass is logged and
    /// swallowed so the schedule keeps going.
    pub async fn run_once(&self) -> Option<PassReport> {
        let pass = Arc::clone(&self.pass);
        match tokio::spawn(async move { pass.execute().await }).await {
            Ok(report) => Some(report),
            Err(e) if e.is_panic() => {
                error!(error = %e, "Reconciliation pass panicked");
                None
            }
            Err(e) => {
                error!(error = %e, "Reconciliation pass task was cancelled");
                None
            }
        }
    }
}
