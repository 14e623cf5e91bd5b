#![allow(dead_code)]

use async_trait::async_trait;
use dns_failover_application::ports::{
    ComputeController, DnsProvider, HealthProbe, MonitorTargetRepository, Notifier,
};
use dns_failover_application::use_cases::{
    ApplyChangesetUseCase, EvaluateTargetUseCase, RunReconciliationPassUseCase,
};
use dns_failover_domain::{
    DomainError, MonitorTarget, NewDnsRecord, RemoteDnsRecord, StatusUpdate, TargetScan,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Repository with no targets that counts scans. Panics on the scans listed
/// in `panic_on` (1-based).
pub struct CountingRepository {
    scans: AtomicUsize,
    panic_on: Vec<usize>,
}

impl CountingRepository {
    pub fn new() -> Self {
        Self {
            scans: AtomicUsize::new(0),
            panic_on: Vec::new(),
        }
    }

    pub fn panicking_on(panic_on: Vec<usize>) -> Self {
        Self {
            scans: AtomicUsize::new(0),
            panic_on,
        }
    }

    pub fn scan_count(&self) -> usize {
        self.scans.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MonitorTargetRepository for CountingRepository {
    async fn scan(&self) -> Result<TargetScan, DomainError> {
        let n = self.scans.fetch_add(1, Ordering::SeqCst) + 1;
        if self.panic_on.contains(&n) {
            panic!("scan #{} exploded", n);
        }
        Ok(TargetScan::default())
    }

    async fn commit(&self, updates: &[StatusUpdate]) -> Result<usize, DomainError> {
        Ok(updates.len())
    }

    async fn upsert(&self, _target: &MonitorTarget) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct AlwaysHealthy;

#[async_trait]
impl HealthProbe for AlwaysHealthy {
    async fn probe(&self, _target_name: &str) -> bool {
        true
    }
}

pub struct EmptyZone;

#[async_trait]
impl DnsProvider for EmptyZone {
    async fn list_records(&self) -> Result<Vec<RemoteDnsRecord>, DomainError> {
        Ok(Vec::new())
    }

    async fn create_record(&self, _record: &NewDnsRecord) -> Result<(), DomainError> {
        Ok(())
    }

    async fn update_record(&self, _record: &RemoteDnsRecord) -> Result<(), DomainError> {
        Ok(())
    }

    async fn delete_record(&self, _id: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct NoopCompute;

#[async_trait]
impl ComputeController for NoopCompute {
    async fn start(&self, _instance_id: &str) -> Result<(), DomainError> {
        Ok(())
    }

    async fn stop(&self, _instance_id: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _message: &str, _detail: &str) -> Result<(), DomainError> {
        Ok(())
    }
}

pub fn make_pass(repo: Arc<CountingRepository>) -> Arc<RunReconciliationPassUseCase> {
    let notifier = Arc::new(NoopNotifier);
    let applier = Arc::new(ApplyChangesetUseCase::new(Arc::new(EmptyZone)));
    let evaluator = Arc::new(EvaluateTargetUseCase::new(
        applier,
        Arc::new(NoopCompute),
        notifier.clone(),
    ));
    Arc::new(RunReconciliationPassUseCase::new(
        repo,
        Arc::new(AlwaysHealthy),
        evaluator,
        notifier,
    ))
}
