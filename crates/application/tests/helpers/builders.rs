#![allow(dead_code)]

use dns_failover_application::use_cases::{
    ApplyChangesetUseCase, EvaluateTargetUseCase, RunReconciliationPassUseCase,
};
use dns_failover_domain::{
    Changeset, DnsChangeDirective, FailoverStatus, MonitorTarget, RecordType, RemoteDnsRecord,
};
use std::sync::Arc;

use super::mock_ports::*;

pub fn remote_record(id: &str, fqdn: &str, record_type: &str, content: &str) -> RemoteDnsRecord {
    RemoteDnsRecord {
        id: id.to_string(),
        fqdn: fqdn.to_string(),
        record_type: record_type.to_string(),
        content: content.to_string(),
        ttl: 3600,
        proxied: false,
    }
}

/// A target whose failover points `www.<target>` at the standby address and
/// whose failback points it back at the primary.
pub fn make_target(name: &str, instance: &str, status: FailoverStatus) -> MonitorTarget {
    let fqdn = format!("www.{}", name);
    MonitorTarget::new(
        name,
        instance,
        Changeset::new(vec![DnsChangeDirective::upsert(
            1,
            RecordType::A,
            &fqdn,
            "203.0.113.20",
            60,
        )]),
        Changeset::new(vec![DnsChangeDirective::upsert(
            1,
            RecordType::A,
            &fqdn,
            "203.0.113.10",
            60,
        )]),
    )
    .with_status(status)
}

/// All mocks sharing one call log, plus the use cases wired on top of them.
pub struct Harness {
    pub log: CallLog,
    pub probe: Arc<MockHealthProbe>,
    pub provider: Arc<MockDnsProvider>,
    pub compute: Arc<MockComputeController>,
    pub notifier: Arc<MockNotifier>,
    pub repo: Arc<MockMonitorTargetRepository>,
    pub applier: Arc<ApplyChangesetUseCase>,
    pub evaluator: Arc<EvaluateTargetUseCase>,
    pub pass: RunReconciliationPassUseCase,
}

impl Harness {
    pub fn new(targets: Vec<MonitorTarget>) -> Self {
        Self::with_records(targets, Vec::new())
    }

    pub fn with_records(targets: Vec<MonitorTarget>, records: Vec<RemoteDnsRecord>) -> Self {
        let log = CallLog::new();
        let probe = Arc::new(MockHealthProbe::new(log.clone()));
        let provider = Arc::new(MockDnsProvider::with_records(log.clone(), records));
        let compute = Arc::new(MockComputeController::new(log.clone()));
        let notifier = Arc::new(MockNotifier::new(log.clone()));
        let repo = Arc::new(MockMonitorTargetRepository::with_targets(
            log.clone(),
            targets,
        ));

        let applier = Arc::new(ApplyChangesetUseCase::new(provider.clone()));
        let evaluator = Arc::new(EvaluateTargetUseCase::new(
            applier.clone(),
            compute.clone(),
            notifier.clone(),
        ));
        let pass = RunReconciliationPassUseCase::new(
            repo.clone(),
            probe.clone(),
            evaluator.clone(),
            notifier.clone(),
        );

        Self {
            log,
            probe,
            provider,
            compute,
            notifier,
            repo,
            applier,
            evaluator,
            pass,
        }
    }
}
