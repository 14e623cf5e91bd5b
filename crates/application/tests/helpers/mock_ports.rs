#![allow(dead_code)]

use async_trait::async_trait;
use dns_failover_application::ports::{
    ComputeController, DnsProvider, HealthProbe, MonitorTargetRepository, Notifier,
};
use dns_failover_domain::{
    DomainError, MalformedTarget, MonitorTarget, NewDnsRecord, RemoteDnsRecord, StatusUpdate,
    TargetScan,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

/// Every externally visible call, in the order the mocks observed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Probe(String),
    ListRecords,
    CreateRecord {
        fqdn: String,
        record_type: String,
        content: String,
        ttl: u32,
        proxied: bool,
    },
    UpdateRecord {
        id: String,
        content: String,
        ttl: u32,
    },
    DeleteRecord(String),
    Start(String),
    Stop(String),
    Notify(String),
    Commit(Vec<String>),
}

impl Call {
    pub fn is_external_side_effect(&self) -> bool {
        !matches!(self, Call::Probe(_))
    }
}

#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }

    pub fn position(&self, predicate: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls().iter().position(predicate)
    }

    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls().iter().filter(|c| predicate(c)).count()
    }

    pub fn side_effects(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(Call::is_external_side_effect)
            .collect()
    }
}

// ── HealthProbe ───────────────────────────────────────────────────────────────

pub struct MockHealthProbe {
    log: CallLog,
    health: Mutex<HashMap<String, bool>>,
}

impl MockHealthProbe {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            health: Mutex::new(HashMap::new()),
        }
    }

    pub fn set_healthy(&self, target: &str, healthy: bool) {
        self.health
            .lock()
            .unwrap()
            .insert(target.to_string(), healthy);
    }
}

#[async_trait]
impl HealthProbe for MockHealthProbe {
    async fn probe(&self, target_name: &str) -> bool {
        self.log.push(Call::Probe(target_name.to_string()));
        self.health
            .lock()
            .unwrap()
            .get(target_name)
            .copied()
            .unwrap_or(true)
    }
}

// ── DnsProvider ───────────────────────────────────────────────────────────────

pub struct MockDnsProvider {
    log: CallLog,
    records: Mutex<Vec<RemoteDnsRecord>>,
    next_id: Mutex<u32>,
    fail_list: Mutex<bool>,
    fail_fqdns: Mutex<HashSet<String>>,
}

impl MockDnsProvider {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            records: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
            fail_list: Mutex::new(false),
            fail_fqdns: Mutex::new(HashSet::new()),
        }
    }

    pub fn with_records(log: CallLog, records: Vec<RemoteDnsRecord>) -> Self {
        let provider = Self::new(log);
        *provider.records.lock().unwrap() = records;
        provider
    }

    pub fn records(&self) -> Vec<RemoteDnsRecord> {
        self.records.lock().unwrap().clone()
    }

    pub fn set_fail_list(&self, fail: bool) {
        *self.fail_list.lock().unwrap() = fail;
    }

    /// Mutations touching `fqdn` fail with a provider error.
    pub fn fail_mutations_for(&self, fqdn: &str) {
        self.fail_fqdns.lock().unwrap().insert(fqdn.to_string());
    }

    fn check_fqdn(&self, fqdn: &str) -> Result<(), DomainError> {
        if self.fail_fqdns.lock().unwrap().contains(fqdn) {
            return Err(DomainError::Provider(format!(
                "mock rate limit for {}",
                fqdn
            )));
        }
        Ok(())
    }

    fn fqdn_of(&self, id: &str) -> Option<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.fqdn.clone())
    }
}

#[async_trait]
impl DnsProvider for MockDnsProvider {
    async fn list_records(&self) -> Result<Vec<RemoteDnsRecord>, DomainError> {
        self.log.push(Call::ListRecords);
        if *self.fail_list.lock().unwrap() {
            return Err(DomainError::Provider("mock list failure".to_string()));
        }
        Ok(self.records())
    }

    async fn create_record(&self, record: &NewDnsRecord) -> Result<(), DomainError> {
        self.log.push(Call::CreateRecord {
            fqdn: record.fqdn.clone(),
            record_type: record.record_type.as_str().to_string(),
            content: record.content.clone(),
            ttl: record.ttl,
            proxied: record.proxied,
        });
        self.check_fqdn(&record.fqdn)?;

        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = format!("new-{}", *next);
            *next += 1;
            id
        };
        self.records.lock().unwrap().push(RemoteDnsRecord {
            id,
            fqdn: record.fqdn.clone(),
            record_type: record.record_type.as_str().to_string(),
            content: record.content.clone(),
            ttl: record.ttl,
            proxied: record.proxied,
        });
        Ok(())
    }

    async fn update_record(&self, record: &RemoteDnsRecord) -> Result<(), DomainError> {
        self.log.push(Call::UpdateRecord {
            id: record.id.clone(),
            content: record.content.clone(),
            ttl: record.ttl,
        });
        self.check_fqdn(&record.fqdn)?;

        let mut records = self.records.lock().unwrap();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => {
                *existing = record.clone();
                Ok(())
            }
            None => Err(DomainError::Provider(format!("no record {}", record.id))),
        }
    }

    async fn delete_record(&self, id: &str) -> Result<(), DomainError> {
        self.log.push(Call::DeleteRecord(id.to_string()));
        if let Some(fqdn) = self.fqdn_of(id) {
            self.check_fqdn(&fqdn)?;
        }

        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            return Err(DomainError::Provider(format!("no record {}", id)));
        }
        Ok(())
    }
}

// ── ComputeController ─────────────────────────────────────────────────────────

pub struct MockComputeController {
    log: CallLog,
    fail_start: Mutex<HashSet<String>>,
    fail_stop: Mutex<HashSet<String>>,
}

impl MockComputeController {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_start: Mutex::new(HashSet::new()),
            fail_stop: Mutex::new(HashSet::new()),
        }
    }

    pub fn fail_start_for(&self, instance_id: &str) {
        self.fail_start
            .lock()
            .unwrap()
            .insert(instance_id.to_string());
    }

    pub fn fail_stop_for(&self, instance_id: &str) {
        self.fail_stop
            .lock()
            .unwrap()
            .insert(instance_id.to_string());
    }
}

#[async_trait]
impl ComputeController for MockComputeController {
    async fn start(&self, instance_id: &str) -> Result<(), DomainError> {
        self.log.push(Call::Start(instance_id.to_string()));
        if self.fail_start.lock().unwrap().contains(instance_id) {
            return Err(DomainError::Compute(format!(
                "mock start failure for {}",
                instance_id
            )));
        }
        Ok(())
    }

    async fn stop(&self, instance_id: &str) -> Result<(), DomainError> {
        self.log.push(Call::Stop(instance_id.to_string()));
        if self.fail_stop.lock().unwrap().contains(instance_id) {
            return Err(DomainError::Compute(format!(
                "mock stop failure for {}",
                instance_id
            )));
        }
        Ok(())
    }
}

// ── Notifier ──────────────────────────────────────────────────────────────────

pub struct MockNotifier {
    log: CallLog,
    sent: Mutex<Vec<(String, String)>>,
    should_fail: Mutex<bool>,
}

impl MockNotifier {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            sent: Mutex::new(Vec::new()),
            should_fail: Mutex::new(false),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        *self.should_fail.lock().unwrap() = fail;
    }

    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.sent().into_iter().map(|(m, _)| m).collect()
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn notify(&self, message: &str, detail: &str) -> Result<(), DomainError> {
        self.log.push(Call::Notify(message.to_string()));
        self.sent
            .lock()
            .unwrap()
            .push((message.to_string(), detail.to_string()));
        if *self.should_fail.lock().unwrap() {
            return Err(DomainError::Notification("mock webhook down".to_string()));
        }
        Ok(())
    }
}

// ── MonitorTargetRepository ───────────────────────────────────────────────────

pub struct MockMonitorTargetRepository {
    log: CallLog,
    targets: Mutex<Vec<MonitorTarget>>,
    malformed: Mutex<Vec<MalformedTarget>>,
    fail_scan: Mutex<bool>,
    fail_commit: Mutex<bool>,
    pending_deletes: Mutex<Vec<String>>,
}

impl MockMonitorTargetRepository {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            targets: Mutex::new(Vec::new()),
            malformed: Mutex::new(Vec::new()),
            fail_scan: Mutex::new(false),
            fail_commit: Mutex::new(false),
            pending_deletes: Mutex::new(Vec::new()),
        }
    }

    pub fn with_targets(log: CallLog, targets: Vec<MonitorTarget>) -> Self {
        let repo = Self::new(log);
        *repo.targets.lock().unwrap() = targets;
        repo
    }

    pub fn add_malformed(&self, target_name: &str, reason: &str) {
        self.malformed.lock().unwrap().push(MalformedTarget {
            target_name: target_name.to_string(),
            reason: reason.to_string(),
        });
    }

    pub fn set_fail_scan(&self, fail: bool) {
        *self.fail_scan.lock().unwrap() = fail;
    }

    pub fn set_fail_commit(&self, fail: bool) {
        *self.fail_commit.lock().unwrap() = fail;
    }

    /// Removes the target when the next commit arrives, as if it had been
    /// deleted while the pass was running.
    pub fn delete_before_commit(&self, target_name: &str) {
        self.pending_deletes
            .lock()
            .unwrap()
            .push(target_name.to_string());
    }

    pub fn get(&self, target_name: &str) -> Option<MonitorTarget> {
        self.targets
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.target_name == target_name)
            .cloned()
    }
}

#[async_trait]
impl MonitorTargetRepository for MockMonitorTargetRepository {
    async fn scan(&self) -> Result<TargetScan, DomainError> {
        if *self.fail_scan.lock().unwrap() {
            return Err(DomainError::DatabaseError("mock scan failure".to_string()));
        }
        Ok(TargetScan {
            targets: self.targets.lock().unwrap().clone(),
            malformed: self.malformed.lock().unwrap().clone(),
        })
    }

    async fn commit(&self, updates: &[StatusUpdate]) -> Result<usize, DomainError> {
        self.log.push(Call::Commit(
            updates.iter().map(|u| u.target_name.clone()).collect(),
        ));
        if *self.fail_commit.lock().unwrap() {
            return Err(DomainError::DatabaseError(
                "mock commit failure".to_string(),
            ));
        }

        let mut targets = self.targets.lock().unwrap();
        let deleted: Vec<String> = self.pending_deletes.lock().unwrap().drain(..).collect();
        targets.retain(|t| !deleted.contains(&t.target_name));

        let mut written = 0;
        for update in updates {
            if let Some(target) = targets
                .iter_mut()
                .find(|t| t.target_name == update.target_name)
            {
                target.status = update.status;
                target.status_changed_at = Some(update.status_changed_at);
                written += 1;
            }
        }
        Ok(written)
    }

    async fn upsert(&self, target: &MonitorTarget) -> Result<(), DomainError> {
        let mut targets = self.targets.lock().unwrap();
        targets.retain(|t| t.target_name != target.target_name);
        targets.push(target.clone());
        Ok(())
    }
}
