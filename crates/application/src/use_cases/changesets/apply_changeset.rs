use dns_failover_domain::{
    ChangeAction, Changeset, DeclaredRecordType, DnsChangeDirective, DomainError, NewDnsRecord,
    RemoteDnsRecord,
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::report::{ChangesetReport, DirectiveOutcome, DirectiveResult};
use crate::ports::DnsProvider;

/// Reconciles a changeset against the provider's zone, one directive at a
/// time, from a single snapshot of the zone taken up front.
///
/// A failing directive is recorded and the loop moves on; nothing already
/// applied is rolled back. The snapshot is never refreshed, so a record
/// created by one directive is invisible to later ones in the same call.
pub struct ApplyChangesetUseCase {
    provider: Arc<dyn DnsProvider>,
}

impl ApplyChangesetUseCase {
    pub fn new(provider: Arc<dyn DnsProvider>) -> Self {
        Self { provider }
    }

    /// Fails as a whole only when the snapshot cannot be fetched, in which
    /// case no directive has been attempted.
    #[instrument(skip(self, changeset), fields(directives = changeset.len()))]
    pub async fn execute(&self, changeset: &Changeset) -> Result<ChangesetReport, DomainError> {
        if changeset.is_empty() {
            debug!("Empty changeset, nothing to apply");
            return Ok(ChangesetReport::default());
        }

        let snapshot = self.provider.list_records().await?;
        debug!(records = snapshot.len(), "Fetched zone snapshot");

        let mut report = ChangesetReport::default();
        for directive in changeset.iter() {
            let outcome = self.apply_directive(directive, &snapshot).await;
            match &outcome {
                DirectiveOutcome::Failed { reason } => warn!(
                    order = directive.order,
                    fqdn = %directive.fqdn,
                    record_type = %directive.record_type,
                    reason = %reason,
                    "DNS directive failed, continuing with next directive"
                ),
                outcome => info!(
                    order = directive.order,
                    fqdn = %directive.fqdn,
                    record_type = %directive.record_type,
                    outcome = %outcome,
                    "DNS directive applied"
                ),
            }
            report.results.push(DirectiveResult::new(directive, outcome));
        }

        Ok(report)
    }

    async fn apply_directive(
        &self,
        directive: &DnsChangeDirective,
        snapshot: &[RemoteDnsRecord],
    ) -> DirectiveOutcome {
        let record_type = match &directive.record_type {
            DeclaredRecordType::Supported(rt) => *rt,
            DeclaredRecordType::Unsupported(raw) => {
                return DirectiveOutcome::Failed {
                    reason: DomainError::UnsupportedRecordType(raw.to_string()).to_string(),
                };
            }
        };

        let existing = snapshot
            .iter()
            .find(|record| record.matches(&directive.fqdn, record_type));

        let result = match directive.action {
            ChangeAction::Upsert => {
                let (Some(value), Some(ttl)) = (directive.value.as_deref(), directive.ttl) else {
                    return DirectiveOutcome::Failed {
                        reason: "upsert is missing value or ttl".to_string(),
                    };
                };
                match existing {
                    Some(record) => {
                        let mut updated = record.clone();
                        updated.content = value.to_string();
                        updated.ttl = ttl;
                        self.provider
                            .update_record(&updated)
                            .await
                            .map(|_| DirectiveOutcome::Updated)
                    }
                    None => {
                        let record = NewDnsRecord {
                            fqdn: directive.fqdn.clone(),
                            content: value.to_string(),
                            record_type,
                            ttl,
                            proxied: false,
                        };
                        self.provider
                            .create_record(&record)
                            .await
                            .map(|_| DirectiveOutcome::Created)
                    }
                }
            }
            ChangeAction::Delete => match existing {
                Some(record) => self
                    .provider
                    .delete_record(&record.id)
                    .await
                    .map(|_| DirectiveOutcome::Deleted),
                None => {
                    info!(
                        fqdn = %directive.fqdn,
                        record_type = %record_type,
                        "No record to delete, skipping"
                    );
                    Ok(DirectiveOutcome::SkippedMissing)
                }
            },
        };

        result.unwrap_or_else(|e| DirectiveOutcome::Failed {
            reason: e.to_string(),
        })
    }
}
