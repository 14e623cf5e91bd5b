use dns_failover_domain::{ChangeAction, DnsChangeDirective};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectiveOutcome {
    Created,
    Updated,
    Deleted,
    /// DELETE of a record absent from the snapshot.
    SkippedMissing,
    Failed { reason: String },
}

impl DirectiveOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, DirectiveOutcome::Failed { .. })
    }

    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            DirectiveOutcome::Created | DirectiveOutcome::Updated | DirectiveOutcome::Deleted
        )
    }
}

impl fmt::Display for DirectiveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectiveOutcome::Created => f.write_str("created"),
            DirectiveOutcome::Updated => f.write_str("updated"),
            DirectiveOutcome::Deleted => f.write_str("deleted"),
            DirectiveOutcome::SkippedMissing => f.write_str("skipped (no such record)"),
            DirectiveOutcome::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveResult {
    pub order: i64,
    pub action: ChangeAction,
    pub record_type: String,
    pub fqdn: String,
    pub outcome: DirectiveOutcome,
}

impl DirectiveResult {
    pub fn new(directive: &DnsChangeDirective, outcome: DirectiveOutcome) -> Self {
        Self {
            order: directive.order,
            action: directive.action,
            record_type: directive.record_type.as_str().to_string(),
            fqdn: directive.fqdn.clone(),
            outcome,
        }
    }
}

impl fmt::Display for DirectiveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} {}: {}",
            self.order, self.action, self.record_type, self.fqdn, self.outcome
        )
    }
}

/// Per-directive outcomes of one changeset application, in apply order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangesetReport {
    pub results: Vec<DirectiveResult>,
}

impl ChangesetReport {
    pub fn failures(&self) -> impl Iterator<Item = &DirectiveResult> {
        self.results.iter().filter(|r| r.outcome.is_failure())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }

    pub fn mutation_count(&self) -> usize {
        self.results.iter().filter(|r| r.outcome.is_mutation()).count()
    }

    /// One line per directive, suitable for a notification body.
    pub fn summary(&self) -> String {
        if self.results.is_empty() {
            return "no DNS changes declared".to_string();
        }
        self.results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
