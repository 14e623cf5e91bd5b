use crate::dns_record::DeclaredRecordType;
use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeAction {
    Upsert,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Upsert => "upsert",
            ChangeAction::Delete => "delete",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upsert" => Ok(ChangeAction::Upsert),
            "delete" => Ok(ChangeAction::Delete),
            other => Err(format!("unknown action '{}'", other)),
        }
    }
}

/// One declarative record change inside a changeset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsChangeDirective {
    pub order: i64,
    pub action: ChangeAction,
    pub record_type: DeclaredRecordType,
    pub fqdn: String,
    /// Always present for upserts once the changeset has been validated.
    pub value: Option<String>,
    /// Always present for upserts once the changeset has been validated.
    pub ttl: Option<u32>,
}

impl DnsChangeDirective {
    pub fn upsert(
        order: i64,
        record_type: impl Into<DeclaredRecordType>,
        fqdn: &str,
        value: &str,
        ttl: u32,
    ) -> Self {
        Self {
            order,
            action: ChangeAction::Upsert,
            record_type: record_type.into(),
            fqdn: fqdn.to_string(),
            value: Some(value.to_string()),
            ttl: Some(ttl),
        }
    }

    pub fn delete(order: i64, record_type: impl Into<DeclaredRecordType>, fqdn: &str) -> Self {
        Self {
            order,
            action: ChangeAction::Delete,
            record_type: record_type.into(),
            fqdn: fqdn.to_string(),
            value: None,
            ttl: None,
        }
    }
}

/// Wire shape of a directive: `{order, action, type, fqdn, value, ttl}`.
#[derive(Debug, Deserialize, Serialize)]
struct RawDirective {
    order: Option<i64>,
    action: Option<String>,
    #[serde(rename = "type")]
    record_type: Option<String>,
    fqdn: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ttl: Option<i64>,
}

impl RawDirective {
    fn validate(self, index: usize) -> Result<DnsChangeDirective, String> {
        let order = self
            .order
            .ok_or_else(|| format!("directive #{}: missing 'order'", index))?;

        let action = self
            .action
            .ok_or_else(|| format!("directive #{}: missing 'action'", index))?
            .parse::<ChangeAction>()
            .map_err(|e| format!("directive #{}: {}", index, e))?;

        let raw_type = self
            .record_type
            .ok_or_else(|| format!("directive #{}: missing 'type'", index))?;
        let record_type = DeclaredRecordType::parse(&raw_type);

        let fqdn = self
            .fqdn
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .ok_or_else(|| format!("directive #{}: missing or empty 'fqdn'", index))?;

        let ttl = match self.ttl {
            Some(ttl) => Some(u32::try_from(ttl).map_err(|_| {
                format!("directive #{}: ttl {} out of range", index, ttl)
            })?),
            None => None,
        };

        if action == ChangeAction::Upsert {
            if self.value.is_none() {
                return Err(format!("directive #{}: upsert requires 'value'", index));
            }
            match ttl {
                None => return Err(format!("directive #{}: upsert requires 'ttl'", index)),
                Some(0) => return Err(format!("directive #{}: ttl must be positive", index)),
                Some(_) => {}
            }
        }

        if let DeclaredRecordType::Unsupported(raw) = &record_type {
            warn!(
                order,
                fqdn = %fqdn,
                record_type = %raw,
                "Changeset directive declares an unsupported record type"
            );
        }

        Ok(DnsChangeDirective {
            order,
            action,
            record_type,
            fqdn,
            value: self.value,
            ttl,
        })
    }
}

impl From<&DnsChangeDirective> for RawDirective {
    fn from(d: &DnsChangeDirective) -> Self {
        Self {
            order: Some(d.order),
            action: Some(d.action.as_str().to_string()),
            record_type: Some(d.record_type.as_str().to_string()),
            fqdn: Some(d.fqdn.clone()),
            value: d.value.clone(),
            ttl: d.ttl.map(i64::from),
        }
    }
}

/// A validated changeset, kept in ascending `order`.
///
/// Directives sharing an `order` keep the sequence they were declared in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Changeset {
    directives: Vec<DnsChangeDirective>,
}

impl Changeset {
    pub fn new(mut directives: Vec<DnsChangeDirective>) -> Self {
        directives.sort_by_key(|d| d.order);
        Self { directives }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses the stored JSON array form and validates every directive.
    pub fn parse(json: &str) -> Result<Self, DomainError> {
        let raw: Vec<RawDirective> = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidChangeset(e.to_string()))?;
        Self::from_raw(raw).map_err(DomainError::InvalidChangeset)
    }

    fn from_raw(raw: Vec<RawDirective>) -> Result<Self, String> {
        let directives = raw
            .into_iter()
            .enumerate()
            .map(|(index, d)| d.validate(index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(directives))
    }

    pub fn to_json(&self) -> Result<String, DomainError> {
        let raw: Vec<RawDirective> = self.directives.iter().map(RawDirective::from).collect();
        serde_json::to_string(&raw).map_err(|e| DomainError::InvalidChangeset(e.to_string()))
    }

    pub fn directives(&self) -> &[DnsChangeDirective] {
        &self.directives
    }

    pub fn iter(&self) -> impl Iterator<Item = &DnsChangeDirective> {
        self.directives.iter()
    }

    pub fn len(&self) -> usize {
        self.directives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

impl Serialize for Changeset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let raw: Vec<RawDirective> = self.directives.iter().map(RawDirective::from).collect();
        raw.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Changeset {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Vec::<RawDirective>::deserialize(deserializer)?;
        Self::from_raw(raw).map_err(serde::de::Error::custom)
    }
}
