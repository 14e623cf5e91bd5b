use super::RecordType;
use serde::{Deserialize, Serialize};

/// A record as the authoritative DNS provider reports it.
///
/// `record_type` stays a raw string: zones routinely hold types (SOA and the
/// like) this system never manages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteDnsRecord {
    pub id: String,
    pub fqdn: String,
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    #[serde(default)]
    pub proxied: bool,
}

impl RemoteDnsRecord {
    pub fn matches(&self, fqdn: &str, record_type: RecordType) -> bool {
        record_type.matches(&self.record_type) && super::fqdn_eq(&self.fqdn, fqdn)
    }
}

/// Payload for creating a record that does not exist yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDnsRecord {
    pub fqdn: String,
    pub content: String,
    pub record_type: RecordType,
    pub ttl: u32,
    pub proxied: bool,
}
