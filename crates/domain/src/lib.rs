//! DNS Failover Domain Layer
pub mod changeset;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod failover_status;
pub mod monitor_target;

pub use changeset::{ChangeAction, Changeset, DnsChangeDirective};
pub use config::{CliOverrides, Config};
pub use dns_record::{fqdn_eq, DeclaredRecordType, NewDnsRecord, RecordType, RemoteDnsRecord};
pub use errors::DomainError;
pub use failover_status::FailoverStatus;
pub use monitor_target::{MalformedTarget, MonitorTarget, StatusUpdate, TargetScan};
