use async_trait::async_trait;
use dns_failover_domain::{DomainError, NewDnsRecord, RemoteDnsRecord};

/// Authoritative DNS provider holding the managed zone.
#[async_trait]
pub trait DnsProvider: Send + Sync {
    async fn list_records(&self) -> Result<Vec<RemoteDnsRecord>, DomainError>;

    async fn create_record(&self, record: &NewDnsRecord) -> Result<(), DomainError>;

    async fn update_record(&self, record: &RemoteDnsRecord) -> Result<(), DomainError>;

    async fn delete_record(&self, id: &str) -> Result<(), DomainError>;
}
