use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Health probe failed: {0}")]
    Probe(String),

    #[error("DNS provider error: {0}")]
    Provider(String),

    #[error("Compute lifecycle error: {0}")]
    Compute(String),

    #[error("Notification delivery failed: {0}")]
    Notification(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Invalid changeset: {0}")]
    InvalidChangeset(String),

    #[error("Invalid failover status: {0}")]
    InvalidStatus(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
