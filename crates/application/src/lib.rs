//! DNS Failover Application Layer
//!
//! Ports describe the external collaborators (probe, DNS provider, compute,
//! notifier, persistence); use cases hold the reconciliation logic.
pub mod ports;
pub mod use_cases;
