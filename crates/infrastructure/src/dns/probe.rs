use super::message::{MessageBuilder, ResponseParser};
use super::transport::{webpki_client_config, TlsTransport};
use async_trait::async_trait;
use dns_failover_application::ports::HealthProbe;
use dns_failover_domain::config::ProbeConfig;
use dns_failover_domain::{DomainError, RecordType};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Health probe that sends one A query over DNS-over-TLS to each target.
///
/// A target is healthy when it completes the TLS handshake under its own name
/// and answers the reference query with a matching ID and NOERROR. There are
/// no retries within a probe.
pub struct DotHealthProbe {
    reference_name: String,
    port: u16,
    timeout: Duration,
    tls_config: Arc<rustls::ClientConfig>,
}

impl DotHealthProbe {
    pub fn new(config: &ProbeConfig) -> Result<Self, DomainError> {
        Ok(Self::with_tls_config(config, webpki_client_config()?))
    }

    pub fn with_tls_config(config: &ProbeConfig, tls_config: Arc<rustls::ClientConfig>) -> Self {
        Self {
            reference_name: config.reference_name.clone(),
            port: config.port,
            timeout: Duration::from_millis(config.timeout_ms),
            tls_config,
        }
    }

    async fn check(&self, target_name: &str) -> Result<(), DomainError> {
        let (query_id, query_bytes) =
            MessageBuilder::build_query_with_id(&self.reference_name, &RecordType::A)?;

        let addrs: Vec<SocketAddr> = tokio::net::lookup_host((target_name, self.port))
            .await
            .map_err(|e| DomainError::Probe(format!("Cannot resolve {}: {}", target_name, e)))?
            .collect();

        let mut last_error =
            DomainError::Probe(format!("No addresses found for {}", target_name));

        for addr in addrs {
            let transport = TlsTransport::new(addr, target_name, self.tls_config.clone());
            match transport.exchange(&query_bytes).await {
                Ok(response_bytes) => return Self::evaluate(query_id, &response_bytes),
                Err(e) => {
                    debug!(server = %addr, error = %e, "DoT exchange failed, trying next address");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    fn evaluate(query_id: u16, response_bytes: &[u8]) -> Result<(), DomainError> {
        let response = ResponseParser::parse(response_bytes)?;

        if !response.is_response || response.id != query_id {
            return Err(DomainError::Probe(format!(
                "Response ID {} does not match query ID {}",
                response.id, query_id
            )));
        }
        if !response.answers_query(query_id) {
            return Err(DomainError::Probe(format!(
                "Server answered {}",
                ResponseParser::rcode_to_status(response.rcode)
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl HealthProbe for DotHealthProbe {
    async fn probe(&self, target_name: &str) -> bool {
        let start = Instant::now();
        let result = tokio::time::timeout(self.timeout, self.check(target_name)).await;
        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Err(_) => {
                warn!(
                    target = %target_name,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Health check: TIMEOUT"
                );
                false
            }
            Ok(Err(e)) => {
                warn!(target = %target_name, latency_ms, error = %e, "Health check: FAILED");
                false
            }
            Ok(Ok(())) => {
                debug!(target = %target_name, latency_ms, "Health check: OK");
                true
            }
        }
    }
}
