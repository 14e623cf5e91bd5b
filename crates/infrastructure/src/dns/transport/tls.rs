//! TLS transport for DNS queries (DNS-over-TLS, RFC 7858)
//!
//! One connection per exchange: connect, handshake, send one framed query,
//! read one framed response, close.

use super::framing::{read_with_length_prefix, send_with_length_prefix};
use dns_failover_domain::DomainError;
use rustls::pki_types::ServerName;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpStream;
use tracing::debug;

/// Client config validating servers against the webpki (Mozilla) roots.
pub fn webpki_client_config() -> Result<Arc<rustls::ClientConfig>, DomainError> {
    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    client_config_with_roots(root_store)
}

pub fn client_config_with_roots(
    root_store: rustls::RootCertStore,
) -> Result<Arc<rustls::ClientConfig>, DomainError> {
    let config =
        rustls::ClientConfig::builder_with_provider(rustls::crypto::ring::default_provider().into())
            .with_safe_default_protocol_versions()
            .map_err(|e| DomainError::Probe(format!("TLS protocol version error: {}", e)))?
            .with_root_certificates(root_store)
            .with_no_client_auth();

    Ok(Arc::new(config))
}

pub struct TlsTransport {
    server_addr: SocketAddr,
    hostname: String,
    config: Arc<rustls::ClientConfig>,
}

impl TlsTransport {
    pub fn new(server_addr: SocketAddr, hostname: &str, config: Arc<rustls::ClientConfig>) -> Self {
        Self {
            server_addr,
            hostname: hostname.trim_end_matches('.').to_string(),
            config,
        }
    }

    /// Sends one query and returns the raw response. Callers bound the whole
    /// exchange with their own timeout.
    pub async fn exchange(&self, message_bytes: &[u8]) -> Result<Vec<u8>, DomainError> {
        let connector = tokio_rustls::TlsConnector::from(self.config.clone());

        let server_name = ServerName::try_from(self.hostname.clone()).map_err(|e| {
            DomainError::Probe(format!("Invalid TLS hostname '{}': {}", self.hostname, e))
        })?;

        let tcp_stream = TcpStream::connect(self.server_addr).await.map_err(|e| {
            DomainError::Probe(format!(
                "Connection refused by TLS server {}: {}",
                self.server_addr, e
            ))
        })?;

        let mut stream = connector
            .connect(server_name, tcp_stream)
            .await
            .map_err(|e| {
                DomainError::Probe(format!(
                    "TLS handshake failed with {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(server = %self.server_addr, hostname = %self.hostname, "TLS connection established");

        send_with_length_prefix(&mut stream, message_bytes).await?;
        let response_bytes = read_with_length_prefix(&mut stream).await?;

        debug!(
            server = %self.server_addr,
            response_len = response_bytes.len(),
            "TLS response received"
        );

        Ok(response_bytes)
    }
}
