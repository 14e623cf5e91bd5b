use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProbeConfig {
    /// Name queried (type A) against every target endpoint.
    #[serde(default = "default_reference_name")]
    pub reference_name: String,

    /// DNS-over-TLS port on the target endpoint.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound for connect, handshake, query and response together.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            reference_name: default_reference_name(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

fn default_reference_name() -> String {
    "google.com".to_string()
}

fn default_port() -> u16 {
    853
}

fn default_timeout_ms() -> u64 {
    5000
}
