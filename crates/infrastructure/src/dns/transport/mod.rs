pub mod framing;
pub mod tls;

pub use tls::{client_config_with_roots, webpki_client_config, TlsTransport};
