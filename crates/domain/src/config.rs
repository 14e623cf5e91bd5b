pub mod compute;
pub mod database;
pub mod errors;
pub mod logging;
pub mod notifier;
pub mod probe;
pub mod provider;
pub mod reconciler;
pub mod root;

pub use compute::ComputeConfig;
pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use notifier::NotifierConfig;
pub use probe::ProbeConfig;
pub use provider::ProviderConfig;
pub use reconciler::ReconcilerConfig;
pub use root::{CliOverrides, Config};
