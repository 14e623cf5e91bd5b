mod compute_controller;
mod dns_provider;
mod health_probe;
mod monitor_target_repository;
mod notifier;

pub use compute_controller::ComputeController;
pub use dns_provider::DnsProvider;
pub use health_probe::HealthProbe;
pub use monitor_target_repository::MonitorTargetRepository;
pub use notifier::Notifier;
