pub mod monitor_target_repository;

pub use monitor_target_repository::SqliteMonitorTargetRepository;
