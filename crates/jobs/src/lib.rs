pub mod reconciliation;
pub mod runner;

pub use reconciliation::ReconciliationJob;
pub use runner::JobRunner;
