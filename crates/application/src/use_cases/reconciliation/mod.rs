mod report;
mod run_pass;

pub use report::PassReport;
pub use run_pass::RunReconciliationPassUseCase;
