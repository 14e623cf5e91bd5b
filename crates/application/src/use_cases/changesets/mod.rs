mod apply_changeset;
mod report;

pub use apply_changeset::ApplyChangesetUseCase;
pub use report::{ChangesetReport, DirectiveOutcome, DirectiveResult};
