mod import;
mod list;
mod once;
mod run;

pub use import::import;
pub use list::list;
pub use once::once;
pub use run::run;
