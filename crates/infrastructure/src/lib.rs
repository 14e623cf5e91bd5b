pub mod compute;
pub mod database;
pub mod dns;
pub mod notifier;
pub mod provider;
pub mod repositories;
