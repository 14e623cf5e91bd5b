pub mod log;
pub mod webhook;

pub use self::log::LogNotifier;
pub use webhook::WebhookNotifier;
