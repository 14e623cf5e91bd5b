use serde::{Deserialize, Serialize};

pub const ENV_WEBHOOK_URL: &str = "FAILOVER_WEBHOOK_URL";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NotifierConfig {
    /// Chat webhook receiving `{"text": ...}` posts. Notifications only go to
    /// the log when unset.
    #[serde(default)]
    pub webhook_url: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl NotifierConfig {
    pub(crate) fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_WEBHOOK_URL).filter(|u| !u.is_empty()) {
            self.webhook_url = Some(url);
        }
    }
}

fn default_timeout_secs() -> u64 {
    10
}
