use serde::{Deserialize, Serialize};

pub const ENV_ZONE_ID: &str = "CLOUDFLARE_ZONE_ID";
pub const ENV_EMAIL: &str = "CLOUDFLARE_EMAIL";
pub const ENV_API_KEY: &str = "CLOUDFLARE_API_KEY";

/// Authoritative DNS provider (Cloudflare API v4).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,

    #[serde(default)]
    pub zone_id: String,

    #[serde(default)]
    pub account_email: String,

    #[serde(default, skip_serializing)]
    pub api_key: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            zone_id: String::new(),
            account_email: String::new(),
            api_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ProviderConfig {
    pub(crate) fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(zone) = lookup(ENV_ZONE_ID) {
            self.zone_id = zone;
        }
        if let Some(email) = lookup(ENV_EMAIL) {
            self.account_email = email;
        }
        if let Some(key) = lookup(ENV_API_KEY) {
            self.api_key = key;
        }
    }
}

fn default_api_base() -> String {
    "https://api.cloudflare.com/client/v4".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}
