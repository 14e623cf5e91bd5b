use serde::{Deserialize, Serialize};

pub const INSTANCE_ID_PLACEHOLDER: &str = "{instance_id}";

/// Argv templates for starting and stopping a standby instance.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComputeConfig {
    #[serde(default = "default_start_command")]
    pub start_command: Vec<String>,

    #[serde(default = "default_stop_command")]
    pub stop_command: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ComputeConfig {
    fn default() -> Self {
        Self {
            start_command: default_start_command(),
            stop_command: default_stop_command(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_start_command() -> Vec<String> {
    ["aws", "ec2", "start-instances", "--instance-ids", INSTANCE_ID_PLACEHOLDER]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_stop_command() -> Vec<String> {
    ["aws", "ec2", "stop-instances", "--instance-ids", INSTANCE_ID_PLACEHOLDER]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_timeout_secs() -> u64 {
    120
}
