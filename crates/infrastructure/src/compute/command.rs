use async_trait::async_trait;
use dns_failover_application::ports::ComputeController;
use dns_failover_domain::config::{compute::INSTANCE_ID_PLACEHOLDER, ComputeConfig};
use dns_failover_domain::DomainError;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, info, instrument};

/// Starts and stops standby instances by running configured commands, e.g.
/// `aws ec2 start-instances --instance-ids {instance_id}`.
pub struct CommandComputeController {
    start_command: Vec<String>,
    stop_command: Vec<String>,
    timeout: Duration,
}

impl CommandComputeController {
    pub fn new(config: &ComputeConfig) -> Result<Self, DomainError> {
        if config.start_command.is_empty() || config.stop_command.is_empty() {
            return Err(DomainError::ConfigError(
                "compute start/stop commands cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            start_command: config.start_command.clone(),
            stop_command: config.stop_command.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    fn render(template: &[String], instance_id: &str) -> Vec<String> {
        template
            .iter()
            .map(|arg| arg.replace(INSTANCE_ID_PLACEHOLDER, instance_id))
            .collect()
    }

    async fn run(&self, template: &[String], instance_id: &str) -> Result<(), DomainError> {
        let argv = Self::render(template, instance_id);
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| DomainError::ConfigError("empty compute command".to_string()))?;

        debug!(program = %program, args = ?args, "Running compute command");

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| DomainError::Compute(format!("failed to spawn '{}': {}", program, e)))?;

        // Dropping the future on timeout kills the child.
        let output = tokio::time::timeout(self.timeout, child.wait_with_output())
            .await
            .map_err(|_| {
                DomainError::Compute(format!(
                    "'{}' timed out after {}s",
                    program,
                    self.timeout.as_secs()
                ))
            })?
            .map_err(|e| DomainError::Compute(format!("failed to wait for '{}': {}", program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::Compute(format!(
                "'{}' exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}

#[async_trait]
impl ComputeController for CommandComputeController {
    #[instrument(skip(self))]
    async fn start(&self, instance_id: &str) -> Result<(), DomainError> {
        self.run(&self.start_command, instance_id).await?;
        info!("Standby instance start requested");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn stop(&self, instance_id: &str) -> Result<(), DomainError> {
        self.run(&self.stop_command, instance_id).await?;
        info!("Standby instance stop requested");
        Ok(())
    }
}
