use super::StatusDocument;
use async_trait::async_trait;
use tailnet_dns_application::ports::PeerStatusSource;
use tailnet_dns_domain::{DomainError, PeerStatusSnapshot};
use tokio::process::Command;
use tracing::debug;

/// Runs the tailscale CLI (`tailscale status --json` by default) and
/// parses its output.
pub struct TailscaleCliStatusSource {
    program: String,
    args: Vec<String>,
}

impl TailscaleCliStatusSource {
    pub fn new(command: &[String]) -> Result<Self, DomainError> {
        let (program, args) = command.split_first().ok_or_else(|| {
            DomainError::ConfigError("status command cannot be empty".to_string())
        })?;

        Ok(Self {
            program: program.clone(),
            args: args.to_vec(),
        })
    }
}

#[async_trait]
impl PeerStatusSource for TailscaleCliStatusSource {
    async fn fetch_status(&self) -> Result<PeerStatusSnapshot, DomainError> {
        debug!(program = %self.program, args = ?self.args, "Running status command");

        // Dropped on timeout, which must not leave the child behind.
        let output = Command::new(&self.program)
            .args(&self.args)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                DomainError::StatusFetchFailed(format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DomainError::StatusFetchFailed(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        StatusDocument::parse(&output.stdout)?.into_snapshot()
    }
}
