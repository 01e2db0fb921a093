//! Blocking hardware drivers - thin subprocess wrappers around system utilities

mod camera;
mod servo;

pub use camera::{CameraConfig, CameraDriver};
pub use servo::{ServoConfig, ServoDriver};

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure raised by a hardware driver invocation
#[derive(Debug, Error)]
pub enum DriverError {
    /// The helper utility could not be launched at all
    #[error("failed to launch {utility}: {source}")]
    Spawn {
        utility: String,
        source: std::io::Error,
    },
    /// The helper utility ran but exited unsuccessfully
    #[error("{utility} exited with {status}")]
    Utility { utility: String, status: ExitStatus },
    /// The utility reported success but the expected file was never created
    #[error("snapshot not created at {}", path.display())]
    MissingArtifact { path: PathBuf },
}

impl DriverError {
    /// Short classification shown in user-facing error replies
    pub fn kind(&self) -> &'static str {
        match self {
            DriverError::Spawn { .. } => "Spawn",
            DriverError::Utility { .. } => "Utility",
            DriverError::MissingArtifact { .. } => "MissingArtifact",
        }
    }
}

/// Run a helper utility to completion, mapping launch and exit failures
fn run_utility(program: &str, args: &[&str]) -> Result<(), DriverError> {
    let status = std::process::Command::new(program)
        .args(args)
        .status()
        .map_err(|source| DriverError::Spawn {
            utility: program.into(),
            source,
        })?;

    if !status.success() {
        return Err(DriverError::Utility {
            utility: program.into(),
            status,
        });
    }

    Ok(())
}
