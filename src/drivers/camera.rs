//! Camera driver - captures a still image via libcamera-still

use super::{run_utility, DriverError};
use chrono::Utc;
use std::path::PathBuf;

/// Configuration for the still-capture utility
#[derive(Debug, Clone)]
pub struct CameraConfig {
    /// Capture utility binary
    pub program: String,
    /// Directory for temporary snapshot artifacts
    pub output_dir: PathBuf,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            program: "libcamera-still".into(),
            output_dir: "/tmp".into(),
        }
    }
}

/// Blocking wrapper around the camera capture utility
pub struct CameraDriver {
    config: CameraConfig,
}

impl CameraDriver {
    /// Create a new camera driver
    pub fn new(config: CameraConfig) -> Self {
        Self { config }
    }

    /// Capture one still image and return the artifact path.
    ///
    /// Blocks for the duration of the capture; callers offload this to the
    /// blocking pool. The artifact must exist on return or this fails.
    pub fn capture(&self) -> Result<PathBuf, DriverError> {
        let out_path = self.artifact_path();
        let out = out_path.to_string_lossy().into_owned();

        // -n: no preview, -t 1: minimal capture time
        run_utility(&self.config.program, &["-n", "-t", "1", "-o", &out])?;

        if !out_path.exists() {
            return Err(DriverError::MissingArtifact { path: out_path });
        }

        Ok(out_path)
    }

    /// Timestamp-derived artifact path. The camera gate serializes captures,
    /// so two live artifacts can never share a path.
    fn artifact_path(&self) -> PathBuf {
        let ts = Utc::now().format("%Y%m%d_%H%M%S");
        self.config.output_dir.join(format!("snapshot_{}.jpg", ts))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    fn driver_with(program: &str, output_dir: PathBuf) -> CameraDriver {
        CameraDriver::new(CameraConfig {
            program: program.into(),
            output_dir,
        })
    }

    #[test]
    fn test_capture_returns_artifact_path() {
        let dir = tempfile::tempdir().unwrap();

        // Stand-in capture utility: touches the path it is given via -o
        let script = dir.path().join("fake-still");
        std::fs::write(&script, "#!/bin/sh\ntouch \"$5\"\n").unwrap();
        let mut perms = std::fs::metadata(&script).unwrap().permissions();
        perms.set_mode(0o755);
        std::fs::set_permissions(&script, perms).unwrap();

        let driver = driver_with(&script.to_string_lossy(), dir.path().to_path_buf());
        let path = driver.capture().unwrap();

        assert!(path.exists());
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("snapshot_"));
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_capture_spawn_failure() {
        let dir = tempfile::tempdir().unwrap();
        let driver = driver_with("/nonexistent/libcamera-still", dir.path().to_path_buf());
        let err = driver.capture().unwrap_err();
        assert_eq!(err.kind(), "Spawn");
    }

    #[test]
    fn test_capture_utility_failure() {
        let dir = tempfile::tempdir().unwrap();
        let driver = driver_with("false", dir.path().to_path_buf());
        let err = driver.capture().unwrap_err();
        assert_eq!(err.kind(), "Utility");
    }

    #[test]
    fn test_capture_missing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        // Exits cleanly without creating the file
        let driver = driver_with("true", dir.path().to_path_buf());
        let err = driver.capture().unwrap_err();
        assert_eq!(err.kind(), "MissingArtifact");
    }
}
