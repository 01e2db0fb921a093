//! Hardware controller - single context object owning the drivers and gates

use crate::drivers::{CameraConfig, CameraDriver, ServoConfig, ServoDriver};
use crate::executor::{ActionExecutor, ActionOutcome, Device};
use std::sync::Arc;
use tracing::info;

/// Owns the action executor and both device drivers.
///
/// Constructed once at startup and injected into the bot layer, so there is
/// no process-global lock or driver state.
pub struct HardwareController {
    executor: ActionExecutor,
    servo: Arc<ServoDriver>,
    camera: Arc<CameraDriver>,
}

impl HardwareController {
    /// Create a new controller
    pub fn new(servo: ServoConfig, camera: CameraConfig) -> Self {
        Self {
            executor: ActionExecutor::new(),
            servo: Arc::new(ServoDriver::new(servo)),
            camera: Arc::new(CameraDriver::new(camera)),
        }
    }

    /// Rotate the rescue servo once, exclusively
    pub async fn rescue(&self) -> ActionOutcome {
        info!("rescue action requested");
        let servo = self.servo.clone();
        self.executor
            .execute(Device::Servo, move || servo.rotate_once())
            .await
    }

    /// Capture one snapshot, exclusively; success carries the artifact path
    pub async fn snapshot(&self) -> ActionOutcome {
        info!("snapshot action requested");
        let camera = self.camera.clone();
        self.executor
            .execute(Device::Camera, move || camera.capture())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_rescue_normalizes_driver_result() {
        let controller = HardwareController::new(
            ServoConfig {
                program: "true".into(),
                travel_time: Duration::from_millis(1),
                ..Default::default()
            },
            CameraConfig::default(),
        );
        let outcome = controller.rescue().await;
        assert_eq!(outcome, ActionOutcome::Success { artifact: None });
    }

    #[tokio::test]
    async fn test_snapshot_driver_failure_becomes_error_outcome() {
        let controller = HardwareController::new(
            ServoConfig::default(),
            CameraConfig {
                program: "false".into(),
                output_dir: std::env::temp_dir(),
            },
        );
        match controller.snapshot().await {
            ActionOutcome::Error { kind, .. } => assert_eq!(kind, "Utility"),
            other => panic!("expected Error, got {:?}", other),
        }
    }
}
