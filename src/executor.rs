//! Exclusive action executor - serializes hardware actions per device

use crate::drivers::DriverError;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// A physical device guarded by its own exclusion gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Device {
    Servo,
    Camera,
}

/// Normalized result of a hardware action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action completed; camera actions carry the artifact path
    Success { artifact: Option<PathBuf> },
    /// The driver ran but reported an unsuccessful result
    SoftFailure,
    /// The driver call failed outright
    Error { kind: String, message: String },
}

/// Converts a driver return value into a normalized outcome
pub trait IntoOutcome {
    fn into_outcome(self) -> ActionOutcome;
}

/// Servo contract: no reported flag and an explicit `true` both count as
/// success; anything else is a soft failure.
impl IntoOutcome for Option<bool> {
    fn into_outcome(self) -> ActionOutcome {
        match self {
            None | Some(true) => ActionOutcome::Success { artifact: None },
            Some(false) => ActionOutcome::SoftFailure,
        }
    }
}

/// Camera contract: a returned path is a success carrying the artifact.
impl IntoOutcome for PathBuf {
    fn into_outcome(self) -> ActionOutcome {
        ActionOutcome::Success {
            artifact: Some(self),
        }
    }
}

/// Runs blocking device operations with per-device mutual exclusion.
///
/// The gates are independent: a servo action never delays a camera action.
/// The blocking call itself runs on the blocking pool, so the dispatcher
/// keeps servicing triggers while an action is in flight.
pub struct ActionExecutor {
    servo_gate: Arc<Mutex<()>>,
    camera_gate: Arc<Mutex<()>>,
}

impl ActionExecutor {
    /// Create a new executor with both gates free
    pub fn new() -> Self {
        Self {
            servo_gate: Arc::new(Mutex::new(())),
            camera_gate: Arc::new(Mutex::new(())),
        }
    }

    fn gate(&self, device: Device) -> &Mutex<()> {
        match device {
            Device::Servo => &self.servo_gate,
            Device::Camera => &self.camera_gate,
        }
    }

    /// Run `op` exclusively for `device` and normalize its result.
    ///
    /// Holds the device gate for the full duration of `op`, releases it
    /// before returning, and never lets a driver failure or panic escape
    /// into the caller's task.
    pub async fn execute<F, T>(&self, device: Device, op: F) -> ActionOutcome
    where
        F: FnOnce() -> Result<T, DriverError> + Send + 'static,
        T: IntoOutcome + Send + 'static,
    {
        let held = self.gate(device).lock().await;
        debug!("gate acquired for {:?}", device);

        let joined = tokio::task::spawn_blocking(op).await;
        drop(held);

        match joined {
            Ok(Ok(value)) => value.into_outcome(),
            Ok(Err(err)) => {
                warn!("{:?} driver failed: {}", device, err);
                ActionOutcome::Error {
                    kind: err.kind().into(),
                    message: err.to_string(),
                }
            }
            Err(join_err) => {
                warn!("{:?} operation panicked: {}", device, join_err);
                ActionOutcome::Error {
                    kind: "Panicked".into(),
                    message: join_err.to_string(),
                }
            }
        }
    }
}

impl Default for ActionExecutor {
    fn default() -> Self {
        Self::new()
    }
}
