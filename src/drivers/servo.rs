//! Servo driver - one rescue rotation via the pigpio daemon CLI

use super::{run_utility, DriverError};
use std::thread;
use std::time::Duration;

/// Configuration for the servo pulse sequence
#[derive(Debug, Clone)]
pub struct ServoConfig {
    /// pigpio command-line client
    pub program: String,
    /// BCM pin driving the servo signal line
    pub gpio: u8,
    /// Pulse width commanding the rotated position, in microseconds
    pub rotate_pulse_us: u32,
    /// Pulse width commanding the rest position, in microseconds
    pub rest_pulse_us: u32,
    /// Time allowed for the horn to travel between positions
    pub travel_time: Duration,
}

impl Default for ServoConfig {
    fn default() -> Self {
        Self {
            program: "pigs".into(),
            gpio: 18,
            rotate_pulse_us: 2000,
            rest_pulse_us: 1000,
            travel_time: Duration::from_millis(700),
        }
    }
}

/// Blocking wrapper around the rescue servo
pub struct ServoDriver {
    config: ServoConfig,
}

impl ServoDriver {
    /// Create a new servo driver
    pub fn new(config: ServoConfig) -> Self {
        Self { config }
    }

    /// Rotate the rescue servo once: out, back, then stop the pulse train.
    ///
    /// Blocks for two travel times. `Ok(None)` means the driver completed
    /// without reporting a flag; a driver that does report one returns
    /// `Some(success)`.
    pub fn rotate_once(&self) -> Result<Option<bool>, DriverError> {
        self.set_pulse(self.config.rotate_pulse_us)?;
        thread::sleep(self.config.travel_time);

        self.set_pulse(self.config.rest_pulse_us)?;
        thread::sleep(self.config.travel_time);

        // Width 0 stops servo pulses on the pin
        self.set_pulse(0)?;

        Ok(None)
    }

    fn set_pulse(&self, width_us: u32) -> Result<(), DriverError> {
        let gpio = self.config.gpio.to_string();
        let width = width_us.to_string();
        run_utility(&self.config.program, &["s", &gpio, &width])
    }
}
