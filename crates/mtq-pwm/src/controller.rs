//! The duty-cycle state machine.
//!
//! [`DutyCycleController`] holds the logical output request for one channel.
//! It never touches hardware: callers read [`DutyCycleController::scaled_value`]
//! and forward it to an [`OutputSink`](crate::OutputSink) themselves.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Resolution;

/// Map a requested percentage onto `[0, MAX]`.
///
/// The percentage saturates into `[0, 100]` before scaling, so any input
/// produces a valid value. The result is `floor(percent * MAX / 100)`.
///
/// # Arguments
///
/// * `percent`: Requested duty cycle in percent. Out-of-range values are clamped.
/// * `resolution`: Output resolution providing `MAX`.
pub fn percent_to_scaled(percent: i32, resolution: Resolution) -> u16 {
    let percent = percent.clamp(0, 100) as u32;
    // percent <= 100, so the quotient never exceeds MAX
    ((percent * resolution.max() as u32) / 100) as u16
}

/// Convert a scaled value back to a whole percentage (rounded down).
///
/// Values above `MAX` report as 100%.
pub fn scaled_to_percent(value: u16, resolution: Resolution) -> u8 {
    let value = value.min(resolution.max()) as u32;
    ((value * 100) / resolution.max() as u32) as u8
}

/// Snapshot of a controller's observable state.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DutyCycleState {
    /// Whether output is considered active.
    pub running: bool,
    /// The gated value a caller would forward to a sink.
    pub scaled_value: u16,
    /// The resolution ceiling the value is expressed in.
    pub max: u16,
}

impl fmt::Display for DutyCycleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.running { "active" } else { "stopped" };
        write!(f, "({}, {}/{})", state, self.scaled_value, self.max)
    }
}

/// Duty-cycle controller for a single PWM channel.
///
/// The controller has two states. It starts **Stopped** with a value of zero.
/// [`set_percent`](Self::set_percent) and [`start`](Self::start) move it to
/// **Active**; only [`stop`](Self::stop) moves it back, clearing the stored value.
///
/// None of the operations can fail.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DutyCycleController {
    resolution: Resolution,
    running: bool,
    scaled_value: u16,
}

impl DutyCycleController {
    /// Construct a stopped controller for the given output resolution.
    pub const fn new(resolution: Resolution) -> Self {
        DutyCycleController {
            resolution,
            running: false,
            scaled_value: 0,
        }
    }

    /// Mark output as active.
    ///
    /// The stored value is left untouched, so output resumes at whatever was
    /// last set (zero after a [`stop`](Self::stop)).
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Mark output as inactive and reset the stored value to zero.
    pub fn stop(&mut self) {
        self.running = false;
        self.scaled_value = 0;
    }

    /// Set the duty cycle as a percentage and mark output as active.
    ///
    /// Values below 0 are treated as 0 and values above 100 as 100.
    ///
    /// # Arguments
    ///
    /// * `percent`: Requested duty cycle in percent.
    pub fn set_percent(&mut self, percent: i32) {
        self.scaled_value = percent_to_scaled(percent, self.resolution);
        self.running = true;
    }

    /// Returns the value to forward to an output sink.
    ///
    /// This is the stored value while running and zero otherwise.
    pub fn scaled_value(&self) -> u16 {
        if self.running { self.scaled_value } else { 0 }
    }

    /// Returns whether output is considered active.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns the output resolution.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Returns a snapshot of the observable state.
    pub fn state(&self) -> DutyCycleState {
        DutyCycleState {
            running: self.running,
            scaled_value: self.scaled_value(),
            max: self.resolution.max(),
        }
    }
}

impl fmt::Display for DutyCycleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DutyCycleController {}", self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected(percent: i32, max: u16) -> u16 {
        (percent.clamp(0, 100) as u32 * max as u32 / 100) as u16
    }

    #[test]
    fn test_initial_state() {
        let controller = DutyCycleController::default();
        assert!(!controller.is_running());
        assert_eq!(controller.scaled_value(), 0);
        assert_eq!(controller.resolution(), Resolution::EIGHT_BIT);
    }

    #[test]
    fn test_scenario_eight_bit() {
        let mut controller = DutyCycleController::new(Resolution::EIGHT_BIT);

        controller.set_percent(0);
        assert_eq!(controller.scaled_value(), 0);
        assert!(controller.is_running());

        controller.set_percent(100);
        assert_eq!(controller.scaled_value(), 255);

        controller.set_percent(50);
        assert_eq!(controller.scaled_value(), 127); // floor of 127.5

        controller.stop();
        assert_eq!(controller.scaled_value(), 0);
        assert!(!controller.is_running());

        controller.set_percent(-5);
        assert_eq!(controller.scaled_value(), 0);
        assert!(controller.is_running());

        controller.set_percent(150);
        assert_eq!(controller.scaled_value(), 255);
    }

    #[test]
    fn test_set_percent_always_starts_and_scales() {
        for max in [1u16, 100, 255, 1023, u16::MAX] {
            let resolution = Resolution::new(max).unwrap();
            for p in -250..=350 {
                let mut controller = DutyCycleController::new(resolution);
                controller.set_percent(p);
                assert!(controller.is_running());
                assert_eq!(controller.scaled_value(), expected(p, max), "p={p} max={max}");
                assert!(controller.scaled_value() <= max);
            }
        }
    }

    #[test]
    fn test_out_of_range_saturates() {
        let mut low = DutyCycleController::default();
        let mut zero = DutyCycleController::default();
        low.set_percent(i32::MIN);
        zero.set_percent(0);
        assert_eq!(low, zero);

        let mut high = DutyCycleController::default();
        let mut full = DutyCycleController::default();
        high.set_percent(i32::MAX);
        full.set_percent(100);
        assert_eq!(high, full);
    }

    #[test]
    fn test_stop_resets_value() {
        let mut controller = DutyCycleController::default();
        controller.set_percent(80);
        controller.stop();
        assert!(!controller.is_running());
        assert_eq!(controller.scaled_value(), 0);

        // start after stop does not restore the old value
        controller.start();
        assert!(controller.is_running());
        assert_eq!(controller.scaled_value(), 0);
    }

    #[test]
    fn test_redundant_start_keeps_value() {
        let mut controller = DutyCycleController::default();
        controller.set_percent(60);
        let before = controller.scaled_value();
        assert_eq!(before, 153);

        controller.start();
        assert_eq!(controller.scaled_value(), before);
        assert!(controller.is_running());
    }

    #[test]
    fn test_start_from_initial_state() {
        let mut controller = DutyCycleController::default();
        controller.start();
        assert!(controller.is_running());
        assert_eq!(controller.scaled_value(), 0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut once = DutyCycleController::default();
        once.set_percent(42);
        once.stop();

        let mut twice = once.clone();
        twice.stop();

        assert_eq!(once, twice);
        assert_eq!(once.state(), twice.state());
    }

    #[test]
    fn test_state_snapshot() {
        let mut controller = DutyCycleController::new(Resolution::from_bits(10).unwrap());
        controller.set_percent(25);
        assert_eq!(
            controller.state(),
            DutyCycleState { running: true, scaled_value: 255, max: 1023 }
        );
        assert_eq!(controller.state().to_string(), "(active, 255/1023)");

        controller.stop();
        assert_eq!(controller.state().to_string(), "(stopped, 0/1023)");
    }

    #[test]
    fn test_scaled_to_percent() {
        let resolution = Resolution::EIGHT_BIT;
        assert_eq!(scaled_to_percent(0, resolution), 0);
        assert_eq!(scaled_to_percent(127, resolution), 49);
        assert_eq!(scaled_to_percent(255, resolution), 100);
        assert_eq!(scaled_to_percent(1000, resolution), 100);
    }
}
