//! [`OutputSink`] adapter for any `embedded-hal` PWM channel.

use embedded_hal::pwm::SetDutyCycle;

use crate::{OutputSink, Resolution};

/// Drives an `embedded-hal` PWM channel from scaled duty values.
///
/// The channel's own `max_duty_cycle()` does not need to match the
/// resolution: a value `v` is output as `v / MAX` of the channel's range.
pub struct HalPwmSink<P: SetDutyCycle> {
    channel: P,
    resolution: Resolution,
}

impl<P: SetDutyCycle> HalPwmSink<P> {
    /// Take ownership of `channel` and drive it fully off.
    ///
    /// # Arguments
    ///
    /// * `channel`: A PWM channel already configured for output by the HAL.
    /// * `resolution`: The resolution incoming values are expressed in.
    pub fn new(mut channel: P, resolution: Resolution) -> Self {
        let _ = channel.set_duty_cycle_fully_off();
        Self { channel, resolution }
    }

    /// Returns the resolution incoming values are expressed in.
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Give the channel back, e.g. to reconfigure it.
    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> OutputSink for HalPwmSink<P> {
    fn apply(&mut self, value: u16) {
        let max = self.resolution.max();
        // Hardware errors have no path back to the caller; the next tick retries.
        let _ = self.channel.set_duty_cycle_fraction(value.min(max), max);
    }
}
