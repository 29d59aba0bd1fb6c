#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` duty-cycle controller for a single PWM output channel."]
#![doc = ""]
#![doc = "This crate separates the logical duty-cycle request, held by"]
#![doc = "[`DutyCycleController`], from the act of driving a pin, expressed by the"]
#![doc = "[`OutputSink`] trait. The controller can be exercised without hardware."]

pub mod controller;
pub mod error;
pub mod hal;
pub mod resolution;
pub mod sink;

pub use controller::{DutyCycleController, DutyCycleState, percent_to_scaled, scaled_to_percent};
pub use error::PwmError;
pub use hal::HalPwmSink;
pub use resolution::Resolution;
pub use sink::{OutputSink, RecordingSink};
