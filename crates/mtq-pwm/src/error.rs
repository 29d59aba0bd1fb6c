//! Error types for the `mtq-pwm` crate.
//!
//! The controller itself never fails. Errors only arise when describing the
//! output resolution a controller or sink is built for.

use core::fmt;

/// Errors that can occur while configuring a PWM output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PwmError {
    /// Error for an invalid resolution ceiling.
    /// This variant is returned when a resolution of zero is requested.
    InvalidResolution(&'static str),
    /// Error for an invalid bit depth.
    /// This variant is returned when a bit depth outside `1..=16` is requested.
    InvalidBitDepth(&'static str),
}

impl fmt::Display for PwmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PwmError::InvalidResolution(msg) => write!(f, "Invalid resolution: {}", msg),
            PwmError::InvalidBitDepth(msg) => write!(f, "Invalid bit depth: {}", msg),
        }
    }
}

impl core::error::Error for PwmError {}
