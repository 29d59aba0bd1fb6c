//! Output resolution (the ceiling `MAX` of a scaled duty value).

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::PwmError;

/// The resolution ceiling `MAX` of a PWM output.
///
/// A scaled duty value always lies in `[0, MAX]`, where `0` is fully off and
/// `MAX` is fully on. The ceiling is guaranteed to be non-zero.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u16", into = "u16"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution(u16);

impl Resolution {
    /// Conventional 8-bit resolution (`MAX = 255`).
    pub const EIGHT_BIT: Resolution = Resolution(255);

    /// Construct a resolution with the given ceiling.
    ///
    /// # Errors
    ///
    /// Returns `Err(PwmError::InvalidResolution)` if `max` is zero.
    pub const fn new(max: u16) -> Result<Self, PwmError> {
        if max == 0 {
            return Err(PwmError::InvalidResolution("must be positive"));
        }
        Ok(Resolution(max))
    }

    /// Construct the resolution of an `bits`-wide counter, i.e. `2^bits - 1`.
    ///
    /// # Errors
    ///
    /// Returns `Err(PwmError::InvalidBitDepth)` if `bits` is not in `1..=16`.
    pub const fn from_bits(bits: u8) -> Result<Self, PwmError> {
        if bits == 0 || bits > 16 {
            return Err(PwmError::InvalidBitDepth("must be between 1 and 16"));
        }
        Ok(Resolution(((1u32 << bits) - 1) as u16))
    }

    /// Returns the ceiling `MAX`.
    pub const fn max(self) -> u16 {
        self.0
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Resolution::EIGHT_BIT
    }
}

impl TryFrom<u16> for Resolution {
    type Error = PwmError;

    fn try_from(max: u16) -> Result<Self, Self::Error> {
        Resolution::new(max)
    }
}

impl From<Resolution> for u16 {
    fn from(resolution: Resolution) -> Self {
        resolution.0
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0..={}", self.0)
    }
}
