//! The output sink capability and a hardware-free implementation.

/// A capability that applies a scaled duty value to a physical output.
///
/// `0` means fully off and the resolution ceiling `MAX` means fully on.
/// Implementations must prepare their hardware for output when they are
/// constructed, and `apply` must be idempotent and infallible from the
/// caller's point of view.
///
/// The controller never calls a sink; the control loop reads the controller
/// and forwards the value.
pub trait OutputSink {
    /// Drive the output proportionally to `value`.
    fn apply(&mut self, value: u16);
}

impl<S: OutputSink + ?Sized> OutputSink for &mut S {
    fn apply(&mut self, value: u16) {
        (**self).apply(value);
    }
}

/// A sink that only remembers what it was asked to output.
///
/// Useful as a hardware-free stand-in in tests and simulations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    last: Option<u16>,
    applied: usize,
}

impl RecordingSink {
    /// Create a sink that has not been driven yet.
    pub const fn new() -> Self {
        RecordingSink { last: None, applied: 0 }
    }

    /// The most recently applied value, if any.
    pub fn last(&self) -> Option<u16> {
        self.last
    }

    /// Number of `apply` calls so far.
    pub fn applied(&self) -> usize {
        self.applied
    }
}

impl OutputSink for RecordingSink {
    fn apply(&mut self, value: u16) {
        self.last = Some(value);
        self.applied += 1;
    }
}
