use mtq_pwm::{OutputSink, Resolution, scaled_to_percent};
use tracing::{debug, info};

/// Host-side stand-in for a PWM pin: reports every applied value via `tracing`.
#[derive(Debug)]
pub struct TraceSink {
    channel: u8,
    resolution: Resolution,
    last: Option<u16>,
}

impl TraceSink {
    pub fn new(channel: u8, resolution: Resolution) -> Self {
        info!(channel, max = resolution.max(), "Output channel configured");
        Self { channel, resolution, last: None }
    }

    pub fn last(&self) -> Option<u16> {
        self.last
    }
}

impl OutputSink for TraceSink {
    fn apply(&mut self, value: u16) {
        if self.last != Some(value) {
            debug!(
                channel = self.channel,
                value,
                percent = scaled_to_percent(value, self.resolution),
                "Output changed"
            );
        }
        self.last = Some(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_sink_tracks_last_value() {
        let mut sink = TraceSink::new(9, Resolution::EIGHT_BIT);
        assert_eq!(sink.last(), None);

        sink.apply(127);
        sink.apply(127);
        assert_eq!(sink.last(), Some(127));

        sink.apply(0);
        assert_eq!(sink.last(), Some(0));
    }
}
