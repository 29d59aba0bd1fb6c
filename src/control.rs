use std::time::Duration;

use mtq_pwm::{DutyCycleController, OutputSink};
use tokio::time::{MissedTickBehavior, interval};
use tracing::{info, warn};

use crate::settings::{Command, ScheduledCommand};

/// Periodic loop that plays a command schedule against the controller and
/// forwards the gated value to the sink on every tick.
pub struct ControlLoop<S: OutputSink> {
    controller: DutyCycleController,
    sink: S,
    schedule: Vec<ScheduledCommand>,
    next: usize,
    tick: u64,
}

impl<S: OutputSink> ControlLoop<S> {
    pub fn new(controller: DutyCycleController, sink: S, mut schedule: Vec<ScheduledCommand>) -> Self {
        // stable, so commands sharing a tick keep their file order
        schedule.sort_by_key(|step| step.tick);
        Self { controller, sink, schedule, next: 0, tick: 0 }
    }

    pub fn controller(&self) -> &DutyCycleController {
        &self.controller
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Run the commands due this tick, then forward the controller value.
    pub fn step(&mut self) -> u16 {
        while let Some(step) = self.schedule.get(self.next) {
            if step.tick > self.tick {
                break;
            }
            let command = step.command;
            self.next += 1;
            self.execute(command);
        }

        let value = self.controller.scaled_value();
        self.sink.apply(value);
        self.tick += 1;
        value
    }

    /// Stop the controller and drive the output off.
    pub fn shutdown(&mut self) {
        self.controller.stop();
        self.sink.apply(self.controller.scaled_value());
        info!(tick = self.tick, "Output shut down");
    }

    fn execute(&mut self, command: Command) {
        match command {
            Command::SetPercent { percent } => self.controller.set_percent(percent),
            Command::Start => self.controller.start(),
            Command::Stop => self.controller.stop(),
        }
        info!(tick = self.tick, ?command, state = %self.controller.state(), "Command applied");
    }
}

/// Drive `control` for `ticks` periods, then shut the output down.
pub async fn run<S: OutputSink>(mut control: ControlLoop<S>, period: Duration, ticks: u64) -> ControlLoop<S> {
    if let Some(late) = control.schedule.iter().find(|step| step.tick >= ticks) {
        warn!(tick = late.tick, ticks, "Schedule extends past the run length; later commands are ignored");
    }

    let mut timer = interval(period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

    info!(?period, ticks, "Control loop started");
    for _ in 0..ticks {
        timer.tick().await;
        control.step();
    }

    control.shutdown();
    control
}
