mod settings; // typed settings loaded from `config/default.toml`
mod control;  // periodic loop forwarding controller output to the sink
mod sink;     // tracing-backed output sink

use anyhow::Context;
use control::ControlLoop;
use mtq_pwm::DutyCycleController;
use sink::TraceSink;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("MTQ driver started.");

    if let Err(e) = run().await {
        error!("MTQ driver failed: {:?}", e);
        return Err(e);
    }

    info!("MTQ driver finished.");
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let settings = settings::load_config().context("failed to load configuration")?;
    let resolution = settings.resolution()?;
    let period = settings.period()?;

    let controller = DutyCycleController::new(resolution);
    let sink = TraceSink::new(settings.channel.id, resolution);
    let control = ControlLoop::new(controller, sink, settings.schedule);

    let control = control::run(control, period, settings.control.ticks).await;
    info!(state = %control.controller().state(), "Final controller state");
    Ok(())
}
