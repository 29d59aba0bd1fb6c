use std::time::Duration;

use anyhow::{Context, bail};
use config::{Config, ConfigError, File, FileFormat};
use mtq_pwm::Resolution;
use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Output channel the sink is bound to.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelSettings {
    /// Pin / channel identifier.
    pub id: u8,
    /// Resolution ceiling (MAX).
    pub resolution: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControlSettings {
    pub period_ms: u64,
    /// Number of ticks to run before shutting the output down.
    pub ticks: u64,
}

/// A controller operation issued by the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Command {
    SetPercent { percent: i32 },
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScheduledCommand {
    pub tick: u64,
    pub command: Command,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub channel: ChannelSettings,
    pub control: ControlSettings,
    #[serde(default)]
    pub schedule: Vec<ScheduledCommand>,
}

impl Settings {
    pub fn resolution(&self) -> anyhow::Result<Resolution> {
        Resolution::new(self.channel.resolution)
            .with_context(|| format!("channel {} has an unusable resolution", self.channel.id))
    }

    pub fn period(&self) -> anyhow::Result<Duration> {
        if self.control.period_ms == 0 {
            bail!("control.period_ms must be positive");
        }
        Ok(Duration::from_millis(self.control.period_ms))
    }
}

pub fn load_config() -> Result<Settings, ConfigError> {
    info!("Attempting to load configuration from {}", DEFAULT_CONFIG_PATH);
    load_from(File::new(DEFAULT_CONFIG_PATH, FileFormat::Toml).required(true))
}

fn load_from<S>(source: S) -> Result<Settings, ConfigError>
where
    S: config::Source + Send + Sync + 'static,
{
    let settings = Config::builder()
        .add_source(source)
        .build()
        .and_then(|config| config.try_deserialize::<Settings>());

    match settings {
        Ok(settings) => {
            info!("Successfully loaded configuration: {:?}", settings);
            Ok(settings)
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            Err(e)
        }
    }
}
