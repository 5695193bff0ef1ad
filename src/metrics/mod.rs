// Stats assembler: one StatsSnapshot per request, built from independent sources

mod power;
mod temperature;

pub use power::{BATTERY_CHAIN, BatterySource, parse_power_info};
pub use temperature::{
    PRIMARY_SENSOR_GROUP, SECONDARY_SENSOR_GROUP, TEMPERATURE_CHAIN, TemperatureRule,
    select_temperature,
};

use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use crate::command::CommandRunner;
use crate::models::{BatteryReading, SensorGroup, StatsSnapshot};

/// OS-level metric sources. `SysinfoRepo` is the real one; tests substitute fakes.
#[async_trait]
pub trait MetricsProvider: Send + Sync {
    /// Arm the delta-based CPU counter. Called once by the entry point before the
    /// listener is bound; later calls are no-ops.
    fn warm_up(&self) -> anyhow::Result<()>;

    /// Instantaneous, non-blocking CPU utilization in percent.
    async fn cpu_usage(&self) -> anyhow::Result<f64>;

    /// Memory in use, in percent.
    async fn ram_usage(&self) -> anyhow::Result<f64>;

    /// Temperature sensor groups in discovery order.
    async fn sensor_groups(&self) -> anyhow::Result<Vec<SensorGroup>>;

    /// Platform battery API. `Ok(None)` when there is no battery or the API is unsupported.
    async fn battery(&self) -> anyhow::Result<Option<BatteryReading>>;
}

pub struct StatsAssembler {
    provider: Arc<dyn MetricsProvider>,
    runner: Arc<dyn CommandRunner>,
    power_tool: String,
}

impl StatsAssembler {
    pub fn new(
        provider: Arc<dyn MetricsProvider>,
        runner: Arc<dyn CommandRunner>,
        power_tool: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            runner,
            power_tool: power_tool.into(),
        }
    }

    /// CPU and memory failures propagate; temperature and battery degrade to defaults.
    #[instrument(skip(self), fields(operation = "get_stats"))]
    pub async fn get_stats(&self) -> anyhow::Result<StatsSnapshot> {
        let cpu_usage = self.provider.cpu_usage().await?;
        let ram_usage = self.provider.ram_usage().await?;
        let cpu_temp = self.cpu_temperature().await;
        let battery = self.battery().await;

        Ok(StatsSnapshot {
            cpu_usage,
            ram_usage,
            cpu_temp,
            battery_percent: battery.percent,
            is_plugged: battery.plugged,
            timestamp: unix_timestamp(),
        })
    }

    async fn cpu_temperature(&self) -> f64 {
        match self.provider.sensor_groups().await {
            Ok(groups) => select_temperature(&groups),
            Err(e) => {
                tracing::warn!(error = %e, "Temperature sensor query failed; reporting 0");
                0.0
            }
        }
    }

    /// Walks `BATTERY_CHAIN` in order; the first source with a value wins.
    /// An error anywhere ends the walk with the defaults.
    async fn battery(&self) -> BatteryReading {
        for source in BATTERY_CHAIN {
            let result = match source {
                BatterySource::PlatformApi => self.provider.battery().await,
                BatterySource::PowerTool => {
                    power::query_power_tool(self.runner.as_ref(), &self.power_tool).await
                }
            };
            match result {
                Ok(Some(reading)) => return reading,
                Ok(None) => {
                    tracing::debug!(?source, "No battery reading; trying next source");
                }
                Err(e) => {
                    tracing::warn!(?source, error = %e, "Battery query failed; reporting defaults");
                    return BatteryReading::default();
                }
            }
        }
        BatteryReading::default()
    }
}

/// Seconds since the Unix epoch with millisecond precision.
pub fn unix_timestamp() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64 / 1000.0
}
