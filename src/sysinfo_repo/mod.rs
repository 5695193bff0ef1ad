// Host metrics via sysinfo (CPU, memory, sensors) and the battery crate

mod power_supply;
mod sensors;

pub use sensors::group_sensor_readings;

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use sysinfo::{Components, System};
use tracing::instrument;

use crate::metrics::MetricsProvider;
use crate::models::{BatteryReading, SensorGroup};

/// Last CPU counter refresh. `usage` stays `None` until a post-warm-up read.
#[derive(Debug, Clone, Copy)]
struct CpuCounter {
    refreshed_at: Instant,
    usage: Option<f64>,
}

pub struct SysinfoRepo {
    sys: Arc<std::sync::Mutex<System>>,
    components: Arc<std::sync::Mutex<Components>>,
    cpu_counter: Arc<std::sync::Mutex<Option<CpuCounter>>>,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl SysinfoRepo {
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_memory();
        let components = Components::new_with_refreshed_list();
        Self {
            sys: Arc::new(std::sync::Mutex::new(sys)),
            components: Arc::new(std::sync::Mutex::new(components)),
            cpu_counter: Arc::new(std::sync::Mutex::new(None)),
        }
    }
}

#[async_trait]
impl MetricsProvider for SysinfoRepo {
    fn warm_up(&self) -> anyhow::Result<()> {
        let mut counter = self
            .cpu_counter
            .lock()
            .map_err(|e| anyhow::anyhow!("cpu counter lock poisoned: {}", e))?;
        if counter.is_some() {
            return Ok(());
        }
        let mut sys = self
            .sys
            .lock()
            .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
        // This first delta is meaningless; it only arms the counter.
        sys.refresh_cpu_usage();
        *counter = Some(CpuCounter {
            refreshed_at: Instant::now(),
            usage: None,
        });
        tracing::debug!("CPU usage counter armed");
        Ok(())
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "cpu_usage"))]
    async fn cpu_usage(&self) -> anyhow::Result<f64> {
        let sys = self.sys.clone();
        let cpu_counter = self.cpu_counter.clone();
        tokio::task::spawn_blocking(move || {
            let mut counter = cpu_counter
                .lock()
                .map_err(|e| anyhow::anyhow!("cpu counter lock poisoned: {}", e))?;
            let Some(prev) = *counter else {
                anyhow::bail!("cpu usage read before the counter was warmed up");
            };

            let now = Instant::now();
            if let Some(usage) = prev.usage
                && now.duration_since(prev.refreshed_at) < sysinfo::MINIMUM_CPU_UPDATE_INTERVAL
            {
                // Too soon for a fresh delta; serve the previous value without blocking
                return Ok(usage);
            }

            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_cpu_usage();
            let usage = (sys.global_cpu_usage() as f64).clamp(0.0, 100.0);
            *counter = Some(CpuCounter {
                refreshed_at: now,
                usage: Some(usage),
            });
            Ok(usage)
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "ram_usage"))]
    async fn ram_usage(&self) -> anyhow::Result<f64> {
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = sys
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo lock poisoned: {}", e))?;
            sys.refresh_memory();

            let total = sys.total_memory();
            let available = sys.available_memory();
            let used = total.saturating_sub(available);
            let usage_percent = if total > 0 {
                (used as f64 / total as f64) * 100.0
            } else {
                0.0
            };
            Ok(usage_percent)
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "sensor_groups"))]
    async fn sensor_groups(&self) -> anyhow::Result<Vec<SensorGroup>> {
        let components = self.components.clone();
        tokio::task::spawn_blocking(move || {
            let mut components = components
                .lock()
                .map_err(|e| anyhow::anyhow!("sysinfo components lock poisoned: {}", e))?;
            components.refresh(false);
            Ok(group_sensor_readings(
                components
                    .list()
                    .iter()
                    .map(|c| (c.label(), c.temperature())),
            ))
        })
        .await
        .map_err(|e| anyhow::anyhow!("sysinfo task join: {}", e))?
    }

    #[instrument(skip(self), fields(repo = "battery", operation = "battery"))]
    async fn battery(&self) -> anyhow::Result<Option<BatteryReading>> {
        tokio::task::spawn_blocking(power_supply::read_platform_battery)
            .await
            .map_err(|e| anyhow::anyhow!("battery task join: {}", e))?
    }
}
