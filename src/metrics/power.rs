// Battery fallback chain: platform API, then the upower-style power tool

use crate::command::CommandRunner;
use crate::models::BatteryReading;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatterySource {
    /// `MetricsProvider::battery` (platform battery API).
    PlatformApi,
    /// `<tool> -e` to list devices, `<tool> -i <device>` to query the battery.
    PowerTool,
}

pub const BATTERY_CHAIN: [BatterySource; 2] =
    [BatterySource::PlatformApi, BatterySource::PowerTool];

/// `Ok(None)` when the tool lists no battery device.
pub(super) async fn query_power_tool(
    runner: &dyn CommandRunner,
    tool: &str,
) -> anyhow::Result<Option<BatteryReading>> {
    let devices = runner.run(tool, &["-e"]).await?.check(tool)?;
    let Some(device) = devices
        .stdout
        .lines()
        .map(str::trim)
        .find(|line| line.contains("battery"))
    else {
        return Ok(None);
    };
    let info = runner.run(tool, &["-i", device]).await?.check(tool)?;
    parse_power_info(&info.stdout).map(Some)
}

/// Parse `percentage:` and `state:` lines of a power tool's device report.
///
/// Plugged iff the state is "charging" or "fully-charged" (any case).
/// A missing or unparsable percentage is an error; a missing state means unplugged.
pub fn parse_power_info(text: &str) -> anyhow::Result<BatteryReading> {
    let mut percent = None;
    let mut plugged = false;
    for line in text.lines() {
        if percent.is_none() && line.contains("percentage:") {
            let raw = value_after_colon(line);
            let raw = raw.trim_end_matches('%').trim();
            let value: f64 = raw
                .parse()
                .map_err(|e| anyhow::anyhow!("unparsable battery percentage {:?}: {}", raw, e))?;
            percent = Some(value);
        } else if line.contains("state:") {
            let state = value_after_colon(line).to_lowercase();
            plugged = state == "charging" || state == "fully-charged";
        }
    }
    let percent = percent.ok_or_else(|| anyhow::anyhow!("no percentage line in power report"))?;
    Ok(BatteryReading { percent, plugged })
}

fn value_after_colon(line: &str) -> &str {
    line.split_once(':').map(|(_, v)| v.trim()).unwrap_or_default()
}
