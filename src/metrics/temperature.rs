// cpu_temp selection over reported sensor groups

use crate::models::SensorGroup;

/// x86 package/core sensors.
pub const PRIMARY_SENSOR_GROUP: &str = "coretemp";
/// SoC thermal zone on ARM boards.
pub const SECONDARY_SENSOR_GROUP: &str = "cpu_thermal";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureRule {
    /// First reading of the group with this exact name, if it has any.
    Named(&'static str),
    /// First reading of the first non-empty group, in discovery order.
    FirstAvailable,
}

impl TemperatureRule {
    pub fn select(&self, groups: &[SensorGroup]) -> Option<f64> {
        match self {
            TemperatureRule::Named(name) => groups
                .iter()
                .find(|g| g.name == *name)
                .and_then(SensorGroup::first),
            TemperatureRule::FirstAvailable => groups.iter().find_map(SensorGroup::first),
        }
    }
}

pub const TEMPERATURE_CHAIN: [TemperatureRule; 3] = [
    TemperatureRule::Named(PRIMARY_SENSOR_GROUP),
    TemperatureRule::Named(SECONDARY_SENSOR_GROUP),
    TemperatureRule::FirstAvailable,
];

/// Apply `TEMPERATURE_CHAIN`; 0 when no rule matches.
pub fn select_temperature(groups: &[SensorGroup]) -> f64 {
    TEMPERATURE_CHAIN
        .iter()
        .find_map(|rule| rule.select(groups))
        .unwrap_or(0.0)
}
