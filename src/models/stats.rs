// GET /stats response document

use serde::{Deserialize, Serialize};

/// One machine health reading, assembled fresh per request.
///
/// All six keys are always present. Temperature and battery fields hold their
/// defaults (0, 0, false) when every source in their fallback chain came up empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub cpu_usage: f64,
    pub ram_usage: f64,
    pub cpu_temp: f64,
    pub battery_percent: f64,
    pub is_plugged: bool,
    /// Seconds since the Unix epoch, millisecond precision.
    pub timestamp: f64,
}
