// Raw readings handed from metric providers to the stats assembler

/// A named cluster of temperature readings (one per hwmon chip, e.g. "coretemp").
#[derive(Debug, Clone, PartialEq)]
pub struct SensorGroup {
    pub name: String,
    /// Current values in degrees Celsius, in the order the platform reports them.
    pub readings: Vec<f64>,
}

impl SensorGroup {
    pub fn new(name: impl Into<String>, readings: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            readings,
        }
    }

    pub fn first(&self) -> Option<f64> {
        self.readings.first().copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BatteryReading {
    pub percent: f64,
    pub plugged: bool,
}
