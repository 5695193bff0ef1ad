// Component labels -> named sensor groups

use crate::models::SensorGroup;

/// Group `(label, temperature)` pairs by the chip name that prefixes each label
/// ("coretemp Package id 0" -> "coretemp"). Groups keep discovery order and
/// readings without a temperature are dropped.
pub fn group_sensor_readings<'a, I>(readings: I) -> Vec<SensorGroup>
where
    I: IntoIterator<Item = (&'a str, Option<f32>)>,
{
    let mut groups: Vec<SensorGroup> = Vec::new();
    for (label, temperature) in readings {
        let name = label.split_whitespace().next().unwrap_or_default();
        let idx = match groups.iter().position(|g| g.name == name) {
            Some(idx) => idx,
            None => {
                groups.push(SensorGroup::new(name, Vec::new()));
                groups.len() - 1
            }
        };
        if let Some(t) = temperature.filter(|t| t.is_finite()) {
            groups[idx].readings.push(t as f64);
        }
    }
    groups
}
