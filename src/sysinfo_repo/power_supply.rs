// Platform battery API via the battery crate

use std::io;

use crate::models::BatteryReading;

/// First battery the platform reports. `Ok(None)` when there is none or the
/// platform exposes no power-supply interface at all.
pub(super) fn read_platform_battery() -> anyhow::Result<Option<BatteryReading>> {
    let manager = match battery::Manager::new() {
        Ok(m) => m,
        Err(e) if is_unsupported(&e) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut batteries = match manager.batteries() {
        Ok(b) => b,
        Err(e) if is_unsupported(&e) => {
            tracing::debug!(error = %e, "No power-supply interface");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };
    let battery = match batteries.next() {
        Some(b) => b?,
        None => return Ok(None),
    };

    let percent = (battery.state_of_charge().value * 100.0) as f64;
    let plugged = !matches!(battery.state(), battery::State::Discharging);
    Ok(Some(BatteryReading { percent, plugged }))
}

/// An io `NotFound` (e.g. no `/sys/class/power_supply`) anywhere in the chain.
fn is_unsupported(err: &(dyn std::error::Error + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
        {
            return true;
        }
        current = e.source();
    }
    false
}
