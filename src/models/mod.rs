// Wire documents and provider readings

mod notification;
mod readings;
mod stats;
mod status;

pub use notification::{
    DEFAULT_PACKAGE_NAME, MAX_BODY_CHARS, MAX_PACKAGE_CHARS, MAX_SUMMARY_CHARS, MAX_TEXT_CHARS,
    MAX_TITLE_CHARS, NotificationPayload, NotificationRequest, truncate_chars,
};
pub use readings::{BatteryReading, SensorGroup};
pub use stats::StatsSnapshot;
pub use status::StatusResponse;
