use chrono::{DateTime, SubsecRound, Utc};

/// Timestamp layout used in responses, e.g. `2024-03-05T12:00:00Z`
pub const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Source of the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current instant formatted with [`format_iso`]
    fn now_iso(&self) -> String {
        format_iso(self.now())
    }
}

/// Reads the system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render an instant as `YYYY-MM-DDTHH:MM:SSZ`.
/// Sub-second precision is truncated, never rounded.
pub fn format_iso(instant: DateTime<Utc>) -> String {
    instant.trunc_subsecs(0).format(ISO_FORMAT).to_string()
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`
pub fn now_iso() -> String {
    SystemClock.now_iso()
}
