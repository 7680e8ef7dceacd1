//! Where "now" comes from.

use jiff::{Timestamp, Zoned, tz::TimeZone};

/// Supplies the current instant, in the time zone the schedule lives in.
pub trait Clock {
    fn now(&self) -> Zoned;
}

/// The wall clock, viewed from a fixed time zone.
pub struct SystemClock {
    tz: TimeZone,
}

impl SystemClock {
    pub fn new(tz: TimeZone) -> Self {
        Self { tz }
    }

    /// Resolves an IANA zone name, falling back to the system zone.
    ///
    /// An unknown name is logged and ignored rather than treated as fatal.
    pub fn for_zone(name: Option<&str>) -> Self {
        let tz = match name {
            Some(name) => TimeZone::get(name).unwrap_or_else(|e| {
                log::warn!("unknown time zone '{name}' ({e}); using system time zone");
                TimeZone::system()
            }),
            None => TimeZone::system(),
        };
        Self::new(tz)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Zoned {
        Timestamp::now().to_zoned(self.tz.clone())
    }
}

/// A fixed instant: a clock that never moves.
impl Clock for Zoned {
    fn now(&self) -> Zoned {
        self.clone()
    }
}
