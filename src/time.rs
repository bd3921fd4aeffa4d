use std::sync::Arc;

use chrono::{Local, NaiveDateTime, Timelike};

/// Source of local wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;

    /// Local hour of day, 0 through 23.
    fn hour(&self) -> u32 {
        self.now().hour()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

pub fn system_clock() -> Arc<dyn Clock> {
    Arc::new(SystemClock)
}

#[cfg(test)]
pub struct FixedClock(pub NaiveDateTime);

#[cfg(test)]
impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
pub fn fixed_clock(hour: u32, minute: u32) -> Arc<dyn Clock> {
    let at = chrono::NaiveDate::from_ymd_opt(2024, 3, 14)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap();
    Arc::new(FixedClock(at))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_hour() {
        assert_eq!(fixed_clock(6, 59).hour(), 6);
        assert_eq!(fixed_clock(19, 0).hour(), 19);
    }

    #[test]
    fn system_clock_hour_in_range() {
        assert!(system_clock().hour() < 24);
    }
}
