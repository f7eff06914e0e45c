//! ETA and percent-complete computation.
//!
//! All inputs are bit-denominated. Invalid inputs (non-positive speed, nothing
//! left to download) produce an empty ETA string rather than an error.

use chrono::{DateTime, Datelike, Timelike, Utc};
use std::fmt;

/// Calendar components between the Unix epoch and epoch plus some seconds (UTC).
///
/// Reading the delta off a calendar keeps month lengths and leap years out of
/// hand-written modulo arithmetic. Multi-month spans therefore use calendar
/// month lengths rather than a fixed 30 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarDelta {
    pub years: i64,
    pub months: i64,
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl CalendarDelta {
    /// Delta for `seconds` after the epoch; `None` when the instant is out of calendar range.
    pub fn from_epoch_seconds(seconds: u64) -> Option<Self> {
        let secs = i64::try_from(seconds).ok()?;
        let epoch = DateTime::<Utc>::from_timestamp(0, 0)?;
        let later = DateTime::<Utc>::from_timestamp(secs, 0)?;

        Some(Self {
            years: i64::from(later.year()) - i64::from(epoch.year()),
            months: i64::from(later.month0()) - i64::from(epoch.month0()),
            days: i64::from(later.day()) - i64::from(epoch.day()),
            hours: i64::from(later.hour()) - i64::from(epoch.hour()),
            minutes: i64::from(later.minute()) - i64::from(epoch.minute()),
            seconds: i64::from(later.second()) - i64::from(epoch.second()),
        })
    }

    fn components(&self) -> [(i64, &'static str); 6] {
        [
            (self.years, "year"),
            (self.months, "month"),
            (self.days, "day"),
            (self.hours, "hr"),
            (self.minutes, "min"),
            (self.seconds, "sec"),
        ]
    }
}

/// Renders non-zero components as `"1 day, 3 hrs, 10 mins, 42 secs"`.
/// An all-zero delta renders as the empty string.
impl fmt::Display for CalendarDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (value, unit) in self.components() {
            if value < 1 {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            if value == 1 {
                write!(f, "{value} {unit}")?;
            } else {
                write!(f, "{value} {unit}s")?;
            }
        }
        Ok(())
    }
}

/// Human-readable duration for a whole number of seconds.
pub fn format_duration(seconds: u64) -> String {
    CalendarDelta::from_epoch_seconds(seconds)
        .map(|delta| delta.to_string())
        .unwrap_or_default()
}

/// Estimated time to finish, or `""` when no meaningful ETA exists.
///
/// Seconds are rounded up so completion is never under-promised.
pub fn compute_eta(total_bits: f64, downloaded_bits: f64, speed_bits_per_sec: f64) -> String {
    let remaining = total_bits - downloaded_bits;
    if speed_bits_per_sec > 0.0 && remaining > 0.0 {
        let seconds = (remaining / speed_bits_per_sec).ceil();
        if !seconds.is_finite() || seconds >= u64::MAX as f64 {
            tracing::debug!(remaining, speed_bits_per_sec, "eta out of range");
            return String::new();
        }
        format_duration(seconds as u64)
    } else {
        String::new()
    }
}

/// Percent downloaded, rounded up. Not clamped: `downloaded > total` yields more than 100.
pub fn percent_complete(total_bits: f64, downloaded_bits: f64) -> i64 {
    if total_bits == 0.0 {
        return 0;
    }
    (100.0 * downloaded_bits / total_bits).ceil() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINUTE: f64 = 60.0;
    const HOUR: f64 = MINUTE * 60.0;
    const DAY: f64 = HOUR * 24.0;

    #[test]
    fn even_divide_with_all_units() {
        let downloaded = 123_456.0;
        let speed = 5_936_000.0;
        let eta_secs = DAY + HOUR * 3.0 + MINUTE * 10.0 + 42.0;
        let total = eta_secs * speed + downloaded;
        assert_eq!(
            compute_eta(total, downloaded, speed),
            "1 day, 3 hrs, 10 mins, 42 secs"
        );
    }

    #[test]
    fn zero_hours_are_omitted() {
        let downloaded = 123_456.0;
        let speed = 5_936_000.0;
        let eta_secs = DAY * 3.0 + MINUTE * 43.0 + 9.0;
        let total = eta_secs * speed + downloaded;
        assert_eq!(compute_eta(total, downloaded, speed), "3 days, 43 mins, 9 secs");
    }

    #[test]
    fn uneven_divide_rounds_up() {
        assert_eq!(compute_eta(3.0, 0.0, 2.0), "2 secs");
    }

    #[test]
    fn fractional_bits_round_up() {
        let total = MINUTE * 17.0 + 13.0 + 0.2;
        assert_eq!(compute_eta(total, 0.0, 1.0), "17 mins, 14 secs");
    }

    #[test]
    fn singular_units() {
        assert_eq!(compute_eta(1.0, 0.0, 1.0), "1 sec");
        assert_eq!(format_duration(3600 + 60 + 1), "1 hr, 1 min, 1 sec");
    }

    #[test]
    fn zero_speed_gives_no_eta() {
        assert_eq!(compute_eta(100.0, 10.0, 0.0), "");
        assert_eq!(compute_eta(100.0, 10.0, -5.0), "");
    }

    #[test]
    fn nothing_remaining_gives_no_eta() {
        assert_eq!(compute_eta(10.0, 100.0, 1.0), "");
        assert_eq!(compute_eta(10.0, 10.0, 1.0), "");
    }

    #[test]
    fn nan_inputs_give_no_eta() {
        assert_eq!(compute_eta(f64::NAN, 0.0, 1.0), "");
        assert_eq!(compute_eta(10.0, 0.0, f64::NAN), "");
    }

    #[test]
    fn absurd_durations_give_no_eta() {
        assert_eq!(compute_eta(f64::MAX, 0.0, f64::MIN_POSITIVE), "");
        assert_eq!(format_duration(u64::MAX), "");
    }

    #[test]
    fn zero_seconds_is_empty() {
        assert_eq!(format_duration(0), "");
    }

    #[test]
    fn long_durations_use_calendar_months() {
        // 1970-02-10T00:00:00Z
        assert_eq!(format_duration(40 * 86_400), "1 month, 9 days");
        // 1971-01-01T00:00:00Z
        assert_eq!(format_duration(365 * 86_400), "1 year");
    }

    #[test]
    fn eta_is_idempotent() {
        let a = compute_eta(1e12, 3e9, 8e6);
        let b = compute_eta(1e12, 3e9, 8e6);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn percent_values() {
        assert_eq!(percent_complete(0.0, 42.0), 0);
        assert_eq!(percent_complete(100.0, 50.0), 50);
        assert_eq!(percent_complete(3.0, 1.0), 34);
        assert_eq!(percent_complete(10.0, 20.0), 200);
        assert_eq!(percent_complete(10.0, 0.0), 0);
    }
}
