//! Relative time formatting
//!
//! Turns a timestamp into "just now", "12 seconds ago", ... relative to a
//! given instant. Anything a day old or more is shown as an absolute time.

use chrono::{DateTime, Utc};

/// Text shown for a timestamp that was never set
pub const NEVER: &str = "never";

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 24 * HOUR_MS;

/// A timestamp expressed relative to "now"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeTime {
    Never,
    JustNow,
    Seconds(i64),
    Minutes(i64),
    Hours(i64),
    /// A day or older
    Absolute(DateTime<Utc>),
}

impl std::fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelativeTime::Never => f.write_str(NEVER),
            RelativeTime::JustNow => f.write_str("just now"),
            RelativeTime::Seconds(n) => write!(f, "{} seconds ago", n),
            RelativeTime::Minutes(n) => write!(f, "{} minutes ago", n),
            RelativeTime::Hours(n) => write!(f, "{} hours ago", n),
            RelativeTime::Absolute(ts) => f.write_str(&absolute(ts)),
        }
    }
}

/// Classifies `timestamp` relative to `now`.
///
/// The cutoffs are strict `<` comparisons on the millisecond difference;
/// the count shown inside a bucket is rounded half-up, so 59.5s reads
/// "60 seconds ago" while exactly 60s reads "1 minutes ago".
pub fn relative_time(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> RelativeTime {
    let Some(ts) = timestamp else {
        return RelativeTime::Never;
    };

    let diff = (now - ts).num_milliseconds();

    if diff < SECOND_MS {
        RelativeTime::JustNow
    } else if diff < MINUTE_MS {
        RelativeTime::Seconds(round_div(diff, SECOND_MS))
    } else if diff < HOUR_MS {
        RelativeTime::Minutes(round_div(diff, MINUTE_MS))
    } else if diff < DAY_MS {
        RelativeTime::Hours(round_div(diff, HOUR_MS))
    } else {
        RelativeTime::Absolute(ts)
    }
}

/// Shorthand for `relative_time(..).to_string()`
pub fn time_diff(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    relative_time(timestamp, now).to_string()
}

/// Absolute rendering used for tooltips and for timestamps older than a day
pub fn absolute(ts: &DateTime<Utc>) -> String {
    ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

// Only called with non-negative numerators.
fn round_div(value: i64, unit: i64) -> i64 {
    (value + unit / 2) / unit
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn ago_ms(ms: i64) -> String {
        time_diff(Some(now() - Duration::milliseconds(ms)), now())
    }

    #[test]
    fn test_never() {
        assert_eq!(time_diff(None, now()), "never");
    }

    #[test]
    fn test_just_now() {
        assert_eq!(time_diff(Some(now()), now()), "just now");
        assert_eq!(ago_ms(999), "just now");
        // Clock skew: timestamps from the future still read as just now
        assert_eq!(ago_ms(-5_000), "just now");
    }

    #[test]
    fn test_seconds() {
        assert_eq!(ago_ms(30_000), "30 seconds ago");
        assert_eq!(ago_ms(1_000), "1 seconds ago");
        assert_eq!(ago_ms(1_499), "1 seconds ago");
        assert_eq!(ago_ms(1_500), "2 seconds ago");
        assert_eq!(ago_ms(59_500), "60 seconds ago");
    }

    #[test]
    fn test_minute_boundary() {
        assert_eq!(ago_ms(59_999), "60 seconds ago");
        assert_eq!(ago_ms(60_000), "1 minutes ago");
        assert_eq!(ago_ms(90_000), "2 minutes ago");
    }

    #[test]
    fn test_hours() {
        assert_eq!(ago_ms(HOUR_MS), "1 hours ago");
        assert_eq!(ago_ms(90 * MINUTE_MS), "2 hours ago");
        assert_eq!(ago_ms(DAY_MS - 1), "24 hours ago");
    }

    #[test]
    fn test_absolute_after_a_day() {
        let ts = now() - Duration::days(2);
        assert_eq!(
            relative_time(Some(ts), now()),
            RelativeTime::Absolute(ts)
        );
        assert_eq!(time_diff(Some(ts), now()), "2024-03-13 12:00:00 UTC");
        assert_eq!(ago_ms(DAY_MS), "2024-03-14 12:00:00 UTC");
    }
}
