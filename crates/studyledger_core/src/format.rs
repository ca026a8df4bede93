//! Human-readable rendering of durations and wall-clock times.

use chrono::{DateTime, Local};
use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Renders `duration` rounded to the nearest second.
///
/// The largest non-zero unit leads and seconds are always shown:
/// `"1h 2m 3s"`, `"4m 0s"`, `"9s"`. Half a second rounds up.
pub fn format_duration(duration: Duration) -> String {
    let total_secs = (duration.as_nanos() + NANOS_PER_SEC / 2) / NANOS_PER_SEC;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {minutes}m {seconds}s")
    } else if minutes > 0 {
        format!("{minutes}m {seconds}s")
    } else {
        format!("{seconds}s")
    }
}

/// Renders a local timestamp as 24-hour `HH:MM:SS`.
pub fn format_wall_time(time: DateTime<Local>) -> String {
    time.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_duration, format_wall_time};
    use chrono::{Local, TimeZone};
    use std::time::Duration;

    #[test]
    fn seconds_only_below_one_minute() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(499)), "0s");
        assert_eq!(format_duration(Duration::from_secs(42)), "42s");
    }

    #[test]
    fn rounding_can_carry_into_next_unit() {
        assert_eq!(format_duration(Duration::from_millis(59_500)), "1m 0s");
        assert_eq!(format_duration(Duration::from_millis(3_599_600)), "1h 0m 0s");
    }

    #[test]
    fn hours_keep_zero_minutes_visible() {
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h 0m 0s");
        assert_eq!(format_duration(Duration::from_secs(2 * 3600 + 5)), "2h 0m 5s");
        assert_eq!(format_duration(Duration::from_secs(27 * 3600 + 61)), "27h 1m 1s");
    }

    #[test]
    fn minutes_without_hours() {
        assert_eq!(format_duration(Duration::from_secs(61)), "1m 1s");
        assert_eq!(format_duration(Duration::from_secs(600)), "10m 0s");
    }

    #[test]
    fn wall_time_is_zero_padded() {
        let time = Local
            .with_ymd_and_hms(2026, 7, 3, 7, 5, 9)
            .earliest()
            .expect("local time should exist");
        assert_eq!(format_wall_time(time), "07:05:09");
    }
}
