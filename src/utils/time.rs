//! Time formatting utilities

/// Format a float-second timestamp for filter expressions and display.
///
/// Fixed six-decimal rendering with trailing zeros trimmed, so identical
/// inputs always produce identical text.
pub fn format_timestamp(seconds: f64) -> String {
    let mut text = format!("{:.6}", seconds);
    while text.ends_with('0') {
        text.pop();
    }
    if text.ends_with('.') {
        text.pop();
    }
    text
}

/// Format a remaining-time estimate for human display.
///
/// Seconds under a minute, minutes and seconds under an hour, hours and
/// minutes otherwise.
pub fn format_remaining(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    if seconds < 60.0 {
        format!("{}s", seconds as u64)
    } else if seconds < 3600.0 {
        let minutes = (seconds / 60.0) as u64;
        let secs = (seconds % 60.0) as u64;
        format!("{}m {}s", minutes, secs)
    } else {
        let hours = (seconds / 3600.0) as u64;
        let minutes = ((seconds % 3600.0) / 60.0) as u64;
        format!("{}h {}m", hours, minutes)
    }
}

/// Format seconds as a clock reading for clip listings
pub fn format_clock(seconds: f64) -> String {
    let hours = (seconds / 3600.0) as u32;
    let minutes = ((seconds % 3600.0) / 60.0) as u32;
    let secs = (seconds % 60.0) as u32;
    let milliseconds = ((seconds % 1.0) * 1000.0) as u32;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, milliseconds)
    } else {
        format!("{:02}:{:02}.{:03}", minutes, secs, milliseconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_formatting_is_trimmed_and_stable() {
        assert_eq!(format_timestamp(0.5), "0.5");
        assert_eq!(format_timestamp(10.0), "10");
        assert_eq!(format_timestamp(2.125), "2.125");
        assert_eq!(format_timestamp(0.5), format_timestamp(0.5));
    }

    #[test]
    fn remaining_time_category_transitions() {
        assert_eq!(format_remaining(42.7), "42s");
        assert_eq!(format_remaining(59.9), "59s");
        assert_eq!(format_remaining(60.0), "1m 0s");
        assert_eq!(format_remaining(192.0), "3m 12s");
        assert_eq!(format_remaining(3599.0), "59m 59s");
        assert_eq!(format_remaining(3600.0), "1h 0m");
        assert_eq!(format_remaining(3900.0), "1h 5m");
    }

    #[test]
    fn negative_remaining_clamps_to_zero() {
        assert_eq!(format_remaining(-5.0), "0s");
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(75.5), "01:15.500");
        assert_eq!(format_clock(3675.0), "01:01:15.000");
    }
}
