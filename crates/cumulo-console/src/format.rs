//! Display formatting helpers

/// Format a count with K/M suffix
pub fn format_number(num: u64) -> String {
    if num >= 1_000_000 {
        format!("{:.1}M", num as f64 / 1_000_000.0)
    } else if num >= 1_000 {
        format!("{:.1}K", num as f64 / 1_000.0)
    } else {
        num.to_string()
    }
}

/// Format a byte rate as MB/s
pub fn format_rate_mb(bytes_per_sec: u64) -> String {
    format!("{:.1} MB/s", bytes_per_sec as f64 / 1_000_000.0)
}

/// CSS class for a utilization percentage
pub fn utilization_class(pct: u8) -> &'static str {
    if pct < 70 {
        "good"
    } else if pct < 85 {
        "warning"
    } else {
        "error"
    }
}

/// CSS class for a consumer lag figure
pub fn lag_class(lag: u64) -> &'static str {
    if lag < 1_000 {
        "good"
    } else if lag < 10_000 {
        "warning"
    } else {
        "error"
    }
}

/// Format a millisecond timestamp as a wall-clock HH:MM:SS for display
pub fn format_time(timestamp_ms: u64) -> String {
    let date = js_sys::Date::new(&js_sys::Number::from(timestamp_ms as f64));
    format!(
        "{:02}:{:02}:{:02}",
        date.get_hours(),
        date.get_minutes(),
        date.get_seconds()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_suffixes() {
        assert_eq!(format_number(512), "512");
        assert_eq!(format_number(4_812), "4.8K");
        assert_eq!(format_number(19_204_887), "19.2M");
    }

    #[test]
    fn rate_in_megabytes() {
        assert_eq!(format_rate_mb(24_500_000), "24.5 MB/s");
    }

    #[test]
    fn utilization_thresholds() {
        assert_eq!(utilization_class(31), "good");
        assert_eq!(utilization_class(78), "warning");
        assert_eq!(utilization_class(91), "error");
    }

    #[test]
    fn lag_thresholds() {
        assert_eq!(lag_class(128), "good");
        assert_eq!(lag_class(3_550), "warning");
        assert_eq!(lag_class(42_117), "error");
    }
}
