use chrono::{Duration, NaiveDate, NaiveTime};

/// Format a duration in seconds to "Xh Ym" or "Ym" string
pub fn format_duration_secs(secs: i64) -> String {
    if secs <= 0 {
        return "now".to_string();
    }
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Format a duration in seconds as zero-padded "HH:MM:SS"
pub fn format_countdown_secs(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// Format a NaiveTime to "HH:MM"
pub fn format_time(t: NaiveTime) -> String {
    t.format("%H:%M").to_string()
}

/// Format a NaiveTime as a 12-hour clock reading, e.g. "02:07:45 PM"
pub fn format_clock(t: NaiveTime) -> String {
    t.format("%I:%M:%S %p").to_string()
}

/// Long-form Gregorian date `offset` days from `base`,
/// e.g. "Friday, December 13, 2024"
pub fn gregorian_label(base: NaiveDate, offset: i64) -> String {
    (base + Duration::days(offset)).format("%A, %B %-d, %Y").to_string()
}

/// Relative label for a day offset: Today, Tomorrow, Yesterday,
/// or a signed day count
pub fn date_label(offset: i64) -> String {
    match offset {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        -1 => "Yesterday".to_string(),
        n if n > 0 => format!("+{} days", n),
        n => format!("{} days", n),
    }
}

const CARDINALS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Nearest eight-wind compass point for a bearing in degrees
pub fn cardinal_name(bearing: u16) -> &'static str {
    let bearing = u32::from(bearing) % 360;
    CARDINALS[((bearing * 2 + 45) / 90) as usize % 8]
}

/// Create a simple ASCII progress bar
pub fn progress_bar(filled: u32, total: u32, width: usize) -> String {
    if total == 0 {
        return "░".repeat(width);
    }
    let ratio = (filled as f64 / total as f64).min(1.0);
    let filled_count = (ratio * width as f64).round() as usize;
    let empty_count = width.saturating_sub(filled_count);
    format!("{}{}", "█".repeat(filled_count), "░".repeat(empty_count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_text_forms() {
        assert_eq!(format_duration_secs(0), "now");
        assert_eq!(format_duration_secs(59), "0m");
        assert_eq!(format_duration_secs(90 * 60), "1h 30m");
    }

    #[test]
    fn countdown_is_zero_padded() {
        assert_eq!(format_countdown_secs(5 * 3600 + 3 * 60 + 9), "05:03:09");
        assert_eq!(format_countdown_secs(0), "00:00:00");
        assert_eq!(format_countdown_secs(-5), "00:00:00");
    }

    #[test]
    fn clock_uses_twelve_hour_form() {
        let afternoon = NaiveTime::from_hms_opt(14, 7, 45).unwrap();
        assert_eq!(format_clock(afternoon), "02:07:45 PM");
        let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
        assert_eq!(format_clock(midnight), "12:00:00 AM");
    }

    #[test]
    fn gregorian_label_crosses_calendar_boundaries() {
        let eve = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(gregorian_label(eve, 0), "Tuesday, December 31, 2024");
        assert_eq!(gregorian_label(eve, 1), "Wednesday, January 1, 2025");
        assert_eq!(gregorian_label(eve, -366), "Sunday, December 31, 2023");
    }

    #[test]
    fn date_labels_match_offsets() {
        assert_eq!(date_label(0), "Today");
        assert_eq!(date_label(1), "Tomorrow");
        assert_eq!(date_label(-1), "Yesterday");
        assert_eq!(date_label(5), "+5 days");
        assert_eq!(date_label(-5), "-5 days");
    }

    #[test]
    fn bearings_map_to_eight_winds() {
        assert_eq!(cardinal_name(245), "SW");
        assert_eq!(cardinal_name(0), "N");
        assert_eq!(cardinal_name(90), "E");
        assert_eq!(cardinal_name(180), "S");
        assert_eq!(cardinal_name(270), "W");
        assert_eq!(cardinal_name(359), "N");
        assert_eq!(cardinal_name(22), "N");
        assert_eq!(cardinal_name(23), "NE");
    }

    #[test]
    fn progress_bar_fills_proportionally() {
        assert_eq!(progress_bar(0, 33, 4), "░░░░");
        assert_eq!(progress_bar(33, 33, 4), "████");
        assert_eq!(progress_bar(1, 2, 4), "██░░");
        assert_eq!(progress_bar(5, 0, 3), "░░░");
    }
}
