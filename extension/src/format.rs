// Display formatting for the panel: dates, money, countdowns, labels
// Dates are UTC calendar dates; "now" is always passed in by the caller.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{PanelError, Result};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Parse `YYYY-MM-DD` (midnight UTC), a naive `YYYY-MM-DDTHH:MM:SS`
/// (read as UTC), or a full RFC 3339 timestamp.
pub fn parse_date(input: &str) -> Result<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return Ok(datetime.and_utc());
    }
    DateTime::parse_from_rfc3339(input)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| PanelError::InvalidDate(input.to_string()))
}

/// Long US form, e.g. `December 30, 2024`
pub fn format_date(input: &str) -> Result<String> {
    Ok(parse_date(input)?.format("%B %-d, %Y").to_string())
}

/// Whole US dollars with thousands separators, e.g. `$10,000,000`
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

/// Countdown shown next to a deadline.
///
/// More than one day left renders whole days, rounded up (`"10 days"`).
/// Otherwise renders hours and minutes (`"1h 0m"`), both floored from the
/// remaining milliseconds. Past deadlines are not clamped and come out
/// negative.
pub fn time_remaining(deadline: &str, now: DateTime<Utc>) -> Result<String> {
    let diff = (parse_date(deadline)? - now).num_milliseconds();
    Ok(countdown(diff))
}

fn countdown(diff_ms: i64) -> String {
    let days = (diff_ms as f64 / DAY_MS as f64).ceil() as i64;
    if days > 1 {
        return format!("{} days", days);
    }

    let hours = (diff_ms as f64 / HOUR_MS as f64).floor() as i64;
    // `%` truncates toward zero, so past deadlines keep a negative remainder
    let minutes = ((diff_ms % HOUR_MS) as f64 / MINUTE_MS as f64).floor() as i64;
    format!("{}h {}m", hours, minutes)
}

/// `autoPopupAlerts` -> `Auto Popup Alerts`
pub fn setting_label(key: &str) -> String {
    let mut label = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_uppercase() && !label.is_empty() {
            label.push(' ');
        }
        if label.is_empty() {
            label.extend(ch.to_uppercase());
        } else {
            label.push(ch);
        }
    }
    label
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_format_date_long_form() {
        assert_eq!(format_date("2024-12-30").unwrap(), "December 30, 2024");
        assert_eq!(format_date("2025-01-05").unwrap(), "January 5, 2025");
        assert_eq!(
            format_date("not a date"),
            Err(PanelError::InvalidDate("not a date".to_string()))
        );
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(10_000_000), "$10,000,000");
        assert_eq!(format_currency(500), "$500");
        assert_eq!(format_currency(1_000), "$1,000");
        assert_eq!(format_currency(0), "$0");
        assert_eq!(format_currency(-25_000), "-$25,000");
    }

    #[test]
    fn test_time_remaining_in_days() {
        let now = at(2024, 12, 20, 0, 0);
        assert_eq!(time_remaining("2024-12-30", now).unwrap(), "10 days");

        // Partial days round up
        let now = at(2024, 12, 20, 12, 0);
        assert_eq!(time_remaining("2024-12-30", now).unwrap(), "10 days");
    }

    #[test]
    fn test_time_remaining_last_day() {
        let now = at(2024, 12, 29, 23, 0);
        assert_eq!(time_remaining("2024-12-30", now).unwrap(), "1h 0m");

        let now = at(2024, 12, 29, 1, 30);
        assert_eq!(time_remaining("2024-12-30", now).unwrap(), "22h 30m");
    }

    #[test]
    fn test_time_remaining_past_deadline_goes_negative() {
        // 30 minutes late: floor(-0.5h) = -1, truncated remainder -30m
        let now = at(2024, 12, 30, 0, 30);
        assert_eq!(time_remaining("2024-12-30", now).unwrap(), "-1h -30m");
    }

    #[test]
    fn test_parse_date_variants() {
        let midnight = at(2024, 12, 30, 0, 0);
        assert_eq!(parse_date("2024-12-30").unwrap(), midnight);
        assert_eq!(parse_date("2024-12-30T00:00:00").unwrap(), midnight);
        assert_eq!(parse_date("2024-12-30T01:00:00+01:00").unwrap(), midnight);
    }

    #[test]
    fn test_setting_labels() {
        assert_eq!(setting_label("autoPopupAlerts"), "Auto Popup Alerts");
        assert_eq!(setting_label("darkMode"), "Dark Mode");
        assert_eq!(setting_label("investigationAlerts"), "Investigation Alerts");
    }
}
