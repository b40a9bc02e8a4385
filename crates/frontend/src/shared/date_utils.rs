/// Utilities for date and time formatting
///
/// Sample records carry ISO dates ("2024-01-15") and 24h times ("09:15");
/// pages show them in the US long form.
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Format ISO date string to "Jan 15, 2024"
/// Unparseable input is returned unchanged.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Short axis label for chart series: "2024-01-08" -> "Jan 8"
pub fn format_axis_date(date_str: &str) -> String {
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format "HH:MM" (24h) or "09:15 AM" to "9:15 AM". Placeholders such as "--" pass through.
pub fn format_time(time_str: &str) -> String {
    let trimmed = time_str.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%I:%M %p"))
        .map(|time| time.format("%-I:%M %p").to_string())
        .unwrap_or_else(|_| time_str.to_string())
}

/// "2024-01-15 09:35:00" -> "Jan 15, 2024 9:35 AM"
pub fn format_timestamp(ts: &str) -> String {
    match NaiveDateTime::parse_from_str(ts.trim(), "%Y-%m-%d %H:%M:%S") {
        Ok(dt) => dt.format("%b %-d, %Y %-I:%M %p").to_string(),
        Err(_) => ts.to_string(),
    }
}

/// Today's date in the browser locale, long form: "Monday, January 15, 2024"
pub fn today_long() -> String {
    let options = js_sys::Object::new();
    for (key, value) in [("weekday", "long"), ("year", "numeric"), ("month", "long"), ("day", "numeric")] {
        let _ = js_sys::Reflect::set(&options, &key.into(), &value.into());
    }
    js_sys::Date::new_0()
        .to_locale_date_string("default", &options)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
        assert_eq!(format_date("2024-01-15 09:00:00"), "Jan 15, 2024");
        assert_eq!(format_axis_date("2024-01-08"), "Jan 8");
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("09:15"), "9:15 AM");
        assert_eq!(format_time("17:30"), "5:30 PM");
        assert_eq!(format_time("09:05 AM"), "9:05 AM");
        assert_eq!(format_time("05:30 PM"), "5:30 PM");
        assert_eq!(format_time("--"), "--");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-01-15 09:35:00"), "Jan 15, 2024 9:35 AM");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_axis_date("invalid"), "invalid");
    }
}
