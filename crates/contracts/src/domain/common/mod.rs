//! Shared vocabulary of the attendance records.

use chrono::NaiveDate;

/// Departments offered by every department selector, in display order.
pub const DEPARTMENTS: &[&str] = &["Administration", "Finance", "IT", "HR", "Legal"];

/// Day the sample datasets were captured on; "today" counters are relative to it.
pub const SAMPLE_DAY: &str = "2024-01-15";

/// [`SAMPLE_DAY`] as a date.
pub fn sample_date() -> Option<NaiveDate> {
    NaiveDate::parse_from_str(SAMPLE_DAY, "%Y-%m-%d").ok()
}

/// Initials shown in avatar fallbacks: "Sarah Johnson" -> "SJ".
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
}

/// Capitalises the first letter of a wire code: "blurry" -> "Blurry".
pub fn capitalize(code: &str) -> String {
    let mut chars = code.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah Johnson"), "SJ");
        assert_eq!(initials("  emily   brown "), "EB");
        assert_eq!(initials(""), "");
    }

    #[test]
    fn test_sample_date() {
        assert_eq!(sample_date(), NaiveDate::from_ymd_opt(2024, 1, 15));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("blurry"), "Blurry");
        assert_eq!(capitalize(""), "");
    }
}
