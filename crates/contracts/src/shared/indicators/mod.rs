use serde::{Deserialize, Serialize};

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Number { decimals: u8 },
    Percent { decimals: u8 },
    Integer,
}

/// Visual status of the indicator (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
    Warning,
}

impl ValueFormat {
    /// Renders a stat card value, e.g. `86`, `95.0%`.
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Integer => format!("{}", value.round() as i64),
            ValueFormat::Number { decimals } => format!("{:.*}", *decimals as usize, value),
            ValueFormat::Percent { decimals } => format!("{:.*}%", *decimals as usize, value),
        }
    }
}

impl IndicatorStatus {
    /// Suffix of the `stat-card--*` modifier class
    pub fn css_modifier(&self) -> &'static str {
        match self {
            IndicatorStatus::Good => "good",
            IndicatorStatus::Bad => "bad",
            IndicatorStatus::Neutral => "neutral",
            IndicatorStatus::Warning => "warning",
        }
    }
}

/// Signed change label: `+12%`, `-3%`, `0%`.
pub fn format_change(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{}%", percent.round() as i64)
    } else {
        format!("{}%", percent.round() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(ValueFormat::Integer.render(86.4), "86");
        assert_eq!(ValueFormat::Percent { decimals: 1 }.render(95.0), "95.0%");
        assert_eq!(ValueFormat::Number { decimals: 2 }.render(1.5), "1.50");
    }

    #[test]
    fn test_format_change() {
        assert_eq!(format_change(12.0), "+12%");
        assert_eq!(format_change(-3.2), "-3%");
        assert_eq!(format_change(0.0), "0%");
    }
}
