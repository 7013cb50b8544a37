use chrono::{DateTime, Duration, Utc};

use crate::{app::error::Error, model::Importance};

/// Text of a status label together with its importance.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StatusLabel {
    pub text: String,
    pub importance: Importance,
}

impl StatusLabel {
    pub fn new(text: impl Into<String>, importance: Importance) -> Self {
        Self {
            text: text.into(),
            importance,
        }
    }

    pub fn no_character() -> Self {
        Self::new("No character", Importance::Low)
    }

    pub fn waiting() -> Self {
        Self::new("Waiting for character data to be loaded...", Importance::Warning)
    }

    pub fn error(err: &Error) -> Self {
        Self::new(format!("ERROR: {}", err.humanize()), Importance::Danger)
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(text, Importance::Medium)
    }

    pub fn low(text: impl Into<String>) -> Self {
        Self::new(text, Importance::Low)
    }
}

/// Formats a number with thousands separators, e.g. 1,234,567.
pub fn format_count(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Formats a large value in short form with one decimal, e.g. 1.5B.
pub fn format_short(value: f64) -> String {
    let abs = value.abs();
    let (scaled, suffix) = if abs >= 1e12 {
        (value / 1e12, "T")
    } else if abs >= 1e9 {
        (value / 1e9, "B")
    } else if abs >= 1e6 {
        (value / 1e6, "M")
    } else if abs >= 1e3 {
        (value / 1e3, "K")
    } else {
        return format!("{:.0}", value);
    };
    format!("{:.1}{}", scaled, suffix)
}

/// Formats a remaining time compactly, e.g. "3h 12m".
pub fn format_duration(duration: Duration) -> String {
    let seconds = duration.num_seconds().max(0);
    let (hours, minutes) = (seconds / 3600, seconds % 3600 / 60);
    match (hours, minutes) {
        (0, 0) => format!("{}s", seconds),
        (0, m) => format!("{}m", m),
        (h, m) => format!("{}h {}m", h, m),
    }
}

/// Formats a past time relative to now, e.g. "3 hours ago".
pub fn format_ago(time: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - time;
    let (n, unit) = if elapsed.num_days() > 0 {
        (elapsed.num_days(), "day")
    } else if elapsed.num_hours() > 0 {
        (elapsed.num_hours(), "hour")
    } else if elapsed.num_minutes() > 0 {
        (elapsed.num_minutes(), "minute")
    } else {
        return "just now".to_string();
    };
    let plural = if n == 1 { "" } else { "s" };
    format!("{} {}{} ago", n, unit, plural)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::service::ServiceError;

    /// Expect error labels to be prefixed and dangerous
    #[test]
    fn error_label() {
        let err: Error = ServiceError::FetchFailed {
            what: "assets".to_string(),
            reason: "timeout".to_string(),
        }
        .into();
        let label = StatusLabel::error(&err);

        assert_eq!(label.text, "ERROR: Failed to fetch assets: timeout");
        assert_eq!(label.importance, Importance::Danger);
    }

    /// Expect thousands separators
    #[test]
    fn formats_counts() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(-1234567), "-1,234,567");
    }

    /// Expect short values with one decimal
    #[test]
    fn formats_short() {
        assert_eq!(format_short(950.0), "950");
        assert_eq!(format_short(1_500.0), "1.5K");
        assert_eq!(format_short(2_340_000_000.0), "2.3B");
    }

    /// Expect hours and minutes, falling back to seconds
    #[test]
    fn formats_duration() {
        assert_eq!(format_duration(Duration::seconds(42)), "42s");
        assert_eq!(format_duration(Duration::minutes(59)), "59m");
        assert_eq!(format_duration(Duration::minutes(192)), "3h 12m");
        assert_eq!(format_duration(Duration::seconds(-5)), "0s");
    }

    /// Expect the largest unit with singular and plural forms
    #[test]
    fn formats_ago() {
        let now = Utc::now();

        assert_eq!(format_ago(now - Duration::seconds(30), now), "just now");
        assert_eq!(format_ago(now - Duration::minutes(1), now), "1 minute ago");
        assert_eq!(format_ago(now - Duration::hours(3), now), "3 hours ago");
        assert_eq!(format_ago(now - Duration::days(2), now), "2 days ago");
    }
}
