use chrono::{DateTime, Utc};

const MINUTES_IN_HOUR: f64 = 60.0;
const MINUTES_IN_DAY: f64 = 1_440.0;
const MINUTES_IN_MONTH: f64 = 43_200.0;
const MINUTES_IN_TWO_MONTHS: f64 = 86_400.0;

/// Converts a Unix-seconds publication time; `None` if chrono cannot represent it.
pub fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}

/// Human distance between `then` and `now`, e.g. `about 3 hours ago` or `in 2 days`.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();
    let distance = distance_in_words(seconds.unsigned_abs());
    if seconds < 0 {
        format!("in {distance}")
    } else {
        format!("{distance} ago")
    }
}

/// [`relative_time`] for a Unix timestamp.
pub fn relative_unix(secs: i64, now: DateTime<Utc>) -> String {
    from_unix(secs).map_or_else(|| "unknown time".to_string(), |then| relative_time(then, now))
}

fn plural(n: u64, unit: &str) -> String {
    if n == 1 { format!("1 {unit}") } else { format!("{n} {unit}s") }
}

fn distance_in_words(seconds: u64) -> String {
    let minutes = (seconds as f64 / 60.0).round();

    if minutes < 2.0 {
        return if minutes == 0.0 {
            "less than a minute".to_string()
        } else {
            "1 minute".to_string()
        };
    }
    if minutes < 45.0 {
        return plural(minutes as u64, "minute");
    }
    if minutes < 90.0 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes / MINUTES_IN_HOUR).round() as u64;
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < 2_520.0 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        return plural((minutes / MINUTES_IN_DAY).round() as u64, "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes / MINUTES_IN_MONTH).round() as u64;
        return format!("about {}", plural(months, "month"));
    }

    let months = (minutes / MINUTES_IN_MONTH).floor() as u64;
    if months < 12 {
        return plural((minutes / MINUTES_IN_MONTH).round() as u64, "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}
