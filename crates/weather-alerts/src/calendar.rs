//! Human-readable issue times ("Today at 9:48 AM").

use std::fmt::Display;

use chrono::{DateTime, NaiveDateTime, NaiveTime, TimeZone};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Parse a provider `sent` timestamp into the given zone.
///
/// Accepts RFC 3339. A timestamp without an offset is read as wall-clock time
/// in `tz`; a nonexistent or ambiguous wall-clock time yields `None`.
pub fn parse_sent<Tz: TimeZone>(sent: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    let sent = sent.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(sent) {
        return Some(at.with_timezone(tz));
    }
    sent.parse::<NaiveDateTime>()
        .ok()
        .and_then(|naive| tz.from_local_datetime(&naive).single())
}

/// Render `sent` relative to `now`, in `now`'s zone.
///
/// The offset applied to `sent` is the one in force at that instant, so an
/// alert issued before a DST change keeps its own wall-clock time.
/// Within a week either side of today the phrase names the day ("Yesterday",
/// "Last Sunday", "Saturday"); further out it falls back to `MM/DD/YYYY`.
/// Timestamps that cannot be parsed are returned as given.
pub fn calendar_phrase<Tz>(sent: &str, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let Some(at) = parse_sent(sent, &now.timezone()) else {
        return sent.to_string();
    };

    let start_of_today = now.date_naive().and_time(NaiveTime::MIN);
    let days = (at.naive_local() - start_of_today).num_seconds() as f64 / SECONDS_PER_DAY;
    let time = at.format("%-I:%M %p");

    if days < -6.0 {
        at.format("%m/%d/%Y").to_string()
    } else if days < -1.0 {
        format!("Last {} at {}", at.format("%A"), time)
    } else if days < 0.0 {
        format!("Yesterday at {}", time)
    } else if days < 1.0 {
        format!("Today at {}", time)
    } else if days < 2.0 {
        format!("Tomorrow at {}", time)
    } else if days < 7.0 {
        format!("{} at {}", at.format("%A"), time)
    } else {
        at.format("%m/%d/%Y").to_string()
    }
}
