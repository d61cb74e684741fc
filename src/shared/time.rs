use chrono::{DateTime, NaiveTime, Utc};

/// Format a timestamp the way SIRI expects it: UTC, millisecond
/// precision, literal `Z` suffix.
pub fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// Parse an `HH:MM` clock time from the route seed data.
pub fn parse_clock_time(time: &str) -> Option<NaiveTime> {
    let mut split = time.split(':');
    let hours: u32 = split.next()?.parse().ok()?;
    let minutes: u32 = split.next()?.parse().ok()?;
    if split.next().is_some() {
        return None;
    }
    NaiveTime::from_hms_opt(hours, minutes, 0)
}

#[test]
fn format_whole_second() {
    let timestamp = DateTime::parse_from_rfc3339("2024-01-15T10:30:10Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(format_timestamp(timestamp), "2024-01-15T10:30:10.000Z");
}

#[test]
fn format_keeps_milliseconds() {
    let timestamp = DateTime::parse_from_rfc3339("2024-01-15T10:30:10.123Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(format_timestamp(timestamp), "2024-01-15T10:30:10.123Z");
}

#[test]
fn format_truncates_microseconds() {
    let timestamp = DateTime::parse_from_rfc3339("2024-01-15T10:30:10.123456Z")
        .unwrap()
        .with_timezone(&Utc);
    assert_eq!(format_timestamp(timestamp), "2024-01-15T10:30:10.123Z");
}

#[test]
fn valid_clock_time_1() {
    let time = "08:00";
    assert_eq!(
        parse_clock_time(time).unwrap(),
        NaiveTime::from_hms_opt(8, 0, 0).unwrap()
    );
}

#[test]
fn valid_clock_time_2() {
    let time = "23:59";
    assert_eq!(
        parse_clock_time(time).unwrap(),
        NaiveTime::from_hms_opt(23, 59, 0).unwrap()
    );
}

#[test]
fn invalid_clock_time_1() {
    let time = "08:0a";
    assert!(parse_clock_time(time).is_none())
}

#[test]
fn invalid_clock_time_2() {
    let time = "08:00:00";
    assert!(parse_clock_time(time).is_none())
}

#[test]
fn invalid_clock_time_3() {
    let time = "25:00";
    assert!(parse_clock_time(time).is_none())
}
