use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use thiserror::Error;

const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Debug, Error)]
pub enum TimeParseError {
    #[error("timestamp cannot be empty")]
    Empty,
    #[error("invalid datetime format: expected YYYY-MM-DD HH:MM:SS")]
    InvalidDateTime,
    #[error("ambiguous local time: {0}")]
    AmbiguousLocalTime(String),
}

pub fn now_utc() -> i64 {
    Utc::now().timestamp()
}

/// Parses a roster timestamp written in local time back to UTC epoch seconds.
pub fn parse_local_timestamp(input: &str) -> Result<i64, TimeParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeParseError::Empty);
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return local_to_utc_timestamp(dt);
        }
    }

    Err(TimeParseError::InvalidDateTime)
}

/// Renders a UTC epoch timestamp as the local `YYYY-MM-DD HH:MM:SS` string
/// used in roster rows.
pub fn format_timestamp_datetime(ts: i64) -> String {
    let dt = DateTime::<Utc>::from_timestamp(ts, 0)
        .unwrap_or_else(|| DateTime::<Utc>::from_timestamp(0, 0).unwrap())
        .with_timezone(&Local);
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn local_to_utc_timestamp(naive: NaiveDateTime) -> Result<i64, TimeParseError> {
    let local = Local
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| TimeParseError::AmbiguousLocalTime(naive.to_string()))?;
    Ok(local.with_timezone(&Utc).timestamp())
}

#[cfg(test)]
mod tests {
    use super::{format_timestamp_datetime, parse_local_timestamp, TimeParseError};
    use chrono::{Local, TimeZone, Utc};

    #[test]
    fn parse_local_timestamp_accepts_roster_format() {
        let ts = parse_local_timestamp("2030-01-15 13:45:30").unwrap();
        let local = Utc.timestamp_opt(ts, 0).unwrap().with_timezone(&Local);
        assert_eq!(
            local.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2030-01-15 13:45:30"
        );
    }

    #[test]
    fn parse_local_timestamp_rejects_empty() {
        let err = parse_local_timestamp("  ").unwrap_err();
        assert!(matches!(err, TimeParseError::Empty));
    }

    #[test]
    fn parse_local_timestamp_rejects_garbage() {
        let err = parse_local_timestamp("yesterday").unwrap_err();
        assert!(matches!(err, TimeParseError::InvalidDateTime));
    }

    #[test]
    fn format_round_trips_through_parse() {
        let local = Local.with_ymd_and_hms(2030, 1, 15, 13, 45, 30).unwrap();
        let ts = local.with_timezone(&Utc).timestamp();
        let rendered = format_timestamp_datetime(ts);
        assert_eq!(rendered, "2030-01-15 13:45:30");
        assert_eq!(parse_local_timestamp(&rendered).unwrap(), ts);
    }
}
