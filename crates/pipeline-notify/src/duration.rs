//! Human-readable pipeline durations.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::{NotifyError, Result};

/// Timestamp layout GitLab uses for `CI_PIPELINE_CREATED_AT`.
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Shown when the pipeline start time is unknown.
pub const UNKNOWN_DURATION: &str = "N/A";

/// Format seconds into a human-readable duration, dropping zero leading units.
#[must_use]
pub fn format_duration(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{hours}h {mins}m {secs}s")
    } else if mins > 0 {
        format!("{mins}m {secs}s")
    } else {
        format!("{secs}s")
    }
}

/// Format the time elapsed between `start` and `now`.
///
/// Returns [`UNKNOWN_DURATION`] when no start timestamp is available. A start
/// time later than `now` counts as zero elapsed seconds.
///
/// # Errors
///
/// Returns [`NotifyError::InvalidTimestamp`] if `start` is not of the form
/// `YYYY-MM-DDTHH:MM:SSZ`.
pub fn pipeline_duration(start: Option<&str>, now: DateTime<Utc>) -> Result<String> {
    let Some(start) = start.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(UNKNOWN_DURATION.to_string());
    };

    let started = NaiveDateTime::parse_from_str(start, CREATED_AT_FORMAT)
        .map_err(|source| NotifyError::InvalidTimestamp {
            value: start.to_string(),
            source,
        })?
        .and_utc();

    let elapsed = u64::try_from((now - started).num_seconds()).unwrap_or(0);
    Ok(format_duration(elapsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    /// Parse a formatted duration back into seconds.
    fn total_seconds(formatted: &str) -> u64 {
        formatted
            .split_whitespace()
            .map(|part| {
                let (value, unit) = part.split_at(part.len() - 1);
                let value: u64 = value.parse().unwrap();
                match unit {
                    "h" => value * 3600,
                    "m" => value * 60,
                    "s" => value,
                    other => panic!("unexpected unit {other}"),
                }
            })
            .sum()
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0s");
        assert_eq!(format_duration(59), "59s");
        assert_eq!(format_duration(60), "1m 0s");
        assert_eq!(format_duration(3600), "1h 0m 0s");
        assert_eq!(format_duration(3661), "1h 1m 1s");
        assert_eq!(format_duration(100 * 3600 + 5), "100h 0m 5s");
    }

    #[test]
    fn test_format_duration_is_lossless() {
        for secs in (0..20_000).chain([86_399, 86_400, 1_000_000]) {
            assert_eq!(total_seconds(&format_duration(secs)), secs, "secs = {secs}");
        }
    }

    #[test]
    fn test_pipeline_duration_without_start() {
        let now = Utc::now();
        assert_eq!(pipeline_duration(None, now).unwrap(), "N/A");
        assert_eq!(pipeline_duration(Some(""), now).unwrap(), "N/A");
    }

    #[test]
    fn test_pipeline_duration_elapsed() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 15).unwrap();
        assert_eq!(
            pipeline_duration(Some("2024-05-01T11:29:14Z"), now).unwrap(),
            "1h 1m 1s"
        );
        assert_eq!(
            pipeline_duration(Some("2024-05-01T12:30:15Z"), now).unwrap(),
            "0s"
        );
    }

    #[test]
    fn test_pipeline_duration_spans_days() {
        let now = Utc.with_ymd_and_hms(2024, 5, 2, 12, 0, 0).unwrap();
        assert_eq!(
            pipeline_duration(Some("2024-05-01T11:00:00Z"), now).unwrap(),
            "25h 0m 0s"
        );
    }

    #[test]
    fn test_pipeline_duration_future_start_is_zero() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        assert_eq!(
            pipeline_duration(Some("2024-05-01T12:05:00Z"), now).unwrap(),
            "0s"
        );
    }

    #[test]
    fn test_pipeline_duration_rejects_bad_timestamp() {
        let err = pipeline_duration(Some("yesterday"), Utc::now()).unwrap_err();
        assert!(matches!(err, NotifyError::InvalidTimestamp { ref value, .. } if value == "yesterday"));
    }
}
