//! Formatting helpers for presenting job metadata and report timings.

use time::{format_description::well_known::Rfc3339, OffsetDateTime};

/// Compact display for an RFC3339 timestamp, like `2026-03-17 09:30Z`.
/// Unparseable input is shown as-is rather than hidden.
pub fn format_timestamp(iso: &str) -> String {
    match OffsetDateTime::parse(iso, &Rfc3339) {
        Ok(ts) => {
            let date = ts.date();
            let time = ts.time();
            format!(
                "{:04}-{:02}-{:02} {:02}:{:02}Z",
                date.year(),
                date.month() as u8,
                date.day(),
                time.hour(),
                time.minute()
            )
        }
        Err(_) => iso.to_string(),
    }
}

/// Seconds a plugin spent producing its report.
pub fn format_process_time(seconds: f64) -> String {
    format!("{seconds:.2} s")
}

/// Elapsed time between two RFC3339 timestamps, like `2m 14s`.
/// None when either endpoint fails to parse or the range is negative.
pub fn format_duration_between(start: &str, end: &str) -> Option<String> {
    let start = OffsetDateTime::parse(start, &Rfc3339).ok()?;
    let end = OffsetDateTime::parse(end, &Rfc3339).ok()?;
    let seconds = (end - start).whole_seconds();
    if seconds < 0 {
        return None;
    }

    let (hours, minutes, secs) = (seconds / 3600, (seconds % 3600) / 60, seconds % 60);
    Some(if hours > 0 {
        format!("{hours}h {minutes}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs}s")
    } else {
        format!("{secs}s")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamps_render_compactly() {
        assert_eq!(
            format_timestamp("2026-03-17T09:30:05.123Z"),
            "2026-03-17 09:30Z"
        );
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("soon"), "soon");
    }

    #[test]
    fn durations_pick_a_sensible_unit() {
        let base = "2026-03-17T09:30:00Z";
        assert_eq!(
            format_duration_between(base, "2026-03-17T09:30:42Z").as_deref(),
            Some("42s")
        );
        assert_eq!(
            format_duration_between(base, "2026-03-17T09:32:14Z").as_deref(),
            Some("2m 14s")
        );
        assert_eq!(
            format_duration_between(base, "2026-03-17T11:45:00Z").as_deref(),
            Some("2h 15m")
        );
        assert_eq!(format_duration_between("2026-03-17T09:30:00Z", "bad"), None);
        assert_eq!(format_duration_between(base, "2026-03-17T09:00:00Z"), None);
    }

    #[test]
    fn process_time_keeps_two_decimals() {
        assert_eq!(format_process_time(0.4), "0.40 s");
        assert_eq!(format_process_time(12.345), "12.35 s");
    }
}
