//! Parsing passage timestamps from text into local-time instants.
//!
//! Accepted inputs:
//!
//! - RFC 3339 with an offset (`2024-04-29T07:30:00+02:00`), converted into
//!   the target zone;
//! - naive local time (`2024-04-29T07:30:00`, `2024-04-29T07:30`, or the same
//!   with a space instead of `T`), interpreted in the target zone.
//!
//! A naive time that occurs twice (DST fall-back) resolves to the earlier
//! instant. A naive time that never occurs (DST spring-forward gap) is an error.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use chrono_tz::Tz;

use crate::error::{Result, TollError};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an IANA timezone name such as `Europe/Stockholm`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.trim()
        .parse()
        .map_err(|_| TollError::InvalidTimezone(name.to_string()))
}

/// Parse a single passage timestamp into `tz`.
pub fn parse_passage<Z: TimeZone>(text: &str, tz: &Z) -> Result<DateTime<Z>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid(text, "empty timestamp"));
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(tz));
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| {
            invalid(
                text,
                "expected RFC 3339 or local time like 2024-04-29T07:30",
            )
        })?;

    tz.from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| invalid(text, "local time does not exist in this timezone"))
}

/// Parse passages from lines of text, skipping blank lines and `#` comments.
///
/// Fails on the first line that cannot be parsed.
pub fn parse_passages<'a, Z, I>(lines: I, tz: &Z) -> Result<Vec<DateTime<Z>>>
where
    Z: TimeZone,
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| parse_passage(line, tz))
        .collect()
}

fn invalid(input: &str, reason: &str) -> TollError {
    TollError::InvalidTimestamp {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
