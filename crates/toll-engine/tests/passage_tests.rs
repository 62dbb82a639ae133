//! Tests for parsing passage timestamps and timezones.

use chrono::{TimeZone, Utc};
use chrono_tz::Europe::Stockholm;
use toll_engine::{parse_passage, parse_passages, parse_timezone, TollError};

#[test]
fn parses_iana_timezone() {
    assert_eq!(parse_timezone("Europe/Stockholm").unwrap(), Stockholm);
    assert_eq!(parse_timezone(" UTC ").unwrap(), chrono_tz::UTC);
}

#[test]
fn rejects_unknown_timezone() {
    let err = parse_timezone("Mars/Olympus_Mons").unwrap_err();
    assert_eq!(err, TollError::InvalidTimezone("Mars/Olympus_Mons".to_string()));
}

#[test]
fn naive_local_formats_are_interpreted_in_zone() {
    let expected = Stockholm.with_ymd_and_hms(2024, 4, 29, 7, 30, 0).unwrap();
    for text in [
        "2024-04-29T07:30:00",
        "2024-04-29T07:30",
        "2024-04-29 07:30:00",
        "2024-04-29 07:30",
        "  2024-04-29T07:30  ",
    ] {
        assert_eq!(parse_passage(text, &Stockholm).unwrap(), expected, "{text:?}");
    }
}

#[test]
fn rfc3339_is_converted_into_zone() {
    let parsed = parse_passage("2024-04-29T05:30:00Z", &Stockholm).unwrap();
    assert_eq!(parsed, Stockholm.with_ymd_and_hms(2024, 4, 29, 7, 30, 0).unwrap());

    let parsed = parse_passage("2024-04-29T07:30:00+02:00", &Stockholm).unwrap();
    assert_eq!(parsed.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 4, 29, 5, 30, 0).unwrap());
}

#[test]
fn dst_gap_is_rejected() {
    // Clocks in Stockholm jump from 02:00 to 03:00 on 2024-03-31.
    let err = parse_passage("2024-03-31T02:30", &Stockholm).unwrap_err();
    assert!(matches!(err, TollError::InvalidTimestamp { .. }));
}

#[test]
fn dst_overlap_resolves_to_earlier_instant() {
    // 02:30 happens twice on 2024-10-27; the first is still CEST (UTC+2).
    let parsed = parse_passage("2024-10-27T02:30", &Stockholm).unwrap();
    assert_eq!(parsed.with_timezone(&Utc), Utc.with_ymd_and_hms(2024, 10, 27, 0, 30, 0).unwrap());
}

#[test]
fn garbage_is_rejected_with_input_echoed() {
    let err = parse_passage("next tuesday", &Stockholm).unwrap_err();
    match err {
        TollError::InvalidTimestamp { input, .. } => assert_eq!(input, "next tuesday"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(parse_passage("", &Stockholm).is_err());
    assert!(parse_passage("2024-13-01T07:30", &Stockholm).is_err());
}

#[test]
fn parse_passages_skips_blanks_and_comments() {
    let input = "# Monday commute\n2024-04-29T07:30\n\n2024-04-29T08:15\n   \n";
    let passages = parse_passages(input.lines(), &Stockholm).unwrap();
    assert_eq!(passages.len(), 2);
}

#[test]
fn parse_passages_fails_on_first_bad_line() {
    let input = ["2024-04-29T07:30", "bogus", "2024-04-29T08:15"];
    let err = parse_passages(input, &Stockholm).unwrap_err();
    assert!(err.to_string().contains("bogus"));
}
