use punchsheet::errors::AppError;
use punchsheet::utils::time::{
    SignStyle, format_minutes, format_signed, format_unsigned, milliseconds_to_hhmm,
    parse_time_to_minutes,
};

#[test]
fn test_parse_plain_and_signed() {
    assert_eq!(parse_time_to_minutes("08:48").unwrap(), 528);
    assert_eq!(parse_time_to_minutes("+01:57").unwrap(), 117);
    assert_eq!(parse_time_to_minutes("-00:30").unwrap(), -30);
    assert_eq!(parse_time_to_minutes("-02:05").unwrap(), -125);
}

#[test]
fn test_parse_empty_is_zero() {
    assert_eq!(parse_time_to_minutes("").unwrap(), 0);
    assert_eq!(parse_time_to_minutes("   ").unwrap(), 0);
}

#[test]
fn test_parse_malformed_fails() {
    for bad in ["0848", "ab:cd", "08:", ":30", "8h", "08:4x", "+-08:00", "08:75",
        "999999999999999999:00", "99999999999999999999:00"] {
        assert!(
            matches!(parse_time_to_minutes(bad), Err(AppError::InvalidTime(_))),
            "expected InvalidTime for {bad:?}"
        );
    }
}

#[test]
fn test_format_sign_variants() {
    assert_eq!(format_signed(0), "+00:00");
    assert_eq!(format_signed(137), "+02:17");
    assert_eq!(format_signed(-528), "-08:48");
    assert_eq!(format_unsigned(62), "01:02");
    assert_eq!(format_unsigned(-13), "-00:13");
    assert_eq!(format_minutes(1500, SignStyle::NegativeOnly), "25:00");
}

#[test]
fn test_round_trip_keeps_text() {
    for s in ["00:00", "01:02", "08:48", "23:59", "-00:13"] {
        assert_eq!(format_unsigned(parse_time_to_minutes(s).unwrap()), s);
    }
    for s in ["+00:00", "+01:57", "-08:48"] {
        assert_eq!(format_signed(parse_time_to_minutes(s).unwrap()), s);
    }
}

#[test]
fn test_milliseconds_to_hhmm() {
    assert_eq!(milliseconds_to_hhmm(0).unwrap(), "00:00");
    assert_eq!(milliseconds_to_hhmm(8 * 3_600_000 + 48 * 60_000).unwrap(), "08:48");
    // 89.6 minutes
    assert_eq!(milliseconds_to_hhmm(5_376_000).unwrap(), "01:30");
    // 29.4 minutes
    assert_eq!(milliseconds_to_hhmm(1_764_000).unwrap(), "00:29");
}

#[test]
fn test_milliseconds_ties_round_to_even() {
    // 0.5 → 0, 1.5 → 2, 2.5 → 2
    assert_eq!(milliseconds_to_hhmm(30_000).unwrap(), "00:00");
    assert_eq!(milliseconds_to_hhmm(90_000).unwrap(), "00:02");
    assert_eq!(milliseconds_to_hhmm(150_000).unwrap(), "00:02");
}

#[test]
fn test_milliseconds_negative_fails() {
    assert!(matches!(
        milliseconds_to_hhmm(-1),
        Err(AppError::NegativeDuration(-1))
    ));
}

#[test]
fn test_milliseconds_is_monotonic() {
    let mut last = 0;
    for ms in (0..10_000_000).step_by(7_919) {
        let m = parse_time_to_minutes(&milliseconds_to_hhmm(ms).unwrap()).unwrap();
        assert!(m >= last, "{ms} ms went backwards");
        last = m;
    }
}

#[test]
fn test_format_date_never_panics_on_bad_pattern() {
    let d = chrono::NaiveDate::from_ymd_opt(2025, 5, 12).unwrap();
    assert_eq!(punchsheet::utils::date::format_date(d, "%d/%m/%Y"), "12/05/2025");
    assert_eq!(punchsheet::utils::date::format_date(d, "%Q"), "2025-05-12");
}
