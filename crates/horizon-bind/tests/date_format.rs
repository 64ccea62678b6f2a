//! Integration tests for date pattern formatting and parsing.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};
use horizon_bind::config::BindSettings;
use horizon_bind::format::{DateFormat, FormatError, LOGGING_PATTERN};

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_bind=trace")
        .with_test_writer()
        .try_init();
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_opt(h, mi, s)
        .unwrap()
}

#[test]
fn test_iso_date_round_trips() {
    setup();
    let format = DateFormat::new("yyyy-MM-dd");
    for date in [at(2021, 3, 2, 0, 0, 0), at(1999, 12, 31, 0, 0, 0), at(2024, 2, 29, 0, 0, 0)] {
        let text = format.format_naive(&date);
        assert_eq!(format.parse(&text).unwrap(), date, "{text}");
    }
}

#[test]
fn test_time_round_trips() {
    setup();
    let format = DateFormat::new("HH:mm:ss");
    let date = at(2021, 3, 2, 23, 59, 7);
    let text = format.format_naive(&date);
    assert_eq!(text, "23:59:07");

    let parsed = format.parse(&text).unwrap();
    assert_eq!(parsed.time(), date.time());
    assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(1970, 1, 1).unwrap());
}

#[test]
fn test_named_date_round_trips() {
    setup();
    let format = DateFormat::new("EEE, d MMM yyyy");
    for date in [at(2021, 3, 2, 0, 0, 0), at(2000, 9, 17, 0, 0, 0), at(1987, 6, 30, 0, 0, 0)] {
        let text = format.format_naive(&date);
        assert_eq!(format.parse(&text).unwrap(), date, "{text}");
    }
    assert_eq!(format.format_naive(&at(2000, 9, 17, 0, 0, 0)), "Sun, 17 Sep 2000");
}

#[test]
fn test_localized_round_trips() {
    setup();
    let date = at(2021, 3, 2, 0, 0, 0);
    for (locale, expected) in [
        ("de-DE", "Dienstag, 2. März 2021"),
        ("fr", "mardi, 2. mars 2021"),
        ("en-GB", "Tuesday, 2. March 2021"),
    ] {
        let format = DateFormat::with_locale("EEEE, d. MMMM yyyy", locale);
        let text = format.format_naive(&date);
        assert_eq!(text, expected);
        assert_eq!(format.parse(&text).unwrap(), date);
    }
}

#[test]
fn test_twelve_hour_clock() {
    setup();
    let format = DateFormat::new("h:mm a");
    assert_eq!(format.parse("12:05 AM").unwrap().hour(), 0);
    assert_eq!(format.parse("12:05 PM").unwrap().hour(), 12);
    assert_eq!(format.parse("7:30 PM").unwrap().hour(), 19);
    assert_eq!(format.format_naive(&at(2021, 1, 1, 0, 5, 0)), "12:05 AM");

    let format = DateFormat::new("kk:mm");
    assert_eq!(format.parse("24:00").unwrap().hour(), 0);
}

#[test]
fn test_milliseconds_parse() {
    setup();
    let format = DateFormat::new("ss.SSS");
    let parsed = format.parse("07.045").unwrap();
    assert_eq!(parsed.second(), 7);
    assert_eq!(parsed.nanosecond(), 45_000_000);

    let parsed = DateFormat::new("s.S").parse("1.5").unwrap();
    assert_eq!(parsed.nanosecond(), 500_000_000);
}

#[test]
fn test_nonexistent_dates_overflow() {
    setup();
    let format = DateFormat::new("yyyy-MM-dd");
    for input in ["2021-02-30", "2021-13-01", "2021-04-31", "2021-00-10"] {
        assert_eq!(
            format.parse(input),
            Err(FormatError::OverflowMismatch {
                input: input.to_string()
            }),
            "{input}"
        );
    }
    assert!(format.parse("2020-02-29").is_ok());
}

#[test]
fn test_two_digit_years_pivot() {
    setup();
    let format = DateFormat::new("dd/MM/yy");
    assert_eq!(format.parse("01/02/05").unwrap().year(), 2005);
    assert_eq!(format.parse("01/02/95").unwrap().year(), 1995);
    assert_eq!(format.parse("01/02/29").unwrap().year(), 2029);
    assert_eq!(format.parse("01/02/30").unwrap().year(), 1930);
}

#[test]
fn test_mismatched_input() {
    setup();
    let format = DateFormat::new("yyyy-MM-dd");
    for input in ["2021/03/02", "21-03-02", "2021-03-02 ", "", "2021-Mar-02"] {
        let err = format.parse(input).unwrap_err();
        assert_eq!(
            err,
            FormatError::FormatMismatch {
                input: input.to_string(),
                pattern: "yyyy-MM-dd".to_string(),
            }
        );
        assert!(err.is_input_error());
    }
}

#[test]
fn test_zoned_text_parses_as_wall_time() {
    setup();
    let offset = DateFormat::new("yyyy-MM-dd HH:mm Z");
    assert_eq!(offset.parse("2021-03-02 10:00 +0100").unwrap(), at(2021, 3, 2, 10, 0, 0));

    let named = DateFormat::new("yyyy-MM-dd HH:mm z");
    let text = named.format_naive(&at(2021, 3, 2, 10, 0, 0));
    assert_eq!(text, "2021-03-02 10:00 UTC");
    assert_eq!(named.parse(&text).unwrap(), at(2021, 3, 2, 10, 0, 0));
}

#[test]
fn test_unsupported_patterns_fail_every_parse() {
    setup();
    let format = DateFormat::new("yyyy 'week' w");
    assert_eq!(format.format_naive(&at(2021, 1, 4, 0, 0, 0)), "2021 week 1");

    for input in ["2021 week 1", "anything"] {
        let err = format.parse(input).unwrap_err();
        assert!(matches!(
            err,
            FormatError::UnsupportedPattern { symbol: 'w', count: 1, .. }
        ));
        assert!(!err.is_input_error());
    }
}

#[test]
fn test_settings_drive_formats() {
    setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bind.toml");
    std::fs::write(&path, "locale = \"fr-FR\"\ncentury_pivot = 50\n").unwrap();

    let settings = BindSettings::load_toml(&path).unwrap();
    let format = DateFormat::from_settings("d MMMM yy", &settings);
    assert_eq!(format.parse("14 juillet 49").unwrap(), at(2049, 7, 14, 0, 0, 0));
    assert_eq!(format.format_naive(&at(1989, 7, 14, 0, 0, 0)), "14 juillet 89");
}

#[test]
fn test_shared_locale_formats() {
    setup();
    let date_time = DateFormat::date_time_instance("en");
    assert_eq!(date_time.pattern(), "MMMM d, yyyy HH:mm:ss");
    assert_eq!(
        date_time.parse("July 14, 1989 08:30:00").unwrap(),
        at(1989, 7, 14, 8, 30, 0)
    );

    let date = DateFormat::date_instance("fr-FR");
    assert_eq!(date.format_naive(&at(1989, 7, 14, 8, 30, 0)), "14/07/1989");
    assert!(Arc::ptr_eq(&date, &DateFormat::date_instance("fr-FR")));

    let logging = DateFormat::logging();
    assert_eq!(logging.pattern(), LOGGING_PATTERN);
    assert_eq!(logging.parse("1989-07-14 08:30:00").unwrap(), at(1989, 7, 14, 8, 30, 0));
}
