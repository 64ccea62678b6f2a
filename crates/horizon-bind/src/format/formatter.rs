//! Pattern-driven date formatting and the [`DateFormat`] entry point.

use std::collections::HashMap;
use std::fmt::Display;
use std::sync::{Arc, LazyLock, OnceLock};

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone, Timelike,
};
use parking_lot::RwLock;

use horizon_bind_core::PerfSpan;
use horizon_bind_core::logging::{span_names, targets};

use super::error::{FormatError, FormatResult};
use super::locale::{DateLength, LocaleNames, NameContext, NameWidth, zone_long_name};
use super::parser::{ParseFeed, parse_rules};
use super::tokenizer::{FormatNode, FormatTree, cached_tree};
use crate::config::BindSettings;

/// Default two-digit year pivot: `00`-`29` are 20xx, `30`-`99` are 19xx.
pub const DEFAULT_CENTURY_PIVOT: i32 = 30;

/// Pattern for log timestamps.
pub const LOGGING_PATTERN: &str = "yyyy-MM-dd HH:mm:ss";

/// Time of day appended to the long date in a locale's default pattern.
pub const TIME_PATTERN: &str = "HH:mm:ss";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum SharedKind {
    Date,
    DateTime,
}

static SHARED: LazyLock<RwLock<HashMap<(SharedKind, String), Arc<DateFormat>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

fn shared(kind: SharedKind, locale: &str) -> Arc<DateFormat> {
    let key = (kind, locale.to_string());
    if let Some(format) = SHARED.read().get(&key) {
        return format.clone();
    }
    SHARED
        .write()
        .entry(key)
        .or_insert_with(|| {
            let format = match kind {
                SharedKind::Date => {
                    let names = LocaleNames::for_locale(locale);
                    DateFormat::with_locale(names.date_pattern(DateLength::Short), locale)
                }
                SharedKind::DateTime => DateFormat::locale_default(locale),
            };
            tracing::debug!(target: targets::FORMAT, ?kind, locale, pattern = format.pattern(), "shared format created");
            Arc::new(format)
        })
        .clone()
}

/// The value a wildcard renders from.
struct Subject<'a> {
    local: NaiveDateTime,
    offset_seconds: i32,
    zone_abbreviation: Option<String>,
    names: &'a LocaleNames,
}

type Render = fn(&Subject<'_>, usize) -> String;

const SYMBOLS: &[(char, Render)] = &[
    ('y', render_year),
    ('M', render_month),
    ('L', render_standalone_month),
    ('d', render_day),
    ('D', render_day_of_year),
    ('w', render_week),
    ('E', render_weekday),
    ('c', render_standalone_weekday),
    ('a', render_day_period),
    ('H', render_hour),
    ('k', render_hour_from_one),
    ('K', render_half_day_hour),
    ('h', render_half_day_hour_from_one),
    ('m', render_minute),
    ('s', render_second),
    ('S', render_fraction),
    ('z', render_zone),
    ('Z', render_zone_offset),
];

fn renderer(symbol: char) -> Option<Render> {
    SYMBOLS
        .iter()
        .find(|(key, _)| *key == symbol)
        .map(|(_, render)| *render)
}

fn pad(value: impl Display, width: usize) -> String {
    format!("{value:0width$}")
}

fn month_width(count: usize) -> NameWidth {
    match count {
        3 => NameWidth::Abbreviated,
        4 => NameWidth::Wide,
        _ => NameWidth::Narrow,
    }
}

fn render_year(subject: &Subject<'_>, count: usize) -> String {
    let year = subject.local.year();
    if count == 2 {
        pad(year.rem_euclid(100), 2)
    } else {
        pad(year, count)
    }
}

fn render_month_in(subject: &Subject<'_>, count: usize, context: NameContext) -> String {
    let month0 = subject.local.month0() as usize;
    if count <= 2 {
        pad(month0 + 1, count)
    } else {
        subject
            .names
            .month_name(month0, month_width(count), context)
            .to_string()
    }
}

fn render_month(subject: &Subject<'_>, count: usize) -> String {
    render_month_in(subject, count, NameContext::Format)
}

fn render_standalone_month(subject: &Subject<'_>, count: usize) -> String {
    render_month_in(subject, count, NameContext::StandAlone)
}

fn render_day(subject: &Subject<'_>, count: usize) -> String {
    pad(subject.local.day(), count)
}

fn render_day_of_year(subject: &Subject<'_>, count: usize) -> String {
    pad(subject.local.ordinal(), count)
}

/// ISO-8601 week number.
///
/// A week belongs to the year its Thursday falls in, and week 1 is the week
/// holding January 4th. Since that week's Thursday is one of the first seven
/// days of the year, the week number follows from the Thursday's ordinal.
pub fn iso_week_of(date: NaiveDate) -> u32 {
    let from_monday = i64::from(date.weekday().num_days_from_monday());
    let thursday = date
        .checked_add_signed(TimeDelta::days(3 - from_monday))
        .unwrap_or(date);
    thursday.ordinal0() / 7 + 1
}

fn render_week(subject: &Subject<'_>, count: usize) -> String {
    pad(iso_week_of(subject.local.date()), count)
}

fn render_weekday(subject: &Subject<'_>, count: usize) -> String {
    let width = match count {
        1..=3 => NameWidth::Abbreviated,
        4 => NameWidth::Wide,
        _ => NameWidth::Narrow,
    };
    let from_sunday = subject.local.weekday().num_days_from_sunday() as usize;
    subject
        .names
        .day_name(from_sunday, width, NameContext::Format)
        .to_string()
}

fn render_standalone_weekday(subject: &Subject<'_>, count: usize) -> String {
    let weekday = subject.local.weekday();
    if count <= 2 {
        return pad(weekday.number_from_monday(), count);
    }
    subject
        .names
        .day_name(
            weekday.num_days_from_sunday() as usize,
            month_width(count),
            NameContext::StandAlone,
        )
        .to_string()
}

fn render_day_period(subject: &Subject<'_>, _count: usize) -> String {
    subject.names.day_period(subject.local.hour()).to_string()
}

fn render_hour(subject: &Subject<'_>, count: usize) -> String {
    pad(subject.local.hour(), count)
}

fn render_hour_from_one(subject: &Subject<'_>, count: usize) -> String {
    let hour = subject.local.hour();
    pad(if hour == 0 { 24 } else { hour }, count)
}

fn render_half_day_hour(subject: &Subject<'_>, count: usize) -> String {
    pad(subject.local.hour() % 12, count)
}

fn render_half_day_hour_from_one(subject: &Subject<'_>, count: usize) -> String {
    let hour = subject.local.hour() % 12;
    pad(if hour == 0 { 12 } else { hour }, count)
}

fn render_minute(subject: &Subject<'_>, count: usize) -> String {
    pad(subject.local.minute(), count)
}

fn render_second(subject: &Subject<'_>, count: usize) -> String {
    pad(subject.local.second(), count)
}

fn render_fraction(subject: &Subject<'_>, count: usize) -> String {
    // Leap seconds carry nanoseconds past one billion.
    let millis = (subject.local.nanosecond() / 1_000_000) % 1000;
    let digits = format!("{millis:03}");
    if count <= 3 {
        digits[..count].to_string()
    } else {
        format!("{digits:0<count$}")
    }
}

fn split_offset(offset_seconds: i32) -> (char, i32, i32) {
    let sign = if offset_seconds < 0 { '-' } else { '+' };
    let minutes = offset_seconds.abs() / 60;
    (sign, minutes / 60, minutes % 60)
}

fn gmt_offset(offset_seconds: i32) -> String {
    let (sign, hours, minutes) = split_offset(offset_seconds);
    format!("GMT{sign}{hours:02}:{minutes:02}")
}

fn render_zone(subject: &Subject<'_>, count: usize) -> String {
    let abbreviation = subject.zone_abbreviation.as_deref();
    if count >= 4 {
        return zone_long_name(abbreviation, subject.offset_seconds / 60)
            .map(str::to_string)
            .unwrap_or_else(|| gmt_offset(subject.offset_seconds));
    }
    abbreviation
        .map(str::to_string)
        .unwrap_or_else(|| gmt_offset(subject.offset_seconds))
}

fn render_zone_offset(subject: &Subject<'_>, _count: usize) -> String {
    let (sign, hours, minutes) = split_offset(subject.offset_seconds);
    format!("{sign}{hours:02}{minutes:02}")
}

fn render_tree(tree: &FormatTree, subject: &Subject<'_>) -> String {
    let mut out = String::new();
    for node in tree.nodes() {
        match node {
            FormatNode::Literal(text) => out.push_str(text),
            FormatNode::Wildcard { symbol, count } => match renderer(*symbol) {
                Some(render) => out.push_str(&render(subject, *count)),
                None => out.push('?'),
            },
        }
    }
    out
}

/// A compiled date pattern bound to a locale.
///
/// Formatting never fails: unknown pattern letters render as `?`. Parsing
/// builds its matcher on first use and keeps it, including a failure to
/// build one.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use horizon_bind::format::DateFormat;
///
/// let format = DateFormat::new("EEE, d MMM yyyy");
/// let date = NaiveDate::from_ymd_opt(2021, 3, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
///
/// let text = format.format_naive(&date);
/// assert_eq!(text, "Tue, 2 Mar 2021");
/// assert_eq!(format.parse(&text).unwrap(), date);
/// ```
pub struct DateFormat {
    pattern: String,
    names: LocaleNames,
    century_pivot: i32,
    tree: Arc<FormatTree>,
    feed: OnceLock<FormatResult<Arc<ParseFeed>>>,
}

impl DateFormat {
    /// Creates an English date format.
    pub fn new(pattern: &str) -> Self {
        Self::with_locale(pattern, "en")
    }

    /// Creates a date format for `locale`.
    pub fn with_locale(pattern: &str, locale: &str) -> Self {
        Self {
            pattern: pattern.to_string(),
            names: LocaleNames::for_locale(locale),
            century_pivot: DEFAULT_CENTURY_PIVOT,
            tree: cached_tree(pattern, locale),
            feed: OnceLock::new(),
        }
    }

    /// Creates the default date format for `locale`: its long date pattern
    /// followed by [`TIME_PATTERN`].
    pub fn locale_default(locale: &str) -> Self {
        let names = LocaleNames::for_locale(locale);
        let pattern = format!("{} {TIME_PATTERN}", names.date_pattern(DateLength::Long));
        Self::with_locale(&pattern, locale)
    }

    /// Shared date-only format for `locale`, using its short date pattern.
    ///
    /// Every call with the same locale returns the same instance.
    pub fn date_instance(locale: &str) -> Arc<Self> {
        shared(SharedKind::Date, locale)
    }

    /// Shared [`locale_default`](Self::locale_default) format for `locale`.
    pub fn date_time_instance(locale: &str) -> Arc<Self> {
        shared(SharedKind::DateTime, locale)
    }

    /// Creates a format for log timestamps ([`LOGGING_PATTERN`]).
    pub fn logging() -> Self {
        Self::new(LOGGING_PATTERN)
    }

    /// Creates a date format using the locale and pivot from `settings`.
    pub fn from_settings(pattern: &str, settings: &BindSettings) -> Self {
        Self::with_locale(pattern, &settings.locale).with_century_pivot(settings.century_pivot)
    }

    /// Sets the two-digit year pivot.
    pub fn with_century_pivot(mut self, pivot: i32) -> Self {
        self.century_pivot = pivot;
        self.feed = OnceLock::new();
        self
    }

    /// The pattern string.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The locale name tables.
    pub fn names(&self) -> &LocaleNames {
        &self.names
    }

    /// The two-digit year pivot.
    pub fn century_pivot(&self) -> i32 {
        self.century_pivot
    }

    /// The compiled pattern.
    pub fn tree(&self) -> &FormatTree {
        &self.tree
    }

    /// Formats a zoned date.
    pub fn format<Tz: TimeZone>(&self, date: &DateTime<Tz>) -> String
    where
        Tz::Offset: Display,
    {
        let zone = date.format("%Z").to_string();
        // Zones without a name report a numeric offset instead.
        let zone_abbreviation = if zone.is_empty() || zone.starts_with(['+', '-']) {
            None
        } else {
            Some(zone)
        };
        let subject = Subject {
            local: date.naive_local(),
            offset_seconds: date.offset().fix().local_minus_utc(),
            zone_abbreviation,
            names: &self.names,
        };
        render_tree(&self.tree, &subject)
    }

    /// Formats a date without zone information, as if it were UTC.
    pub fn format_naive(&self, date: &NaiveDateTime) -> String {
        self.format(&date.and_utc())
    }

    /// Formats a UTC instant in the IANA zone `zone`, e.g. `Europe/Paris`.
    ///
    /// Returns `None` if the zone name is unknown.
    pub fn format_utc_in(&self, utc: &NaiveDateTime, zone: &str) -> Option<String> {
        let tz: chrono_tz::Tz = zone.parse().ok()?;
        Some(self.format(&tz.from_utc_datetime(utc)))
    }

    /// The parse matcher for this pattern, built on first call.
    pub fn parse_feed(&self) -> FormatResult<Arc<ParseFeed>> {
        self.feed
            .get_or_init(|| {
                let _perf = PerfSpan::new(span_names::PATTERN);
                let rules = parse_rules(&self.names, self.century_pivot);
                let feed = ParseFeed::build(&self.pattern, &self.tree, &rules).map(Arc::new);
                match &feed {
                    Ok(feed) => tracing::debug!(
                        target: targets::FORMAT,
                        pattern = %self.pattern,
                        regex = feed.regex().as_str(),
                        "built parse matcher"
                    ),
                    Err(error) => tracing::debug!(
                        target: targets::FORMAT,
                        pattern = %self.pattern,
                        %error,
                        "pattern cannot be parsed"
                    ),
                }
                feed
            })
            .clone()
    }

    /// Parses `text` into a date and time.
    ///
    /// # Errors
    ///
    /// - [`FormatError::UnsupportedPattern`] if the pattern has a letter
    ///   that cannot be parsed
    /// - [`FormatError::FormatMismatch`] if `text` does not match
    /// - [`FormatError::OverflowMismatch`] if `text` names a date that does
    ///   not exist
    pub fn parse(&self, text: &str) -> FormatResult<NaiveDateTime> {
        let feed = self.parse_feed()?;
        let fields = feed
            .collect_fields(text)
            .ok_or_else(|| FormatError::mismatch(text, &self.pattern))?;
        fields.into_datetime(text)
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::locale_default("en")
    }
}

impl Clone for DateFormat {
    fn clone(&self) -> Self {
        let feed = OnceLock::new();
        if let Some(built) = self.feed.get() {
            let _ = feed.set(built.clone());
        }
        Self {
            pattern: self.pattern.clone(),
            names: self.names.clone(),
            century_pivot: self.century_pivot,
            tree: self.tree.clone(),
            feed,
        }
    }
}

impl std::fmt::Debug for DateFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateFormat")
            .field("pattern", &self.pattern)
            .field("locale", &self.names.identifier())
            .field("century_pivot", &self.century_pivot)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(DateFormat: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    fn fmt(pattern: &str, date: NaiveDateTime) -> String {
        DateFormat::new(pattern).format_naive(&date)
    }

    #[test]
    fn test_numeric_fields() {
        let date = at(2021, 3, 2, 7, 4, 5);
        assert_eq!(fmt("yyyy-MM-dd HH:mm:ss", date), "2021-03-02 07:04:05");
        assert_eq!(fmt("y/M/d H:m:s", date), "2021/3/2 7:4:5");
        assert_eq!(fmt("yy", date), "21");
        assert_eq!(fmt("yyyyyy", date), "002021");
        assert_eq!(fmt("DDD", date), "061");
    }

    #[test]
    fn test_two_digit_year_wraps() {
        assert_eq!(fmt("yy", at(2005, 1, 1, 0, 0, 0)), "05");
        assert_eq!(fmt("yy", at(1900, 1, 1, 0, 0, 0)), "00");
    }

    #[test]
    fn test_hour_variants() {
        let midnight = at(2021, 1, 1, 0, 0, 0);
        assert_eq!(fmt("H k K h a", midnight), "0 24 0 12 AM");
        let afternoon = at(2021, 1, 1, 13, 0, 0);
        assert_eq!(fmt("H k K h a", afternoon), "13 13 1 1 PM");
        let noon = at(2021, 1, 1, 12, 0, 0);
        assert_eq!(fmt("hh a", noon), "12 PM");
    }

    #[test]
    fn test_month_and_day_names() {
        let date = at(2021, 3, 2, 0, 0, 0);
        assert_eq!(fmt("MMM MMMM MMMMM", date), "Mar March M");
        assert_eq!(fmt("E EEEE EEEEE", date), "Tue Tuesday T");
        assert_eq!(fmt("c ccc cccc", date), "2 Tue Tuesday");
        assert_eq!(fmt("LLL", date), "Mar");
    }

    #[test]
    fn test_localized_names() {
        let date = at(2021, 3, 2, 0, 0, 0);
        let de = DateFormat::with_locale("EEEE, d. MMMM yyyy", "de-DE");
        assert_eq!(de.format_naive(&date), "Dienstag, 2. März 2021");
        let fr = DateFormat::with_locale("EEE d MMM", "fr");
        assert_eq!(fr.format_naive(&date), "mar. 2 mars");
    }

    #[test]
    fn test_fraction() {
        let date = NaiveDate::from_ymd_opt(2021, 1, 1)
            .unwrap()
            .and_hms_milli_opt(0, 0, 0, 45)
            .unwrap();
        assert_eq!(fmt("S", date), "0");
        assert_eq!(fmt("SS", date), "04");
        assert_eq!(fmt("SSS", date), "045");
        assert_eq!(fmt("SSSSS", date), "04500");
    }

    #[test]
    fn test_unknown_symbols_render_question_mark() {
        let date = at(2021, 3, 2, 0, 0, 0);
        assert_eq!(fmt("yyyy QQ G", date), "2021 ? ?");
    }

    #[test]
    fn test_quoted_literals() {
        let date = at(2021, 3, 2, 9, 0, 0);
        assert_eq!(fmt("h 'o''clock'", date), "9 o'clock");
        assert_eq!(fmt("yyyy-MM-dd'T'HH", date), "2021-03-02T09");
    }

    #[test]
    fn test_iso_week_edges() {
        let cases = [
            (2004, 12, 31),
            (2005, 1, 1),
            (2005, 1, 2),
            (2005, 1, 3),
            (2008, 12, 29),
            (2009, 12, 31),
            (2010, 1, 3),
            (2010, 1, 4),
            (2020, 12, 31),
            (2021, 1, 3),
            (2026, 6, 15),
        ];
        for (y, m, d) in cases {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(iso_week_of(date), date.iso_week().week(), "{date}");
        }
        assert_eq!(fmt("ww", at(2005, 1, 1, 0, 0, 0)), "53");
        assert_eq!(fmt("w", at(2008, 12, 29, 0, 0, 0)), "1");
    }

    #[test]
    fn test_fixed_offset_zone() {
        let offset = FixedOffset::east_opt(5 * 3600 + 30 * 60).unwrap();
        let date = offset.from_local_datetime(&at(2021, 3, 2, 10, 0, 0)).unwrap();
        let format = DateFormat::new("HH:mm z|zzzz|Z");
        assert_eq!(format.format(&date), "10:00 GMT+05:30|India Standard Time|+0530");

        let odd = FixedOffset::west_opt(3 * 3600 + 15 * 60).unwrap();
        let date = odd.from_local_datetime(&at(2021, 3, 2, 10, 0, 0)).unwrap();
        assert_eq!(format.format(&date), "10:00 GMT-03:15|GMT-03:15|-0315");
    }

    #[test]
    fn test_named_zones() {
        let date = Utc.from_utc_datetime(&at(2021, 7, 1, 12, 0, 0));
        assert_eq!(DateFormat::new("z").format(&date), "UTC");
        assert_eq!(date.offset().fix().local_minus_utc(), 0);

        let berlin = date.with_timezone(&chrono_tz::Europe::Berlin);
        let format = DateFormat::new("HH:mm z (zzzz) Z");
        assert_eq!(
            format.format(&berlin),
            "14:00 CEST (Central European Summer Time) +0200"
        );

        let new_york = Utc
            .from_utc_datetime(&at(2021, 1, 15, 17, 0, 0))
            .with_timezone(&chrono_tz::America::New_York);
        assert_eq!(
            format.format(&new_york),
            "12:00 EST (Eastern Standard Time) -0500"
        );
    }

    #[test]
    fn test_format_in_named_zone() {
        let format = DateFormat::new("yyyy-MM-dd HH:mm zzz");
        let utc = at(2021, 12, 31, 23, 30, 0);
        assert_eq!(
            format.format_utc_in(&utc, "Asia/Tokyo").as_deref(),
            Some("2022-01-01 08:30 JST")
        );
        assert_eq!(format.format_utc_in(&utc, "Mars/Olympus"), None);
    }

    #[test]
    fn test_naive_formats_as_utc() {
        let format = DateFormat::new("Z");
        assert_eq!(format.format_naive(&at(2021, 1, 1, 0, 0, 0)), "+0000");
    }

    #[test]
    fn test_unsupported_pattern_is_cached() {
        let format = DateFormat::new("yyyy-'W'ww");
        let first = format.parse_feed().unwrap_err();
        assert_eq!(
            first,
            FormatError::UnsupportedPattern {
                pattern: "yyyy-'W'ww".into(),
                symbol: 'w',
                count: 2,
            }
        );
        assert_eq!(format.parse("2021-W05").unwrap_err(), first);
        assert_eq!(format.clone().parse("x").unwrap_err(), first);
    }

    #[test]
    fn test_century_pivot_is_configurable() {
        let format = DateFormat::new("yy").with_century_pivot(50);
        assert_eq!(format.parse("45").unwrap().year(), 2045);
        assert_eq!(format.parse("55").unwrap().year(), 1955);
    }

    #[test]
    fn test_from_settings() {
        let settings = BindSettings {
            locale: "de".into(),
            century_pivot: 10,
        };
        let format = DateFormat::from_settings("d. MMMM yy", &settings);
        assert_eq!(format.names().language(), "de");
        assert_eq!(format.century_pivot(), 10);
        assert_eq!(
            format.parse("4. März 15").unwrap(),
            at(1915, 3, 4, 0, 0, 0)
        );
    }

    #[test]
    fn test_locale_default_pattern() {
        let format = DateFormat::default();
        assert_eq!(format.pattern(), "MMMM d, yyyy HH:mm:ss");
        let date = at(2021, 3, 2, 14, 5, 9);
        assert_eq!(format.format_naive(&date), "March 2, 2021 14:05:09");
        assert_eq!(format.parse("March 2, 2021 14:05:09").unwrap(), date);

        let de = DateFormat::locale_default("de-AT");
        assert_eq!(de.pattern(), "d. MMMM yyyy HH:mm:ss");
        assert_eq!(de.format_naive(&date), "2. März 2021 14:05:09");
    }

    #[test]
    fn test_shared_instances() {
        let first = DateFormat::date_instance("de");
        let second = DateFormat::date_instance("de");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.pattern(), "dd.MM.yy");
        assert_eq!(first.parse("02.03.21").unwrap(), at(2021, 3, 2, 0, 0, 0));

        let en = DateFormat::date_instance("en");
        assert!(!Arc::ptr_eq(&first, &en));
        assert_eq!(en.pattern(), "M/d/yy");

        let date_time = DateFormat::date_time_instance("fr");
        assert!(Arc::ptr_eq(&date_time, &DateFormat::date_time_instance("fr")));
        assert_eq!(date_time.pattern(), "d MMMM yyyy HH:mm:ss");
    }

    #[test]
    fn test_logging_format() {
        let format = DateFormat::logging();
        assert_eq!(format.pattern(), LOGGING_PATTERN);
        assert_eq!(format.format_naive(&at(2021, 3, 2, 7, 4, 5)), "2021-03-02 07:04:05");
    }
}
