//! Name tables read from chrono's locale database.
//!
//! Tables are rendered once per identifier and live for the rest of the
//! process, so the accessors on [`LocaleNames`](super::LocaleNames) can keep
//! handing out `&'static` names.

use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::{Days, Locale, NaiveDate, NaiveDateTime};
use parking_lot::RwLock;

use horizon_bind_core::logging::targets;

use super::NameTable;

// The database carries strftime patterns, not letter patterns, so every
// database locale shares these.
const DATE_PATTERNS: [&str; 4] = ["yyyy-MM-dd", "d MMM yyyy", "d MMMM yyyy", "EEEE d MMMM yyyy"];

static TABLES: LazyLock<RwLock<HashMap<String, Option<&'static NameTable>>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// The table for `language` and `region`, or `None` if the database has no
/// matching locale.
pub(super) fn lookup(language: &str, region: Option<&str>) -> Option<&'static NameTable> {
    let key = match region {
        Some(region) => format!("{language}_{region}"),
        None => language.to_string(),
    };
    if let Some(table) = TABLES.read().get(&key) {
        return *table;
    }

    *TABLES.write().entry(key).or_insert_with(|| {
        let table = resolve(language, region).and_then(|locale| build(language, locale));
        match table {
            Some(_) => tracing::debug!(target: targets::FORMAT, language, ?region, "loaded locale names"),
            None => tracing::debug!(target: targets::FORMAT, language, ?region, "no locale data"),
        }
        table.map(|table| &*Box::leak(Box::new(table)))
    })
}

fn resolve(language: &str, region: Option<&str>) -> Option<Locale> {
    let mut candidates = Vec::with_capacity(3);
    if let Some(region) = region {
        candidates.push(format!("{language}_{region}"));
    }
    candidates.push(format!("{language}_{}", language.to_uppercase()));
    candidates.push(language.to_string());

    candidates
        .iter()
        .find_map(|candidate| Locale::try_from(candidate.as_str()).ok())
}

fn render(at: NaiveDateTime, spec: &str, locale: Locale) -> &'static str {
    at.and_utc().format_localized(spec, locale).to_string().leak()
}

fn narrow(wide: &str) -> &'static str {
    wide.chars()
        .next()
        .map(|first| first.to_uppercase().collect::<String>())
        .unwrap_or_default()
        .leak()
}

fn month_names(locale: Locale, spec: &str) -> Option<[&'static str; 12]> {
    let mut names = [""; 12];
    for (index, name) in names.iter_mut().enumerate() {
        let first = NaiveDate::from_ymd_opt(2021, index as u32 + 1, 1)?.and_hms_opt(0, 0, 0)?;
        *name = render(first, spec, locale);
    }
    Some(names)
}

fn day_names(locale: Locale, spec: &str) -> Option<[&'static str; 7]> {
    // 2021-01-03 is a Sunday.
    let sunday = NaiveDate::from_ymd_opt(2021, 1, 3)?;
    let mut names = [""; 7];
    for (index, name) in names.iter_mut().enumerate() {
        let day = sunday.checked_add_days(Days::new(index as u64))?.and_hms_opt(0, 0, 0)?;
        *name = render(day, spec, locale);
    }
    Some(names)
}

fn day_period(locale: Locale, hour: u32, fallback: &'static str) -> Option<&'static str> {
    let at = NaiveDate::from_ymd_opt(2021, 1, 4)?.and_hms_opt(hour, 0, 0)?;
    let marker = render(at, "%p", locale);
    Some(if marker.trim().is_empty() { fallback } else { marker })
}

fn build(language: &str, locale: Locale) -> Option<NameTable> {
    let months_abbreviated = month_names(locale, "%b")?;
    let months_wide = month_names(locale, "%B")?;
    let days_abbreviated = day_names(locale, "%a")?;
    let days_wide = day_names(locale, "%A")?;

    Some(NameTable {
        language: language.to_string().leak(),
        date_patterns: DATE_PATTERNS,
        months_abbreviated,
        months_abbreviated_standalone: months_abbreviated,
        months_wide,
        months_narrow: months_wide.map(narrow),
        days_abbreviated,
        days_abbreviated_standalone: days_abbreviated,
        days_wide,
        days_narrow: days_wide.map(narrow),
        am: day_period(locale, 0, "AM")?,
        pm: day_period(locale, 12, "PM")?,
    })
}

#[cfg(test)]
mod tests {
    use super::super::{DateLength, LocaleNames, NameContext, NameWidth};
    use super::*;

    #[test]
    fn test_database_languages_resolve() {
        let names = LocaleNames::for_locale("es");
        assert_eq!(names.language(), "es");
        assert_eq!(names.month_name(0, NameWidth::Wide, NameContext::Format), "enero");
        assert_eq!(names.day_name(0, NameWidth::Wide, NameContext::Format), "domingo");
        assert_eq!(names.month_name(0, NameWidth::Narrow, NameContext::Format), "E");
        assert_eq!(names.date_pattern(DateLength::Long), "d MMMM yyyy");
    }

    #[test]
    fn test_lookups_are_shared() {
        let first = lookup("es", Some("MX"));
        let second = lookup("es", Some("MX"));
        match (first, second) {
            (Some(first), Some(second)) => assert!(std::ptr::eq(first, second)),
            other => panic!("expected a table, got {:?}", other.0.map(|t| t.language)),
        }
    }

    #[test]
    fn test_builtin_tables_take_precedence() {
        let de = LocaleNames::for_locale("de-DE");
        assert_eq!(de.month_name(0, NameWidth::Abbreviated, NameContext::Format), "Jan.");
    }

    #[test]
    fn test_unknown_locales_still_fall_back() {
        assert!(lookup("xx", Some("YY")).is_none());
        assert_eq!(LocaleNames::for_locale("xx-YY").language(), "en");
    }
}
