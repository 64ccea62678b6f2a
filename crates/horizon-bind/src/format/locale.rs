//! Locale name tables for the date format engine.
//!
//! Built-in tables exist for English, German and French. Identifiers are
//! split into language and region (`en-US`, `de_AT`). With the
//! `localization` feature, other languages are read from chrono's locale
//! database; without it, or when the database has no entry either, they
//! fall back to English.

/// Width of a month or day name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameWidth {
    /// One or two letters (`J`, `M`).
    Narrow,
    /// Short form (`Jan`, `Mon`).
    Abbreviated,
    /// Full form (`January`, `Monday`).
    Wide,
}

/// Whether a name is used inside a date or on its own.
///
/// Some languages inflect or punctuate differently in running text
/// (German `Jan.` vs stand-alone `Jan`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameContext {
    /// Used inside a formatted date.
    Format,
    /// Used on its own, e.g. as a calendar header.
    StandAlone,
}

/// Length of a locale's standard date pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLength {
    /// Numeric (`3/2/21`).
    Short,
    /// Abbreviated month (`Mar 2, 2021`).
    Medium,
    /// Wide month (`March 2, 2021`).
    Long,
    /// Wide month and weekday (`Tuesday, March 2, 2021`).
    Full,
}

impl DateLength {
    fn index(self) -> usize {
        match self {
            Self::Short => 0,
            Self::Medium => 1,
            Self::Long => 2,
            Self::Full => 3,
        }
    }
}

struct NameTable {
    language: &'static str,
    // Short, medium, long, full.
    date_patterns: [&'static str; 4],
    months_abbreviated: [&'static str; 12],
    months_abbreviated_standalone: [&'static str; 12],
    months_wide: [&'static str; 12],
    months_narrow: [&'static str; 12],
    // Day arrays start on Sunday.
    days_abbreviated: [&'static str; 7],
    days_abbreviated_standalone: [&'static str; 7],
    days_wide: [&'static str; 7],
    days_narrow: [&'static str; 7],
    am: &'static str,
    pm: &'static str,
}

static EN: NameTable = NameTable {
    language: "en",
    date_patterns: ["M/d/yy", "MMM d, yyyy", "MMMM d, yyyy", "EEEE, MMMM d, yyyy"],
    months_abbreviated: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    months_abbreviated_standalone: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    months_wide: [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ],
    months_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    days_abbreviated: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    days_abbreviated_standalone: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    days_wide: [
        "Sunday",
        "Monday",
        "Tuesday",
        "Wednesday",
        "Thursday",
        "Friday",
        "Saturday",
    ],
    days_narrow: ["S", "M", "T", "W", "T", "F", "S"],
    am: "AM",
    pm: "PM",
};

static DE: NameTable = NameTable {
    language: "de",
    date_patterns: ["dd.MM.yy", "dd.MM.yyyy", "d. MMMM yyyy", "EEEE, d. MMMM yyyy"],
    months_abbreviated: [
        "Jan.", "Feb.", "März", "Apr.", "Mai", "Juni", "Juli", "Aug.", "Sept.", "Okt.", "Nov.",
        "Dez.",
    ],
    months_abbreviated_standalone: [
        "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
    ],
    months_wide: [
        "Januar",
        "Februar",
        "März",
        "April",
        "Mai",
        "Juni",
        "Juli",
        "August",
        "September",
        "Oktober",
        "November",
        "Dezember",
    ],
    months_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    days_abbreviated: ["So.", "Mo.", "Di.", "Mi.", "Do.", "Fr.", "Sa."],
    days_abbreviated_standalone: ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"],
    days_wide: [
        "Sonntag",
        "Montag",
        "Dienstag",
        "Mittwoch",
        "Donnerstag",
        "Freitag",
        "Samstag",
    ],
    days_narrow: ["S", "M", "D", "M", "D", "F", "S"],
    am: "AM",
    pm: "PM",
};

static FR: NameTable = NameTable {
    language: "fr",
    date_patterns: ["dd/MM/yyyy", "d MMM yyyy", "d MMMM yyyy", "EEEE d MMMM yyyy"],
    months_abbreviated: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    months_abbreviated_standalone: [
        "janv.", "févr.", "mars", "avr.", "mai", "juin", "juil.", "août", "sept.", "oct.", "nov.",
        "déc.",
    ],
    months_wide: [
        "janvier",
        "février",
        "mars",
        "avril",
        "mai",
        "juin",
        "juillet",
        "août",
        "septembre",
        "octobre",
        "novembre",
        "décembre",
    ],
    months_narrow: ["J", "F", "M", "A", "M", "J", "J", "A", "S", "O", "N", "D"],
    days_abbreviated: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    days_abbreviated_standalone: ["dim.", "lun.", "mar.", "mer.", "jeu.", "ven.", "sam."],
    days_wide: [
        "dimanche", "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi",
    ],
    days_narrow: ["D", "L", "M", "M", "J", "V", "S"],
    am: "AM",
    pm: "PM",
};

static TABLES: [&NameTable; 3] = [&EN, &DE, &FR];

fn builtin_table(language: &str) -> Option<&'static NameTable> {
    TABLES.iter().copied().find(|table| table.language == language)
}

#[cfg(feature = "localization")]
mod database;

#[cfg(feature = "localization")]
fn database_table(language: &str, region: Option<&str>) -> Option<&'static NameTable> {
    database::lookup(language, region)
}

#[cfg(not(feature = "localization"))]
fn database_table(_language: &str, _region: Option<&str>) -> Option<&'static NameTable> {
    None
}

/// Month names, day names and day-period markers for one locale.
///
/// # Example
///
/// ```
/// use horizon_bind::format::{LocaleNames, NameContext, NameWidth};
///
/// let names = LocaleNames::for_locale("de-AT");
/// assert_eq!(names.language(), "de");
/// assert_eq!(names.region(), Some("AT"));
/// assert_eq!(names.month_name(2, NameWidth::Wide, NameContext::Format), "März");
/// ```
#[derive(Clone)]
pub struct LocaleNames {
    identifier: String,
    region: Option<String>,
    table: &'static NameTable,
}

impl LocaleNames {
    /// Resolves the tables for a locale identifier.
    pub fn for_locale(identifier: &str) -> Self {
        let mut parts = identifier.split(['-', '_']);
        let language = parts.next().unwrap_or("en").to_lowercase();
        let region = parts
            .find(|part| part.len() == 2 || part.chars().all(|c| c.is_ascii_digit()))
            .map(str::to_uppercase);

        let table = builtin_table(&language)
            .or_else(|| database_table(&language, region.as_deref()))
            .unwrap_or(&EN);

        Self {
            identifier: identifier.to_string(),
            region,
            table,
        }
    }

    /// The identifier this instance was resolved from.
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// The language whose tables are in use (after fallback).
    pub fn language(&self) -> &'static str {
        self.table.language
    }

    /// The region subtag, if one was given.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// All twelve month names, January first.
    pub fn month_names(&self, width: NameWidth, context: NameContext) -> &'static [&'static str; 12] {
        let table = self.table;
        match (width, context) {
            (NameWidth::Narrow, _) => &table.months_narrow,
            (NameWidth::Abbreviated, NameContext::Format) => &table.months_abbreviated,
            (NameWidth::Abbreviated, NameContext::StandAlone) => {
                &table.months_abbreviated_standalone
            }
            (NameWidth::Wide, _) => &table.months_wide,
        }
    }

    /// Name of the zero-based month `month0`.
    pub fn month_name(&self, month0: usize, width: NameWidth, context: NameContext) -> &'static str {
        self.month_names(width, context)
            .get(month0)
            .copied()
            .unwrap_or("?")
    }

    /// All seven day names, Sunday first.
    pub fn day_names(&self, width: NameWidth, context: NameContext) -> &'static [&'static str; 7] {
        let table = self.table;
        match (width, context) {
            (NameWidth::Narrow, _) => &table.days_narrow,
            (NameWidth::Abbreviated, NameContext::Format) => &table.days_abbreviated,
            (NameWidth::Abbreviated, NameContext::StandAlone) => &table.days_abbreviated_standalone,
            (NameWidth::Wide, _) => &table.days_wide,
        }
    }

    /// Name of the day `from_sunday` days after Sunday.
    pub fn day_name(&self, from_sunday: usize, width: NameWidth, context: NameContext) -> &'static str {
        self.day_names(width, context)
            .get(from_sunday)
            .copied()
            .unwrap_or("?")
    }

    /// Morning marker.
    pub fn am(&self) -> &'static str {
        self.table.am
    }

    /// Afternoon marker.
    pub fn pm(&self) -> &'static str {
        self.table.pm
    }

    /// Day-period marker for a 0-23 hour.
    pub fn day_period(&self, hour: u32) -> &'static str {
        if hour < 12 { self.am() } else { self.pm() }
    }

    /// The locale's standard date pattern of the given length.
    pub fn date_pattern(&self, length: DateLength) -> &'static str {
        self.table.date_patterns[length.index()]
    }
}

impl Default for LocaleNames {
    fn default() -> Self {
        Self::for_locale("en")
    }
}

impl std::fmt::Debug for LocaleNames {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleNames")
            .field("identifier", &self.identifier)
            .field("language", &self.table.language)
            .field("region", &self.region)
            .finish()
    }
}

// Long zone names. Abbreviations are matched first so that daylight time
// is not reported under the standard-time name of the same offset.
const ZONE_NAMES_BY_ABBREVIATION: &[(&str, &str)] = &[
    ("UTC", "Coordinated Universal Time"),
    ("GMT", "Greenwich Mean Time"),
    ("BST", "British Summer Time"),
    ("IST", "India Standard Time"),
    ("WET", "Western European Standard Time"),
    ("WEST", "Western European Summer Time"),
    ("CET", "Central European Standard Time"),
    ("CEST", "Central European Summer Time"),
    ("EET", "Eastern European Standard Time"),
    ("EEST", "Eastern European Summer Time"),
    ("MSK", "Moscow Standard Time"),
    ("HST", "Hawaii-Aleutian Standard Time"),
    ("AKST", "Alaska Standard Time"),
    ("AKDT", "Alaska Daylight Time"),
    ("PST", "Pacific Standard Time"),
    ("PDT", "Pacific Daylight Time"),
    ("MST", "Mountain Standard Time"),
    ("MDT", "Mountain Daylight Time"),
    ("CST", "Central Standard Time"),
    ("CDT", "Central Daylight Time"),
    ("EST", "Eastern Standard Time"),
    ("EDT", "Eastern Daylight Time"),
    ("AST", "Atlantic Standard Time"),
    ("ADT", "Atlantic Daylight Time"),
    ("NST", "Newfoundland Standard Time"),
    ("NDT", "Newfoundland Daylight Time"),
    ("JST", "Japan Standard Time"),
    ("KST", "Korean Standard Time"),
    ("AEST", "Australian Eastern Standard Time"),
    ("AEDT", "Australian Eastern Daylight Time"),
    ("ACST", "Australian Central Standard Time"),
    ("ACDT", "Australian Central Daylight Time"),
    ("AWST", "Australian Western Standard Time"),
    ("NZST", "New Zealand Standard Time"),
    ("NZDT", "New Zealand Daylight Time"),
];

const ZONE_NAMES_BY_OFFSET: &[(i32, &str)] = &[
    (-600, "Hawaii-Aleutian Standard Time"),
    (-540, "Alaska Standard Time"),
    (-480, "Pacific Standard Time"),
    (-420, "Mountain Standard Time"),
    (-360, "Central Standard Time"),
    (-300, "Eastern Standard Time"),
    (-240, "Atlantic Standard Time"),
    (-210, "Newfoundland Standard Time"),
    (0, "Greenwich Mean Time"),
    (60, "Central European Standard Time"),
    (120, "Eastern European Standard Time"),
    (180, "Moscow Standard Time"),
    (330, "India Standard Time"),
    (480, "China Standard Time"),
    (540, "Japan Standard Time"),
    (570, "Australian Central Standard Time"),
    (600, "Australian Eastern Standard Time"),
    (720, "New Zealand Standard Time"),
];

/// Best-effort long zone name.
///
/// Looks up the abbreviation if there is one, then the offset in minutes.
pub fn zone_long_name(abbreviation: Option<&str>, offset_minutes: i32) -> Option<&'static str> {
    abbreviation
        .and_then(|abbr| {
            ZONE_NAMES_BY_ABBREVIATION
                .iter()
                .find(|(key, _)| *key == abbr)
                .map(|(_, name)| *name)
        })
        .or_else(|| {
            ZONE_NAMES_BY_OFFSET
                .iter()
                .find(|(offset, _)| *offset == offset_minutes)
                .map(|(_, name)| *name)
        })
}
