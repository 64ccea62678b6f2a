//! Pattern-driven date parsing.
//!
//! Parsing works in two steps. When a pattern is first parsed with, its
//! [`FormatTree`] is compiled into a [`ParseFeed`]: one anchored regex whose
//! capture groups line up with the rules that interpret them. Each parse
//! then matches the input, lets every rule write its capture into a
//! [`DateFields`] map, and builds the date from that map with calendar
//! rollover. A rollover that changes the year or month means the input named
//! a date that does not exist.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};
use regex::Regex;

use super::error::{FormatError, FormatResult};
use super::locale::{LocaleNames, NameContext, NameWidth};
use super::tokenizer::{FormatNode, FormatTree};

/// A field a [`ParseRule::FixedField`] writes its number into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    /// Calendar year.
    Year,
    /// Day of month, 1-based.
    Day,
    /// Hour of day.
    Hour,
    /// Minute.
    Minute,
    /// Second.
    Second,
}

/// Date components collected from the captures of one parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFields {
    /// Calendar year after century expansion.
    pub year: i32,
    /// Zero-based month.
    pub month: i32,
    /// 1-based day of month.
    pub day: i32,
    /// Hour of day as captured, before the pm adjustment.
    pub hour: i32,
    /// Minute.
    pub minute: i32,
    /// Second.
    pub second: i32,
    /// Millisecond.
    pub millisecond: i32,
    /// Afternoon marker seen; adds 12 hours.
    pub pm: bool,
}

impl Default for DateFields {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 0,
            day: 1,
            hour: 0,
            minute: 0,
            second: 0,
            millisecond: 0,
            pm: false,
        }
    }
}

impl DateFields {
    fn set(&mut self, field: DateField, value: i32) {
        match field {
            DateField::Year => self.year = value,
            DateField::Day => self.day = value,
            DateField::Hour => self.hour = value,
            DateField::Minute => self.minute = value,
            DateField::Second => self.second = value,
        }
    }

    /// Builds the date with calendar rollover.
    ///
    /// Days, hours and smaller units past their range spill into the next
    /// unit. Returns `None` if the result leaves the representable range.
    pub fn resolve(&self) -> Option<NaiveDateTime> {
        let total_months = i64::from(self.year) * 12 + i64::from(self.month);
        let year = i32::try_from(total_months.div_euclid(12)).ok()?;
        let month0 = u32::try_from(total_months.rem_euclid(12)).ok()?;

        let hour = i64::from(self.hour) + if self.pm { 12 } else { 0 };
        let delta = TimeDelta::days(i64::from(self.day) - 1)
            + TimeDelta::hours(hour)
            + TimeDelta::minutes(i64::from(self.minute))
            + TimeDelta::seconds(i64::from(self.second))
            + TimeDelta::milliseconds(i64::from(self.millisecond));

        NaiveDate::from_ymd_opt(year, month0 + 1, 1)?
            .and_hms_opt(0, 0, 0)?
            .checked_add_signed(delta)
    }

    /// Builds the date and rejects rollover into another year or month.
    pub fn into_datetime(self, input: &str) -> FormatResult<NaiveDateTime> {
        let resolved = self.resolve().ok_or_else(|| FormatError::overflow(input))?;
        if resolved.year() != self.year || resolved.month0() as i32 != self.month {
            return Err(FormatError::overflow(input));
        }
        Ok(resolved)
    }
}

/// Writes one capture into the field map. Returns `false` if the capture
/// cannot be interpreted.
pub type Transform = Arc<dyn Fn(&mut DateFields, &str) -> bool + Send + Sync>;

/// How one wildcard run is matched and interpreted.
#[derive(Clone)]
pub enum ParseRule {
    /// Fixed fragment; the capture is a number stored into a field as is.
    FixedField {
        /// Pattern letter.
        symbol: char,
        /// Run length.
        count: usize,
        /// Regex fragment, without a capture group.
        fragment: String,
        /// Target field.
        field: DateField,
    },
    /// Fixed fragment; the capture goes through a transform.
    FixedTransform {
        /// Pattern letter.
        symbol: char,
        /// Run length.
        count: usize,
        /// Regex fragment, without a capture group.
        fragment: String,
        /// Capture interpreter.
        apply: Transform,
    },
    /// Matches any run of its letter; the fragment depends on the run length.
    GeneratedYearField {
        /// Pattern letter.
        symbol: char,
        /// Fragment generator.
        generate: fn(usize) -> String,
        /// Capture interpreter.
        apply: Transform,
    },
}

impl ParseRule {
    fn numeric(symbol: char, count: usize, fragment: &str, field: DateField) -> Self {
        Self::FixedField {
            symbol,
            count,
            fragment: fragment.to_string(),
            field,
        }
    }

    fn transform(
        symbol: char,
        count: usize,
        fragment: String,
        apply: impl Fn(&mut DateFields, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self::FixedTransform {
            symbol,
            count,
            fragment,
            apply: Arc::new(apply),
        }
    }

    /// Returns `true` if this rule handles a run of `count` `symbol`s.
    pub fn accepts(&self, symbol: char, count: usize) -> bool {
        match self {
            Self::FixedField {
                symbol: s, count: c, ..
            }
            | Self::FixedTransform {
                symbol: s, count: c, ..
            } => *s == symbol && *c == count,
            Self::GeneratedYearField { symbol: s, .. } => *s == symbol,
        }
    }

    /// Regex fragment for a run of length `count`.
    pub fn fragment(&self, count: usize) -> String {
        match self {
            Self::FixedField { fragment, .. } | Self::FixedTransform { fragment, .. } => {
                fragment.clone()
            }
            Self::GeneratedYearField { generate, .. } => generate(count),
        }
    }

    /// Interprets a capture.
    pub fn apply(&self, fields: &mut DateFields, captured: &str) -> bool {
        match self {
            Self::FixedField { field, .. } => match captured.parse::<i32>() {
                Ok(value) => {
                    fields.set(*field, value);
                    true
                }
                Err(_) => false,
            },
            Self::FixedTransform { apply, .. } | Self::GeneratedYearField { apply, .. } => {
                apply(fields, captured)
            }
        }
    }
}

impl std::fmt::Debug for ParseRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FixedField {
                symbol,
                count,
                fragment,
                field,
            } => f
                .debug_struct("FixedField")
                .field("symbol", symbol)
                .field("count", count)
                .field("fragment", fragment)
                .field("field", field)
                .finish(),
            Self::FixedTransform {
                symbol,
                count,
                fragment,
                ..
            } => f
                .debug_struct("FixedTransform")
                .field("symbol", symbol)
                .field("count", count)
                .field("fragment", fragment)
                .finish_non_exhaustive(),
            Self::GeneratedYearField { symbol, .. } => f
                .debug_struct("GeneratedYearField")
                .field("symbol", symbol)
                .finish_non_exhaustive(),
        }
    }
}

/// Regex fragment for a year run: one digit per letter, the last one
/// repeatable. `yy` takes exactly two digits.
pub fn year_fragment(count: usize) -> String {
    let mut fragment = r"\d".repeat(count.max(1));
    if count != 2 {
        fragment.push_str("+?");
    }
    fragment
}

/// Expands a one- or two-digit year around `pivot`.
pub fn expand_year(value: i32, pivot: i32) -> i32 {
    if value < pivot {
        value + 2000
    } else if value < 100 {
        value + 1900
    } else {
        value
    }
}

fn alternation(names: &[&str]) -> String {
    let mut sorted: Vec<&str> = names.to_vec();
    sorted.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
    sorted.dedup();
    sorted
        .iter()
        .map(|name| regex::escape(name))
        .collect::<Vec<_>>()
        .join("|")
}

fn month_name_rule(symbol: char, count: usize, names: &'static [&'static str; 12]) -> ParseRule {
    ParseRule::transform(symbol, count, alternation(names), move |fields, captured| {
        match names.iter().position(|name| *name == captured) {
            Some(index) => {
                fields.month = index as i32;
                true
            }
            None => false,
        }
    })
}

fn ignored_rule(symbol: char, count: usize, fragment: String) -> ParseRule {
    ParseRule::transform(symbol, count, fragment, |_, _| true)
}

fn number(captured: &str) -> Option<i32> {
    captured.parse().ok()
}

/// The parse rules for one locale and century pivot.
pub fn parse_rules(names: &LocaleNames, century_pivot: i32) -> Vec<ParseRule> {
    use NameContext::{Format, StandAlone};
    use NameWidth::{Abbreviated, Narrow, Wide};

    let mut rules = vec![ParseRule::GeneratedYearField {
        symbol: 'y',
        generate: year_fragment,
        apply: Arc::new(move |fields: &mut DateFields, captured: &str| {
            match number(captured) {
                Some(value) => {
                    fields.year = expand_year(value, century_pivot);
                    true
                }
                None => false,
            }
        }),
    }];

    for symbol in ['M', 'L'] {
        for count in [1, 2] {
            rules.push(ParseRule::transform(
                symbol,
                count,
                r"\d\d?".to_string(),
                |fields, captured| match number(captured) {
                    Some(value) => {
                        fields.month = value - 1;
                        true
                    }
                    None => false,
                },
            ));
        }
    }
    rules.push(month_name_rule('M', 3, names.month_names(Abbreviated, Format)));
    rules.push(month_name_rule('M', 4, names.month_names(Wide, Format)));
    rules.push(month_name_rule('L', 3, names.month_names(Abbreviated, StandAlone)));
    rules.push(month_name_rule('L', 4, names.month_names(Wide, StandAlone)));

    rules.push(ParseRule::numeric('d', 1, r"\d\d?", DateField::Day));
    rules.push(ParseRule::numeric('d', 2, r"\d\d?", DateField::Day));

    // Day names are consumed but carry no information the date lacks.
    for count in 1..=3 {
        rules.push(ignored_rule('E', count, alternation(names.day_names(Abbreviated, Format))));
    }
    rules.push(ignored_rule('E', 4, alternation(names.day_names(Wide, Format))));
    rules.push(ignored_rule('E', 5, alternation(names.day_names(Narrow, Format))));
    rules.push(ignored_rule('c', 1, r"\d".to_string()));
    rules.push(ignored_rule('c', 2, r"\d".to_string()));
    rules.push(ignored_rule('c', 3, alternation(names.day_names(Abbreviated, StandAlone))));
    rules.push(ignored_rule('c', 4, alternation(names.day_names(Wide, StandAlone))));

    let pm = names.pm();
    rules.push(ParseRule::transform(
        'a',
        1,
        alternation(&[names.am(), pm]),
        move |fields, captured| {
            fields.pm = captured == pm;
            true
        },
    ));

    for count in [1, 2] {
        rules.push(ParseRule::numeric('H', count, r"\d\d?", DateField::Hour));
        rules.push(ParseRule::numeric('K', count, r"\d\d?", DateField::Hour));
        rules.push(ParseRule::transform('k', count, r"\d\d?".to_string(), |fields, captured| {
            match number(captured) {
                Some(value) => {
                    fields.hour = if value == 24 { 0 } else { value };
                    true
                }
                None => false,
            }
        }));
        rules.push(ParseRule::transform('h', count, r"\d\d?".to_string(), |fields, captured| {
            match number(captured) {
                Some(value) => {
                    fields.hour = if value == 12 { 0 } else { value };
                    true
                }
                None => false,
            }
        }));
        rules.push(ParseRule::numeric('m', count, r"\d\d?", DateField::Minute));
        rules.push(ParseRule::numeric('s', count, r"\d\d?", DateField::Second));
    }

    for (count, scale) in [(1, 100), (2, 10), (3, 1)] {
        rules.push(ParseRule::transform(
            'S',
            count,
            r"\d".repeat(count),
            move |fields, captured| match number(captured) {
                Some(value) => {
                    fields.millisecond = value * scale;
                    true
                }
                None => false,
            },
        ));
    }

    // Zones are matched so zoned text parses, but the result stays naive.
    rules.push(ignored_rule('Z', 1, r"[+-]\d\d:?\d\d".to_string()));
    for count in 1..=3 {
        rules.push(ignored_rule('z', count, "[a-zA-Z]+".to_string()));
    }

    rules
}

/// A pattern compiled for parsing.
#[derive(Debug, Clone)]
pub struct ParseFeed {
    regex: Regex,
    rules: Vec<ParseRule>,
}

impl ParseFeed {
    /// Compiles `tree` against `rules`.
    ///
    /// Fails with [`FormatError::UnsupportedPattern`] on the first wildcard
    /// no rule accepts.
    pub fn build(pattern: &str, tree: &FormatTree, rules: &[ParseRule]) -> FormatResult<Self> {
        let mut source = String::from("^");
        let mut used = Vec::new();

        for node in tree.nodes() {
            match node {
                FormatNode::Literal(text) => source.push_str(&regex::escape(text)),
                FormatNode::Wildcard { symbol, count } => {
                    let rule = rules
                        .iter()
                        .find(|rule| rule.accepts(*symbol, *count))
                        .ok_or_else(|| FormatError::unsupported(pattern, *symbol, *count))?;
                    source.push('(');
                    source.push_str(&rule.fragment(*count));
                    source.push(')');
                    used.push(rule.clone());
                }
            }
        }
        source.push('$');

        let regex = Regex::new(&source)?;
        debug_assert_eq!(regex.captures_len(), used.len() + 1);
        Ok(Self { regex, rules: used })
    }

    /// The anchored matcher.
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Rules in capture order.
    pub fn rules(&self) -> &[ParseRule] {
        &self.rules
    }

    /// Matches `input` and collects its fields.
    ///
    /// Returns `None` if the input does not match end to end or a capture
    /// cannot be interpreted.
    pub fn collect_fields(&self, input: &str) -> Option<DateFields> {
        let captures = self.regex.captures(input)?;
        let mut fields = DateFields::default();
        for (index, rule) in self.rules.iter().enumerate() {
            let captured = captures.get(index + 1).map_or("", |m| m.as_str());
            if !rule.apply(&mut fields, captured) {
                return None;
            }
        }
        Some(fields)
    }
}
