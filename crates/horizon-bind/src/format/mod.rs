//! Date pattern formatting and parsing.
//!
//! Patterns use the common letter-run mini-language: `yyyy-MM-dd`,
//! `EEE, d MMM yyyy`, `h:mm a`. A pattern is tokenized once into a
//! [`FormatTree`] and cached per pattern and locale. Formatting walks the
//! tree through a fixed symbol table. Parsing compiles the tree into a
//! single anchored regex on first use.
//!
//! # Symbols
//!
//! | Letter | Meaning |
//! |---|---|
//! | `y` | year (`yy` is the last two digits) |
//! | `M` `L` | month: numeric, abbreviated (3), wide (4), narrow (5) |
//! | `d` `D` | day of month, day of year |
//! | `w` | ISO-8601 week of year |
//! | `E` `c` | day of week, format and stand-alone |
//! | `a` | am/pm marker |
//! | `H` `k` `K` `h` | hour 0-23, 1-24, 0-11, 1-12 |
//! | `m` `s` `S` | minute, second, fractional second |
//! | `z` `Z` | zone name or `GMT±HH:MM`, `±HHMM` offset |
//!
//! Text in single quotes is literal; `''` is an apostrophe.
//!
//! Parsing does not support `D`, `w`, narrow months or long zone names.
//! Short zone names and offsets are matched but do not shift the result.
//!
//! # Locale defaults
//!
//! [`DateFormat::locale_default`] builds a locale's long date pattern plus
//! [`TIME_PATTERN`]. [`DateFormat::date_instance`] and
//! [`DateFormat::date_time_instance`] hand out shared instances per locale.
//!
//! # Example
//!
//! ```
//! use horizon_bind::format::{DateFormat, FormatError};
//!
//! let format = DateFormat::new("yyyy-MM-dd");
//! let date = format.parse("2021-03-02").unwrap();
//! assert_eq!(format.format_naive(&date), "2021-03-02");
//!
//! assert!(matches!(
//!     format.parse("2021-02-30"),
//!     Err(FormatError::OverflowMismatch { .. })
//! ));
//! ```

mod error;
mod formatter;
mod locale;
mod parser;
mod tokenizer;

pub use error::{FormatError, FormatResult};
pub use formatter::{DEFAULT_CENTURY_PIVOT, DateFormat, LOGGING_PATTERN, TIME_PATTERN, iso_week_of};
pub use locale::{DateLength, LocaleNames, NameContext, NameWidth, zone_long_name};
pub use parser::{
    DateField, DateFields, ParseFeed, ParseRule, Transform, expand_year, parse_rules,
    year_fragment,
};
pub use tokenizer::{FormatNode, FormatTree, cached_tree, compile_pattern};
