//! Error types for the date format engine.

/// Errors raised while compiling parse rules or parsing text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormatError {
    /// The pattern contains a wildcard no parse rule accepts.
    ///
    /// Raised once, when the parse feed is built; the pattern instance keeps
    /// returning it.
    #[error("pattern '{pattern}' cannot be parsed: no rule for '{symbol}' x{count}")]
    UnsupportedPattern {
        /// The offending pattern.
        pattern: String,
        /// The wildcard letter.
        symbol: char,
        /// The wildcard run length.
        count: usize,
    },

    /// The input text does not match the pattern end to end.
    #[error("'{input}' does not match pattern '{pattern}'")]
    FormatMismatch {
        /// The rejected text.
        input: String,
        /// The pattern it was matched against.
        pattern: String,
    },

    /// The input matched but names a date that does not exist, such as the
    /// 30th of February.
    #[error("'{input}' is not a valid calendar date")]
    OverflowMismatch {
        /// The rejected text.
        input: String,
    },

    /// The regex engine refused the compiled matcher.
    #[error("compiled matcher rejected: {0}")]
    Regex(#[from] regex::Error),
}

impl FormatError {
    pub(crate) fn unsupported(pattern: &str, symbol: char, count: usize) -> Self {
        Self::UnsupportedPattern {
            pattern: pattern.to_string(),
            symbol,
            count,
        }
    }

    pub(crate) fn mismatch(input: &str, pattern: &str) -> Self {
        Self::FormatMismatch {
            input: input.to_string(),
            pattern: pattern.to_string(),
        }
    }

    pub(crate) fn overflow(input: &str) -> Self {
        Self::OverflowMismatch {
            input: input.to_string(),
        }
    }

    /// Returns `true` if retrying with other input could succeed.
    pub fn is_input_error(&self) -> bool {
        matches!(self, Self::FormatMismatch { .. } | Self::OverflowMismatch { .. })
    }
}

/// Result type alias for format operations.
pub type FormatResult<T> = std::result::Result<T, FormatError>;
