//! Error types for console-router

use thiserror::Error;

/// Result type alias for route table construction
pub type Result<T> = std::result::Result<T, Error>;

/// Pattern compilation errors
///
/// Matching never fails; only building a table from a malformed pattern does.
#[derive(Debug, Error)]
pub enum Error {
    /// `:` with no name after it
    #[error("Missing parameter name at {index} in pattern {pattern:?}")]
    MissingParameterName { pattern: String, index: usize },

    /// Group or modifier syntax (`(`, `{`, `*`, `+`, `?`, ...)
    #[error("Unsupported character {ch:?} at {index} in pattern {pattern:?}")]
    UnsupportedSyntax {
        pattern: String,
        index: usize,
        ch: char,
    },

    /// Pattern ends in a lone backslash
    #[error("Trailing escape character in pattern {pattern:?}")]
    TrailingEscape { pattern: String },

    /// Generated expression was rejected by the regex engine
    #[error("Invalid pattern {pattern:?}: {source}")]
    Regex {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
