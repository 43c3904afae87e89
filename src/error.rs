//! Error type for fallible filter construction
//!
//! Filtering itself never fails: absent and empty elements are skipped, not
//! reported. The only failure is building a predicate from an argument that
//! cannot describe one, such as a "single character" that is empty or holds
//! several characters.
//!
//! # Example
//!
//! ```
//! use sift::{filter_starting_with, Case, FilterError};
//!
//! let err = filter_starting_with(["Exxon"], "Ex", Case::Sensitive).unwrap_err();
//! assert!(matches!(err, FilterError::InvalidArgument { name: "target", .. }));
//! assert_eq!(
//!     err.to_string(),
//!     "invalid argument `target` (\"Ex\"): expected exactly one character, got 2"
//! );
//! ```

use std::error::Error as StdError;
use std::fmt;

/// Errors returned while building a filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// An argument was rejected before any element was examined.
    InvalidArgument {
        /// Name of the offending argument.
        name: &'static str,
        /// The rejected value, rendered for display.
        value: String,
        /// What was expected instead.
        reason: String,
    },
}

impl FilterError {
    /// Error for a single-character argument that is empty or too long.
    ///
    /// # Example
    ///
    /// ```
    /// use sift::FilterError;
    ///
    /// let err = FilterError::not_single_char("target", "");
    /// assert_eq!(
    ///     err.to_string(),
    ///     "invalid argument `target` (\"\"): expected exactly one character, got 0"
    /// );
    /// ```
    pub fn not_single_char(name: &'static str, value: &str) -> Self {
        let err = FilterError::InvalidArgument {
            name,
            value: value.to_owned(),
            reason: format!(
                "expected exactly one character, got {}",
                value.chars().count()
            ),
        };
        #[cfg(feature = "tracing")]
        tracing::warn!(argument = name, value, "rejected single-character argument");
        err
    }

    /// Error for a length range whose minimum exceeds its maximum.
    pub fn inverted_range(min: usize, max: usize) -> Self {
        FilterError::InvalidArgument {
            name: "length",
            value: format!("{min}..={max}"),
            reason: "minimum exceeds maximum".to_owned(),
        }
    }

    /// Name of the argument that caused the error.
    pub fn argument(&self) -> &'static str {
        match self {
            FilterError::InvalidArgument { name, .. } => name,
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::InvalidArgument {
                name,
                value,
                reason,
            } => write!(f, "invalid argument `{name}` ({value:?}): {reason}"),
        }
    }
}

impl StdError for FilterError {}
