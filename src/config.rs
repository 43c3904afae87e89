//! Declarative filter descriptions
//!
//! A [`FilterConfig`] describes a filter as data instead of code, so it can be
//! assembled at runtime or, with the `serde` feature, loaded from JSON, TOML
//! or any other serde format. [`FilterConfig::build`] validates the
//! description and turns it into a [`BoxedPredicate`].
//!
//! # Example
//!
//! ```rust
//! use sift::{Case, FilterConfig};
//!
//! let config = FilterConfig::StartsWith { target: "E".into(), case: Case::Insensitive }
//!     .and(FilterConfig::Length { min: None, max: Some(5) });
//!
//! let kept = config.apply(["Exxon", "Mobil", "Encapsulation", "eel"])?;
//! assert_eq!(kept, vec!["Exxon", "eel"]);
//! # Ok::<(), sift::FilterError>(())
//! ```
//!
//! With the `serde` feature the same filter reads from JSON:
//!
//! ```rust
//! # #[cfg(feature = "serde")]
//! # {
//! use sift::FilterConfig;
//!
//! let config: FilterConfig = serde_json::from_str(r#"{
//!     "kind": "and",
//!     "left":  { "kind": "starts_with", "target": "E", "case": "insensitive" },
//!     "right": { "kind": "length", "max": 5 }
//! }"#).unwrap();
//! assert_eq!(config.apply(["Exxon", "Encapsulation", "eel"]).unwrap(), vec!["Exxon", "eel"]);
//! # }
//! ```

use crate::error::FilterError;
use crate::filter::{filter_by, Candidate};
use crate::predicate::{
    contains, length, not_empty, BoxedPredicate, Case, EndsWithChar, PredicateExt, StartsWithChar,
};

/// A filter described as data.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)
)]
pub enum FilterConfig {
    /// First character equals `target`, which must be a single character.
    StartsWith {
        /// The character to match, as a one-character string.
        target: String,
        /// Case handling.
        #[cfg_attr(feature = "serde", serde(default))]
        case: Case,
    },
    /// Last character equals `target`, which must be a single character.
    EndsWith {
        /// The character to match, as a one-character string.
        target: String,
        /// Case handling.
        #[cfg_attr(feature = "serde", serde(default))]
        case: Case,
    },
    /// Character count within the inclusive bounds.
    Length {
        /// Lower bound.
        #[cfg_attr(feature = "serde", serde(default))]
        min: Option<usize>,
        /// Upper bound.
        #[cfg_attr(feature = "serde", serde(default))]
        max: Option<usize>,
    },
    /// Contains the `target` substring.
    Contains {
        /// Substring to look for.
        target: String,
        /// Case handling.
        #[cfg_attr(feature = "serde", serde(default))]
        case: Case,
    },
    /// Any non-empty string.
    NotEmpty,
    /// Both sides hold.
    And {
        /// Checked first.
        left: Box<FilterConfig>,
        /// Checked only when `left` holds.
        right: Box<FilterConfig>,
    },
    /// Either side holds.
    Or {
        /// Checked first.
        left: Box<FilterConfig>,
        /// Checked only when `left` fails.
        right: Box<FilterConfig>,
    },
    /// The inner filter does not hold.
    Not {
        /// The filter to invert.
        inner: Box<FilterConfig>,
    },
}

impl FilterConfig {
    /// Combine with another config under AND.
    pub fn and(self, other: FilterConfig) -> Self {
        FilterConfig::And {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Combine with another config under OR.
    pub fn or(self, other: FilterConfig) -> Self {
        FilterConfig::Or {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    /// Invert this config.
    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self {
        FilterConfig::Not {
            inner: Box::new(self),
        }
    }

    /// Validate the description and build the predicate it describes.
    ///
    /// Every node is checked, including both sides of `And` and `Or`, so an
    /// invalid branch is reported even when it would never be evaluated.
    ///
    /// # Errors
    ///
    /// [`FilterError::InvalidArgument`] when a character target is not
    /// exactly one character, or a length range has `min > max`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::{Case, FilterConfig, predicate::Predicate};
    ///
    /// let p = FilterConfig::EndsWith { target: "n".into(), case: Case::Sensitive }.build()?;
    /// assert!(p.check("Exxon"));
    ///
    /// let bad = FilterConfig::Length { min: Some(9), max: Some(3) };
    /// assert!(bad.build().is_err());
    /// # Ok::<(), sift::FilterError>(())
    /// ```
    pub fn build(&self) -> Result<BoxedPredicate<str>, FilterError> {
        let predicate = match self {
            FilterConfig::StartsWith { target, case } => {
                StartsWithChar::parse(target, *case)?.boxed()
            }
            FilterConfig::EndsWith { target, case } => EndsWithChar::parse(target, *case)?.boxed(),
            FilterConfig::Length { min, max } => {
                if let (Some(min), Some(max)) = (*min, *max) {
                    if min > max {
                        return Err(FilterError::inverted_range(min, max));
                    }
                }
                length(*min, *max).boxed()
            }
            FilterConfig::Contains { target, case } => contains(target, *case).boxed(),
            FilterConfig::NotEmpty => not_empty().boxed(),
            FilterConfig::And { left, right } => left.build()?.and(right.build()?).boxed(),
            FilterConfig::Or { left, right } => left.build()?.or(right.build()?).boxed(),
            FilterConfig::Not { inner } => inner.build()?.not().boxed(),
        };
        Ok(predicate)
    }

    /// Build the predicate and filter `items` with it.
    ///
    /// # Errors
    ///
    /// Same as [`build`](Self::build); on error `items` is not examined.
    pub fn apply<I>(&self, items: I) -> Result<Vec<String>, FilterError>
    where
        I: IntoIterator,
        I::Item: Candidate,
    {
        let predicate = self.build()?;
        Ok(filter_by(items, &predicate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::Predicate;

    fn starts(target: &str, case: Case) -> FilterConfig {
        FilterConfig::StartsWith {
            target: target.to_string(),
            case,
        }
    }

    #[test]
    fn build_starts_with() {
        let p = starts("a", Case::Sensitive).build().unwrap();
        assert!(p.check("apple"));
        assert!(!p.check("Apple"));
    }

    #[test]
    fn build_rejects_bad_target() {
        let err = starts("ab", Case::Sensitive).build().unwrap_err();
        assert_eq!(err.argument(), "target");

        let err = FilterConfig::EndsWith {
            target: String::new(),
            case: Case::Insensitive,
        }
        .build()
        .unwrap_err();
        assert_eq!(err.argument(), "target");
    }

    #[test]
    fn build_rejects_invalid_branch_even_if_unreachable() {
        // The right side would never run for "Exxon", but is still validated.
        let config = starts("E", Case::Sensitive).or(starts("", Case::Sensitive));
        assert!(config.build().is_err());
        assert!(config.apply(["Exxon"]).is_err());
    }

    #[test]
    fn build_rejects_inverted_length() {
        let err = FilterConfig::Length {
            min: Some(6),
            max: Some(2),
        }
        .build()
        .unwrap_err();
        assert_eq!(err, FilterError::inverted_range(6, 2));
    }

    #[test]
    fn combinators_compose() {
        let fruit = ["Apple", "Banana", "Cherry", "Avocado", "Blueberry", "Citrus"];

        let config = starts("a", Case::Insensitive).or(FilterConfig::Contains {
            target: "rr".into(),
            case: Case::Sensitive,
        });
        assert_eq!(
            config.apply(fruit).unwrap(),
            vec!["Apple", "Cherry", "Avocado", "Blueberry"]
        );

        let config = FilterConfig::Length {
            min: None,
            max: Some(5),
        }
        .not();
        assert_eq!(
            config.apply(fruit).unwrap(),
            vec!["Banana", "Cherry", "Avocado", "Blueberry", "Citrus"]
        );
    }

    #[test]
    fn not_empty_config_keeps_present_values() {
        let names = [Some("Valid"), None, Some(""), Some("Another")];
        assert_eq!(
            FilterConfig::NotEmpty.apply(names).unwrap(),
            vec!["Valid", "Another"]
        );
    }
}
