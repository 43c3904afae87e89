//! String predicates
//!
//! This module provides the named predicates used to filter strings:
//! first/last character, length bounds and substring. All of them are total
//! over `&str`; none index into the string, so short or empty input simply
//! fails the check.
//!
//! Case-insensitive matching folds ASCII letters to uppercase on both sides.
//! Other characters compare as-is.

use super::combinators::Predicate;
use crate::error::FilterError;

/// Whether character comparisons fold case.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Case {
    /// Characters must match exactly.
    #[default]
    Sensitive,
    /// ASCII letters match regardless of case.
    Insensitive,
}

impl Case {
    #[inline]
    fn fold(self, c: char) -> char {
        match self {
            Case::Sensitive => c,
            Case::Insensitive => c.to_ascii_uppercase(),
        }
    }

    fn fold_str(self, s: &str) -> String {
        match self {
            Case::Sensitive => s.to_owned(),
            Case::Insensitive => s.to_ascii_uppercase(),
        }
    }
}

/// Parse an argument that must hold exactly one character.
fn single_char(name: &'static str, value: &str) -> Result<char, FilterError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(FilterError::not_single_char(name, value)),
    }
}

/// Predicate that checks if a string is not empty.
#[derive(Clone, Copy, Default, Debug)]
pub struct NotEmpty;

impl Predicate<str> for NotEmpty {
    #[inline]
    fn check(&self, value: &str) -> bool {
        !value.is_empty()
    }
}

/// Create a predicate that checks if a string is not empty.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(not_empty().check("hello"));
/// assert!(!not_empty().check(""));
/// ```
pub fn not_empty() -> NotEmpty {
    NotEmpty
}

/// Predicate that checks the first character of a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartsWithChar {
    target: char,
    case: Case,
}

impl StartsWithChar {
    /// Build from a string argument that must be exactly one character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = StartsWithChar::parse("E", Case::Insensitive).unwrap();
    /// assert!(p.check("exxon"));
    ///
    /// assert!(StartsWithChar::parse("", Case::Sensitive).is_err());
    /// assert!(StartsWithChar::parse("Ex", Case::Sensitive).is_err());
    /// ```
    pub fn parse(target: &str, case: Case) -> Result<Self, FilterError> {
        single_char("target", target).map(|c| starts_with_char(c, case))
    }

    /// The character being matched.
    pub fn target(&self) -> char {
        self.target
    }
}

impl Predicate<str> for StartsWithChar {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value
            .chars()
            .next()
            .is_some_and(|c| self.case.fold(c) == self.target)
    }
}

/// Create a predicate that checks if a string starts with `target`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(starts_with_char('a', Case::Sensitive).check("apple"));
/// assert!(!starts_with_char('a', Case::Sensitive).check("Apple"));
/// assert!(starts_with_char('a', Case::Insensitive).check("APPLE"));
/// assert!(!starts_with_char('a', Case::Insensitive).check(""));
/// ```
pub fn starts_with_char(target: char, case: Case) -> StartsWithChar {
    StartsWithChar {
        target: case.fold(target),
        case,
    }
}

/// Predicate that checks the last character of a string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndsWithChar {
    target: char,
    case: Case,
}

impl EndsWithChar {
    /// Build from a string argument that must be exactly one character.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = EndsWithChar::parse("n", Case::Sensitive).unwrap();
    /// assert!(p.check("Exxon"));
    /// assert!(EndsWithChar::parse("on", Case::Sensitive).is_err());
    /// ```
    pub fn parse(target: &str, case: Case) -> Result<Self, FilterError> {
        single_char("target", target).map(|c| ends_with_char(c, case))
    }

    /// The character being matched.
    pub fn target(&self) -> char {
        self.target
    }
}

impl Predicate<str> for EndsWithChar {
    #[inline]
    fn check(&self, value: &str) -> bool {
        value
            .chars()
            .next_back()
            .is_some_and(|c| self.case.fold(c) == self.target)
    }
}

/// Create a predicate that checks if a string ends with `target`.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(ends_with_char('e', Case::Sensitive).check("Bangalore"));
/// assert!(ends_with_char('E', Case::Insensitive).check("Bangalore"));
/// assert!(!ends_with_char('E', Case::Sensitive).check("Bangalore"));
/// ```
pub fn ends_with_char(target: char, case: Case) -> EndsWithChar {
    EndsWithChar {
        target: case.fold(target),
        case,
    }
}

/// Predicate that checks string length against optional inclusive bounds.
///
/// Length is the number of characters, not bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Length {
    min: Option<usize>,
    max: Option<usize>,
}

impl Length {
    /// Lower bound, if any.
    pub fn min(&self) -> Option<usize> {
        self.min
    }

    /// Upper bound, if any.
    pub fn max(&self) -> Option<usize> {
        self.max
    }
}

impl Predicate<str> for Length {
    #[inline]
    fn check(&self, value: &str) -> bool {
        let len = value.chars().count();
        self.min.is_none_or(|min| len >= min) && self.max.is_none_or(|max| len <= max)
    }
}

/// Create a predicate from optional inclusive length bounds.
///
/// Omitted bounds impose no constraint; with neither bound every string
/// passes. A minimum above the maximum matches nothing.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(length(None, Some(5)).check("Apple"));
/// assert!(!length(None, Some(5)).check("Banana"));
/// assert!(length(Some(6), None).check("Banana"));
/// assert!(length(None, None).check(""));
/// ```
pub fn length(min: Option<usize>, max: Option<usize>) -> Length {
    Length { min, max }
}

/// Create a predicate that checks if string length is at least min.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(len_min(3).check("abc"));
/// assert!(!len_min(3).check("ab"));
/// ```
pub fn len_min(min: usize) -> Length {
    length(Some(min), None)
}

/// Create a predicate that checks if string length is at most max.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(len_max(5).check("hello"));
/// assert!(!len_max(5).check("toolong"));
/// ```
pub fn len_max(max: usize) -> Length {
    length(None, Some(max))
}

/// Create a predicate that checks if string length is between min and max (inclusive).
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = len_between(3, 10);
/// assert!(!p.check("ab"));
/// assert!(p.check("abc"));
/// assert!(p.check("1234567890"));
/// assert!(!p.check("12345678901"));
/// ```
pub fn len_between(min: usize, max: usize) -> Length {
    length(Some(min), Some(max))
}

/// Predicate that checks if a string contains a substring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contains {
    // Stored already folded.
    target: String,
    case: Case,
}

impl Predicate<str> for Contains {
    fn check(&self, value: &str) -> bool {
        match self.case {
            Case::Sensitive => value.contains(self.target.as_str()),
            Case::Insensitive => value.to_ascii_uppercase().contains(self.target.as_str()),
        }
    }
}

/// Create a predicate that checks if a string contains `target`.
///
/// An empty target is contained in every string.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// assert!(contains("cap", Case::Sensitive).check("Encapsulation"));
/// assert!(!contains("CAP", Case::Sensitive).check("Encapsulation"));
/// assert!(contains("CAP", Case::Insensitive).check("Encapsulation"));
/// ```
pub fn contains(target: impl AsRef<str>, case: Case) -> Contains {
    Contains {
        target: case.fold_str(target.as_ref()),
        case,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::PredicateExt;

    #[test]
    fn test_not_empty() {
        assert!(not_empty().check("hello"));
        assert!(!not_empty().check(""));
        assert!(not_empty().check(" "));
    }

    #[test]
    fn test_starts_with_char_case_sensitive() {
        let p = starts_with_char('a', Case::Sensitive);
        assert!(p.check("apple"));
        assert!(!p.check("Apple"));
        assert!(!p.check("APPLE"));
        assert!(!p.check("banana"));
    }

    #[test]
    fn test_starts_with_char_case_insensitive() {
        let p = starts_with_char('a', Case::Insensitive);
        assert!(p.check("apple"));
        assert!(p.check("Apple"));
        assert!(p.check("APPLE"));
        assert!(!p.check("Banana"));
        assert_eq!(p.target(), 'A');
    }

    #[test]
    fn test_starts_with_char_short_input() {
        let p = starts_with_char('E', Case::Sensitive);
        assert!(!p.check(""));
        assert!(p.check("E"));
    }

    #[test]
    fn test_starts_with_char_non_ascii() {
        assert!(starts_with_char('é', Case::Sensitive).check("école"));
        // Only ASCII letters fold.
        assert!(!starts_with_char('é', Case::Insensitive).check("École"));
        assert!(starts_with_char('É', Case::Insensitive).check("École"));
    }

    #[test]
    fn test_parse_requires_single_char() {
        assert!(StartsWithChar::parse("E", Case::Sensitive).is_ok());
        assert!(StartsWithChar::parse("é", Case::Sensitive).is_ok());

        for bad in ["", "Ex", "abc", "ée"] {
            let err = StartsWithChar::parse(bad, Case::Sensitive).unwrap_err();
            assert_eq!(err.argument(), "target");
            assert!(EndsWithChar::parse(bad, Case::Insensitive).is_err());
        }
    }

    #[test]
    fn test_ends_with_char() {
        let p = ends_with_char('N', Case::Insensitive);
        assert!(p.check("Exxon"));
        assert!(!p.check("Mobil"));
        assert!(!p.check(""));
        assert!(ends_with_char('l', Case::Sensitive).check("l"));
    }

    #[test]
    fn test_length_bounds() {
        let p = length(Some(3), Some(5));
        assert!(!p.check("ab"));
        assert!(p.check("abc"));
        assert!(p.check("abcde"));
        assert!(!p.check("abcdef"));
        assert_eq!(p.min(), Some(3));
        assert_eq!(p.max(), Some(5));
    }

    #[test]
    fn test_length_unbounded() {
        let p = length(None, None);
        assert!(p.check(""));
        assert!(p.check("Blueberry"));
    }

    #[test]
    fn test_length_counts_chars() {
        assert!(len_max(5).check("héllo"));
        assert!(len_min(5).check("héllo"));
    }

    #[test]
    fn test_length_inverted_matches_nothing() {
        let p = len_between(5, 3);
        for s in ["", "abc", "abcd", "abcde"] {
            assert!(!p.check(s));
        }
    }

    #[test]
    fn test_contains() {
        assert!(contains("an", Case::Sensitive).check("Bangalore"));
        assert!(!contains("AN", Case::Sensitive).check("Bangalore"));
        assert!(contains("AN", Case::Insensitive).check("Bangalore"));
        assert!(contains("an", Case::Insensitive).check("BANGALORE"));
        assert!(contains("", Case::Sensitive).check("anything"));
        assert!(contains(String::from("x"), Case::Sensitive).check("Exxon"));
    }

    #[test]
    fn test_fruit_filter_composition() {
        let p = starts_with_char('B', Case::Sensitive).and(len_min(7));
        assert!(p.check("Blueberry"));
        assert!(!p.check("Banana"));
        assert!(!p.check("Avocado"));
    }
}
