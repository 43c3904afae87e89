//! Testing utilities for code that builds filters
//!
//! This module provides an assertion macro for filter results and, with the
//! `proptest` feature, strategies that generate sequences with absent and
//! empty elements mixed in.
//!
//! # Examples
//!
//! ```rust
//! use sift::{assert_filtered, predicate::*};
//!
//! assert_filtered!(
//!     ["Exxon", "Mobil", "Encapsulation"],
//!     starts_with_char('E', Case::Sensitive),
//!     ["Exxon", "Encapsulation"]
//! );
//! ```

/// Assert that filtering `items` with `predicate` yields exactly `expected`.
///
/// On failure the message shows the input as well as both results.
///
/// # Example
///
/// ```rust
/// use sift::{assert_filtered, predicate::*};
///
/// let names = [Some("Valid"), None, Some("")];
/// assert_filtered!(names, not_empty(), ["Valid"]);
/// ```
#[macro_export]
macro_rules! assert_filtered {
    ($items:expr, $predicate:expr, $expected:expr) => {{
        let items = $items;
        let predicate = $predicate;
        let actual = $crate::filter_by(&items, &predicate);
        let expected: ::std::vec::Vec<::std::string::String> =
            ::std::iter::IntoIterator::into_iter($expected)
                .map(|s| ::std::string::ToString::to_string(&s))
                .collect();
        if actual != expected {
            panic!(
                "Filter mismatch for input {:?}\n  expected: {:?}\n    actual: {:?}",
                items, expected, actual
            );
        }
    }};
}

#[cfg(any(test, feature = "proptest"))]
use proptest::prelude::*;

/// A single element: mostly short words, sometimes empty, sometimes absent.
#[cfg(any(test, feature = "proptest"))]
pub fn candidate() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        6 => "[a-cA-C][a-zA-Z]{0,6}".prop_map(Some),
        1 => Just(Some(String::new())),
        1 => Just(None),
    ]
}

/// A sequence of up to 24 [`candidate`] elements.
#[cfg(any(test, feature = "proptest"))]
pub fn candidates() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(candidate(), 0..24)
}
