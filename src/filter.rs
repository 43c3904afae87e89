//! Order-preserving filtering of string sequences
//!
//! [`filter_by`] is the primitive: it walks a sequence once, drops absent and
//! empty elements, and keeps the rest for which the predicate holds. The other
//! functions here are shorthands that build a predicate and call it.
//!
//! Absent and empty elements never reach the predicate, so a predicate only
//! ever sees strings with at least one character. Beyond that guard,
//! predicates are trusted: a predicate that panics panics through the filter.
//!
//! # Example
//!
//! ```
//! use sift::{filter_by, predicate::*};
//!
//! let names = [Some("Valid"), None, Some(""), Some("Another"), Some("")];
//! let kept = filter_by(&names, &starts_with_char('V', Case::Sensitive));
//! assert_eq!(kept, vec!["Valid"]);
//! ```

use crate::error::FilterError;
use crate::predicate::{contains, length, not_empty, Case, EndsWithChar, Predicate, StartsWithChar};

/// An element of a sequence being filtered.
///
/// Present strings yield `Some`; `None` marks an absent element. Implemented
/// for `str`, `String`, `Option` of either, and references to any of these,
/// so slices, arrays and vectors of all of them can be filtered directly.
pub trait Candidate {
    /// The string to test, or `None` if the element is absent.
    fn as_candidate(&self) -> Option<&str>;
}

impl Candidate for str {
    #[inline]
    fn as_candidate(&self) -> Option<&str> {
        Some(self)
    }
}

impl Candidate for String {
    #[inline]
    fn as_candidate(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Candidate + ?Sized> Candidate for &T {
    #[inline]
    fn as_candidate(&self) -> Option<&str> {
        (**self).as_candidate()
    }
}

impl<T: Candidate> Candidate for Option<T> {
    #[inline]
    fn as_candidate(&self) -> Option<&str> {
        self.as_ref().and_then(Candidate::as_candidate)
    }
}

// The one place absent and empty elements are dropped. `on_skip` runs once
// per dropped element, before the predicate would have been consulted.
fn guarded<'p, I, P, F>(
    items: I,
    predicate: &'p P,
    mut on_skip: F,
) -> impl Iterator<Item = String> + 'p
where
    I: IntoIterator,
    I::IntoIter: 'p,
    I::Item: Candidate,
    P: Predicate<str> + ?Sized,
    F: FnMut() + 'p,
{
    items
        .into_iter()
        .filter_map(move |item| match item.as_candidate() {
            Some(s) if not_empty().check(s) => predicate.check(s).then(|| s.to_owned()),
            _ => {
                on_skip();
                None
            }
        })
}

/// Lazily filter `items`, yielding owned copies of the elements that pass.
///
/// Same semantics as [`filter_by`], which collects this iterator; use this
/// when the result is consumed once or only partially.
///
/// # Example
///
/// ```
/// use sift::{filter_iter, predicate::*};
///
/// let first = filter_iter(["Mobil", "Exxon", "Encapsulation"], &starts_with_char('E', Case::Sensitive))
///     .next();
/// assert_eq!(first.as_deref(), Some("Exxon"));
/// ```
pub fn filter_iter<'p, I, P>(items: I, predicate: &'p P) -> impl Iterator<Item = String> + 'p
where
    I: IntoIterator,
    I::IntoIter: 'p,
    I::Item: Candidate,
    P: Predicate<str> + ?Sized,
{
    guarded(items, predicate, || {})
}

/// Keep the present, non-empty elements of `items` that satisfy `predicate`.
///
/// The result is a subsequence of the input: relative order is preserved and
/// duplicates are kept.
///
/// # Example
///
/// ```
/// use sift::{filter_by, predicate::*};
///
/// let words = vec!["Exxon", "Mobil", "Bangalore", "Bdd", "Encapsulation"];
/// let kept = filter_by(&words, &starts_with_char('E', Case::Insensitive));
/// assert_eq!(kept, vec!["Exxon", "Encapsulation"]);
///
/// // Closures work as predicates too.
/// let kept = filter_by(&words, &|s: &str| s.len() == 3);
/// assert_eq!(kept, vec!["Bdd"]);
/// ```
pub fn filter_by<I, P>(items: I, predicate: &P) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Candidate,
    P: Predicate<str> + ?Sized,
{
    #[cfg(feature = "tracing")]
    {
        let mut skipped = 0usize;
        let kept: Vec<String> = guarded(items, predicate, || skipped += 1).collect();
        tracing::debug!(kept = kept.len(), skipped, "filtered candidates");
        return kept;
    }

    #[cfg(not(feature = "tracing"))]
    filter_iter(items, predicate).collect()
}

/// Keep the elements whose first character is `target`.
///
/// `target` must be exactly one character; anything else returns
/// [`FilterError::InvalidArgument`] without examining `items`.
///
/// # Example
///
/// ```
/// use sift::{filter_starting_with, Case};
///
/// let fruit = ["apple", "Apple", "APPLE", "banana", "Banana"];
/// assert_eq!(filter_starting_with(fruit, "a", Case::Sensitive)?, vec!["apple"]);
/// assert_eq!(
///     filter_starting_with(fruit, "a", Case::Insensitive)?,
///     vec!["apple", "Apple", "APPLE"]
/// );
/// # Ok::<(), sift::FilterError>(())
/// ```
pub fn filter_starting_with<I>(
    items: I,
    target: &str,
    case: Case,
) -> Result<Vec<String>, FilterError>
where
    I: IntoIterator,
    I::Item: Candidate,
{
    let predicate = StartsWithChar::parse(target, case)?;
    Ok(filter_by(items, &predicate))
}

/// Keep the elements whose last character is `target`.
///
/// `target` must be exactly one character; anything else returns
/// [`FilterError::InvalidArgument`] without examining `items`.
///
/// # Example
///
/// ```
/// use sift::{filter_ending_with, Case};
///
/// let words = ["Exxon", "Mobil", "Bangalore", "Encapsulation"];
/// assert_eq!(filter_ending_with(words, "N", Case::Insensitive)?, vec!["Exxon", "Encapsulation"]);
/// # Ok::<(), sift::FilterError>(())
/// ```
pub fn filter_ending_with<I>(
    items: I,
    target: &str,
    case: Case,
) -> Result<Vec<String>, FilterError>
where
    I: IntoIterator,
    I::Item: Candidate,
{
    let predicate = EndsWithChar::parse(target, case)?;
    Ok(filter_by(items, &predicate))
}

/// Keep the elements whose character count lies within the given inclusive
/// bounds. A `None` bound is unconstrained.
///
/// # Example
///
/// ```
/// use sift::filter_by_length;
///
/// let fruit = ["Apple", "Banana", "Cherry", "Avocado", "Blueberry", "Citrus"];
/// assert_eq!(filter_by_length(fruit, None, Some(5)), vec!["Apple"]);
/// assert_eq!(filter_by_length(fruit, Some(7), None), vec!["Avocado", "Blueberry"]);
/// ```
pub fn filter_by_length<I>(items: I, min: Option<usize>, max: Option<usize>) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Candidate,
{
    filter_by(items, &length(min, max))
}

/// Keep the elements that contain `target`.
///
/// # Example
///
/// ```
/// use sift::{filter_containing, Case};
///
/// let fruit = ["Apple", "Banana", "Cherry", "Avocado", "Blueberry", "Citrus"];
/// assert_eq!(filter_containing(fruit, "an", Case::Sensitive), vec!["Banana"]);
/// assert_eq!(filter_containing(fruit, "ERR", Case::Insensitive), vec!["Cherry", "Blueberry"]);
/// ```
pub fn filter_containing<I>(items: I, target: &str, case: Case) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Candidate,
{
    filter_by(items, &contains(target, case))
}
