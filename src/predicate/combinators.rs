//! Core predicate trait and logical combinators
//!
//! This module provides the `Predicate` trait and the combinators that
//! build new predicates out of existing ones. Combinators only describe a
//! composition; nothing is evaluated until `check` is called.

use std::fmt;

/// A composable predicate over values of type T.
///
/// Predicates can be combined using logical operators:
/// - `and`: Both predicates must be true
/// - `or`: Either predicate must be true
/// - `not`: Inverts the predicate
///
/// Any `Fn(&T) -> bool + Send + Sync` closure is a predicate.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let short_e_word = starts_with_char('E', Case::Insensitive).and(len_max(5));
/// assert!(short_e_word.check("Exxon"));
/// assert!(!short_e_word.check("Encapsulation"));
/// ```
pub trait Predicate<T: ?Sized>: Send + Sync {
    /// Check if the value satisfies this predicate.
    fn check(&self, value: &T) -> bool;
}

// Blanket impl for closures
impl<T: ?Sized, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn check(&self, value: &T) -> bool {
        self(value)
    }
}

/// Extension trait for predicate combinators.
///
/// Provides method chaining for combining predicates with logical operators.
/// All methods return concrete types, so a composed predicate is still
/// statically dispatched.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = contains("an", Case::Sensitive).and(len_min(6)).not();
/// assert!(p.check("Mobil"));      // no "an"
/// assert!(p.check("Span"));       // too short
/// assert!(!p.check("Bangalore")); // both hold, so not() inverts to false
/// ```
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized {
    /// Combine with AND logic.
    ///
    /// Returns a predicate that is true only when both predicates are true.
    /// The second predicate is not evaluated when the first is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = starts_with_char('B', Case::Sensitive).and(ends_with_char('e', Case::Sensitive));
    /// assert!(p.check("Bangalore"));
    /// assert!(!p.check("Bdd"));
    /// ```
    fn and<P: Predicate<T>>(self, other: P) -> And<Self, P> {
        And(self, other)
    }

    /// Combine with OR logic.
    ///
    /// Returns a predicate that is true when either predicate is true.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = starts_with_char('E', Case::Sensitive).or(starts_with_char('M', Case::Sensitive));
    /// assert!(p.check("Exxon"));
    /// assert!(p.check("Mobil"));
    /// assert!(!p.check("Bdd"));
    /// ```
    fn or<P: Predicate<T>>(self, other: P) -> Or<Self, P> {
        Or(self, other)
    }

    /// Invert the predicate.
    ///
    /// Returns a predicate that is true when the original predicate is false.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sift::predicate::*;
    ///
    /// let p = len_max(3).not();
    /// assert!(p.check("Exxon"));
    /// assert!(!p.check("Bdd"));
    /// ```
    fn not(self) -> Not<Self> {
        Not(self)
    }

    /// Erase the concrete type, for predicates assembled at runtime.
    fn boxed(self) -> BoxedPredicate<T>
    where
        Self: 'static,
    {
        BoxedPredicate::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T>> PredicateExt<T> for P {}

/// AND combinator - both predicates must be true.
#[derive(Clone, Copy, Debug)]
pub struct And<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for And<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) && self.1.check(value)
    }
}

/// OR combinator - either predicate must be true.
#[derive(Clone, Copy, Debug)]
pub struct Or<P1, P2>(pub P1, pub P2);

impl<T: ?Sized, P1: Predicate<T>, P2: Predicate<T>> Predicate<T> for Or<P1, P2> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value) || self.1.check(value)
    }
}

/// NOT combinator - inverts the predicate.
#[derive(Clone, Copy, Debug)]
pub struct Not<P>(pub P);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.check(value)
    }
}

/// Build a predicate that holds when both `p` and `q` hold.
///
/// Function form of [`PredicateExt::and`], handy when the left side is a
/// closure that has not been bound to a name yet.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = and(|s: &str| s.contains('x'), len_max(5));
/// assert!(p.check("Exxon"));
/// assert!(!p.check("Mobil"));
/// ```
pub fn and<T: ?Sized, P: Predicate<T>, Q: Predicate<T>>(p: P, q: Q) -> And<P, Q> {
    And(p, q)
}

/// Build a predicate that holds when either `p` or `q` holds.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = or(len_max(3), |s: &str| s.ends_with("on"));
/// assert!(p.check("Bdd"));
/// assert!(p.check("Exxon"));
/// assert!(!p.check("Mobil"));
/// ```
pub fn or<T: ?Sized, P: Predicate<T>, Q: Predicate<T>>(p: P, q: Q) -> Or<P, Q> {
    Or(p, q)
}

/// Build a predicate that holds when `p` does not.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = not(|s: &str| s.is_empty());
/// assert!(p.check("x"));
/// assert!(!p.check(""));
/// ```
pub fn not<T: ?Sized, P: Predicate<T>>(p: P) -> Not<P> {
    Not(p)
}

/// Check if all predicates are satisfied (const generic, zero-allocation).
///
/// Note: all_of requires homogeneous predicate types.
/// For mixed predicates, use .and() chaining instead.
#[derive(Clone, Copy, Debug)]
pub struct AllOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AllOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().all(|p| p.check(value))
    }
}

/// Create a predicate that checks if all given predicates are satisfied.
///
/// An empty array is vacuously true.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = all_of([
///     contains("a", Case::Insensitive),
///     contains("n", Case::Insensitive),
/// ]);
/// assert!(p.check("Bangalore"));
/// assert!(!p.check("Bdd"));
/// ```
pub fn all_of<P, const N: usize>(predicates: [P; N]) -> AllOf<P, N> {
    AllOf(predicates)
}

/// Check if any predicate is satisfied (const generic, zero-allocation).
#[derive(Clone, Copy, Debug)]
pub struct AnyOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for AnyOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if any given predicate is satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let vowel_start = any_of([
///     starts_with_char('a', Case::Insensitive),
///     starts_with_char('e', Case::Insensitive),
///     starts_with_char('i', Case::Insensitive),
///     starts_with_char('o', Case::Insensitive),
///     starts_with_char('u', Case::Insensitive),
/// ]);
/// assert!(vowel_start.check("Exxon"));
/// assert!(!vowel_start.check("Mobil"));
/// ```
pub fn any_of<P, const N: usize>(predicates: [P; N]) -> AnyOf<P, N> {
    AnyOf(predicates)
}

/// Check if no predicates are satisfied (const generic, zero-allocation).
///
/// Equivalent to `not(any_of(...))`.
#[derive(Clone, Copy, Debug)]
pub struct NoneOf<P, const N: usize>(pub [P; N]);

impl<T: ?Sized, P: Predicate<T>, const N: usize> Predicate<T> for NoneOf<P, N> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        !self.0.iter().any(|p| p.check(value))
    }
}

/// Create a predicate that checks if no given predicates are satisfied.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let p = none_of([contains("x", Case::Sensitive), contains("z", Case::Sensitive)]);
/// assert!(p.check("Mobil"));
/// assert!(!p.check("Exxon"));
/// ```
pub fn none_of<P, const N: usize>(predicates: [P; N]) -> NoneOf<P, N> {
    NoneOf(predicates)
}

/// A type-erased predicate.
///
/// Combinators return nested generic types, which is what you want when the
/// shape is known at compile time. When a filter is assembled from runtime
/// input (see [`FilterConfig`](crate::FilterConfig)) each branch has a
/// different type, and boxing gives them a common one.
///
/// # Example
///
/// ```rust
/// use sift::predicate::*;
///
/// let strict = true;
/// let p: BoxedPredicate<str> = if strict {
///     starts_with_char('E', Case::Sensitive).boxed()
/// } else {
///     starts_with_char('E', Case::Insensitive).boxed()
/// };
/// assert!(!p.check("exxon"));
/// ```
pub struct BoxedPredicate<T: ?Sized>(Box<dyn Predicate<T>>);

impl<T: ?Sized> BoxedPredicate<T> {
    /// Box a predicate.
    pub fn new<P: Predicate<T> + 'static>(predicate: P) -> Self {
        BoxedPredicate(Box::new(predicate))
    }
}

impl<T: ?Sized> Predicate<T> for BoxedPredicate<T> {
    #[inline]
    fn check(&self, value: &T) -> bool {
        self.0.check(value)
    }
}

impl<T: ?Sized> fmt::Debug for BoxedPredicate<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BoxedPredicate(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{contains, len_max, len_min, starts_with_char, Case};

    #[test]
    fn test_and() {
        let p = len_min(3).and(len_max(5));
        assert!(p.check("Bdd"));
        assert!(p.check("Mobil"));
        assert!(!p.check("ab"));
        assert!(!p.check("Banana"));
    }

    #[test]
    fn test_or() {
        let p = len_max(2).or(len_min(7));
        assert!(p.check("ab"));
        assert!(p.check("Avocado"));
        assert!(!p.check("Apple"));
    }

    #[test]
    fn test_not() {
        let p = starts_with_char('E', Case::Sensitive).not();
        assert!(p.check("Mobil"));
        assert!(p.check("exxon"));
        assert!(!p.check("Exxon"));
    }

    #[test]
    fn test_free_function_forms_match_methods() {
        let words = ["Exxon", "Mobil", "Bdd", "Encapsulation", "x"];
        let a = starts_with_char('E', Case::Sensitive);
        let b = len_max(5);

        for w in words {
            assert_eq!(and(a, b).check(w), a.and(b).check(w));
            assert_eq!(or(a, b).check(w), a.or(b).check(w));
            assert_eq!(not(a).check(w), a.not().check(w));
        }
    }

    #[test]
    fn test_and_short_circuits() {
        let p = len_max(0).and(|_: &str| -> bool { panic!("right side evaluated") });
        assert!(!p.check("anything"));
    }

    #[test]
    fn test_or_short_circuits() {
        let p = len_min(1).or(|_: &str| -> bool { panic!("right side evaluated") });
        assert!(p.check("anything"));
    }

    #[test]
    fn test_all_of() {
        let p = all_of([len_min(2), len_min(3), len_max(5)]);
        assert!(p.check("Bdd"));
        assert!(!p.check("ab"));
        assert!(!p.check("Banana"));

        let empty: AllOf<crate::predicate::Length, 0> = all_of([]);
        assert!(empty.check("anything"));
    }

    #[test]
    fn test_any_of() {
        let p = any_of([
            starts_with_char('E', Case::Sensitive),
            starts_with_char('M', Case::Sensitive),
        ]);
        assert!(p.check("Exxon"));
        assert!(p.check("Mobil"));
        assert!(!p.check("Bdd"));
    }

    #[test]
    fn test_none_of() {
        let p = none_of([contains("x", Case::Sensitive), contains("z", Case::Sensitive)]);
        assert!(p.check("Mobil"));
        assert!(!p.check("Exxon"));
        assert!(!p.check("jazz"));
    }

    #[test]
    fn test_complex_chain() {
        // (starts with B and len <= 3) or ends with n, negated
        let p = starts_with_char('B', Case::Sensitive)
            .and(len_max(3))
            .or(|s: &str| s.ends_with('n'))
            .not();
        assert!(!p.check("Bdd"));
        assert!(!p.check("Exxon"));
        assert!(p.check("Bangalore"));
        assert!(p.check("Mobil"));
    }

    #[test]
    fn test_closure_as_predicate() {
        let has_double = |s: &str| s.as_bytes().windows(2).any(|w| w[0] == w[1]);
        assert!(has_double.check("Exxon"));
        assert!(!has_double.check("Mobil"));

        let p = has_double.and(len_max(3));
        assert!(p.check("Bdd"));
        assert!(!p.check("Exxon"));
    }

    #[test]
    fn test_boxed_predicate() {
        let preds: Vec<BoxedPredicate<str>> = vec![
            len_max(3).boxed(),
            starts_with_char('E', Case::Sensitive).boxed(),
            (|s: &str| s.contains("bil")).boxed(),
        ];
        let hits: Vec<bool> = preds.iter().map(|p| p.check("Mobil")).collect();
        assert_eq!(hits, vec![false, false, true]);
        assert_eq!(format!("{:?}", preds[0]), "BoxedPredicate(..)");
    }
}
