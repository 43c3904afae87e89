//! Predicate prelude for convenient imports
//!
//! This module re-exports the most commonly used predicate types and functions.
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::prelude::*;
//!
//! let p = starts_with_char('a', Case::Insensitive).and(len_max(5));
//! assert!(p.check("APPLE"));
//! ```

// Core trait
pub use super::combinators::{BoxedPredicate, Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{all_of, and, any_of, none_of, not, or, And, Not, Or};

// String predicates
pub use super::string::{
    contains, ends_with_char, len_between, len_max, len_min, length, not_empty, starts_with_char,
    Case,
};
