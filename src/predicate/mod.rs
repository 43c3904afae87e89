//! Predicate combinators for composable string filters
//!
//! This module provides the predicates a filter is built from and the
//! combinators (`and`, `or`, `not`) that compose them. Predicates are plain
//! values: build them once, combine them freely, and hand them to
//! [`filter_by`](crate::filter_by).
//!
//! # Philosophy
//!
//! Instead of writing one loop per filtering rule, predicate combinators
//! allow you to:
//!
//! - Build complex rules from simple, reusable pieces
//! - Compose rules using familiar logical operators
//! - Mix named predicates with ad-hoc closures
//!
//! # Example
//!
//! ```rust
//! use sift::predicate::*;
//!
//! let e_word = starts_with_char('E', Case::Insensitive);
//! let short = len_max(5);
//!
//! assert!(e_word.and(short).check("Exxon"));
//! assert!(!e_word.and(short).check("Encapsulation"));
//! assert!(e_word.and(short).not().check("Mobil"));
//! ```
//!
//! # Closures
//!
//! ```rust
//! use sift::predicate::*;
//!
//! let doubled = |s: &str| s.as_bytes().windows(2).any(|w| w[0] == w[1]);
//! let p = doubled.and(not_empty());
//! assert!(p.check("Bdd"));
//! assert!(!p.check("Mobil"));
//! ```

mod combinators;
mod string;

pub mod prelude;

// Re-export core trait
pub use combinators::{BoxedPredicate, Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{all_of, and, any_of, none_of, not, or, AllOf, And, AnyOf, NoneOf, Not, Or};

// Re-export string predicates
pub use string::{
    contains, ends_with_char, len_between, len_max, len_min, length, not_empty, starts_with_char,
    Case, Contains, EndsWithChar, Length, NotEmpty, StartsWithChar,
};
