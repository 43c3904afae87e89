//! # Sift
//!
//! Composable predicates for filtering lists of strings.
//!
//! A filter is a predicate (any `Fn(&str) -> bool`, or one of the named
//! predicates in [`predicate`]) applied to an ordered sequence. The result
//! keeps the matching elements in their original order. Absent (`None`) and
//! empty elements are always dropped and never reach the predicate.
//!
//! ## Quick Example
//!
//! ```rust
//! use sift::{filter_by, filter_starting_with, predicate::*, Case};
//!
//! let words = ["Exxon", "Mobil", "Bangalore", "Bdd", "Encapsulation"];
//!
//! // Shorthand for the common case
//! let e_words = filter_starting_with(words, "E", Case::Insensitive)?;
//! assert_eq!(e_words, vec!["Exxon", "Encapsulation"]);
//!
//! // Compose predicates for anything else
//! let b_but_not_short = starts_with_char('B', Case::Sensitive).and(len_max(3).not());
//! assert_eq!(filter_by(words, &b_but_not_short), vec!["Bangalore"]);
//! # Ok::<(), sift::FilterError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`FilterConfig`] and [`Case`]
//! - `tracing`: debug events from [`filter_by`], warnings for rejected arguments
//! - `proptest`: generation strategies in [`testing`]

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod filter;
pub mod predicate;
pub mod testing;

// Re-exports
pub use config::FilterConfig;
pub use error::FilterError;
pub use filter::{
    filter_by, filter_by_length, filter_containing, filter_ending_with, filter_iter,
    filter_starting_with, Candidate,
};
pub use predicate::{Case, Predicate, PredicateExt};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::FilterConfig;
    pub use crate::error::FilterError;
    pub use crate::filter::{
        filter_by, filter_by_length, filter_containing, filter_ending_with, filter_iter,
        filter_starting_with, Candidate,
    };
    pub use crate::predicate::prelude::*;
}
