//! Property-based tests for filters and combinators

use proptest::prelude::*;
use sift::predicate::*;
use sift::{filter_by, filter_ending_with, filter_starting_with};

fn word() -> impl Strategy<Value = String> {
    "[a-eA-E]{0,8}"
}

fn sequence() -> impl Strategy<Value = Vec<Option<String>>> {
    prop::collection::vec(prop::option::of(word()), 0..20)
}

proptest! {
    #[test]
    fn prop_and_matches_boolean_and(s in word(), c in "[a-e]", max in 0usize..8) {
        let p = starts_with_char(c.chars().next().unwrap(), Case::Insensitive);
        let q = len_max(max);
        prop_assert_eq!(p.and(q).check(&s[..]), p.check(&s[..]) && q.check(&s[..]));
        prop_assert_eq!(and(p, q).check(&s[..]), p.check(&s[..]) && q.check(&s[..]));
    }

    #[test]
    fn prop_or_matches_boolean_or(s in word(), c in "[a-e]", min in 0usize..8) {
        let p = ends_with_char(c.chars().next().unwrap(), Case::Sensitive);
        let q = len_min(min);
        prop_assert_eq!(p.or(q).check(&s[..]), p.check(&s[..]) || q.check(&s[..]));
        prop_assert_eq!(or(p, q).check(&s[..]), p.check(&s[..]) || q.check(&s[..]));
    }

    #[test]
    fn prop_not_inverts(s in word(), sub in "[a-e]{0,2}") {
        let p = contains(&sub, Case::Insensitive);
        prop_assert_eq!(p.clone().not().check(&s[..]), !p.check(&s[..]));
        prop_assert_eq!(not(p.clone()).check(&s[..]), !p.check(&s[..]));
    }

    #[test]
    fn prop_filter_is_subsequence(items in sequence(), max in 0usize..8) {
        let kept = filter_by(&items, &len_max(max));
        let mut rest = items.iter().flatten();
        for s in &kept {
            prop_assert!(!s.is_empty());
            prop_assert!(rest.any(|x| x == s));
        }
    }

    #[test]
    fn prop_filter_idempotent(items in sequence(), sub in "[a-e]") {
        let p = contains(&sub, Case::Sensitive);
        let once = filter_by(&items, &p);
        prop_assert_eq!(filter_by(&once, &p), once);
    }

    #[test]
    fn prop_target_must_be_single_char(items in sequence(), target in "([a-e]{2,5})?") {
        prop_assert!(filter_starting_with(&items, &target, Case::Sensitive).is_err());
        prop_assert!(filter_ending_with(&items, &target, Case::Insensitive).is_err());
    }
}
