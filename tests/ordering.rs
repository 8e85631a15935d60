//! Property tests for the hierarchy code ordering and canonical form.

#![allow(missing_docs)]

use std::cmp::Ordering;

use elastic_calculator::HierarchyCode;
use proptest::prelude::*;

/// Small level values and shallow depths, so that shared prefixes and
/// ancestor/descendant pairs come up often.
fn code() -> impl Strategy<Value = HierarchyCode> {
    proptest::collection::vec(0u64..4, 1..6)
        .prop_map(|levels| HierarchyCode::try_from(levels).unwrap())
}

/// Arbitrary level values, for the string round trip.
fn wide_code() -> impl Strategy<Value = HierarchyCode> {
    proptest::collection::vec(any::<u64>(), 1..8)
        .prop_map(|levels| HierarchyCode::try_from(levels).unwrap())
}

proptest! {
    #[test]
    fn ordering_is_antisymmetric(a in code(), b in code()) {
        prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
    }

    #[test]
    fn ordering_agrees_with_equality(a in code(), b in code()) {
        prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
    }

    #[test]
    fn ordering_is_transitive(a in code(), b in code(), c in code()) {
        if a <= b && b <= c {
            prop_assert!(a <= c);
        }
    }

    #[test]
    fn ancestors_sort_first(a in code(), level in 0u64..4) {
        let child = a.child(level);
        prop_assert!(a < child);
        for ancestor in child.ancestors() {
            prop_assert!(ancestor < child);
        }
    }

    #[test]
    fn sorted_subtrees_are_contiguous(mut codes in proptest::collection::vec(code(), 0..40)) {
        codes.sort();
        for (i, ancestor) in codes.iter().enumerate() {
            let Some(first_outside) = codes[i + 1..]
                .iter()
                .position(|code| !code.is_descendant_of(ancestor) && code != ancestor)
            else {
                continue;
            };
            for code in &codes[i + 1 + first_outside..] {
                prop_assert!(!code.is_descendant_of(ancestor));
            }
        }
    }

    #[test]
    fn canonical_string_roundtrip(node in wide_code()) {
        let parsed: HierarchyCode = node.to_string().parse().unwrap();
        prop_assert_eq!(parsed, node);
    }

    #[test]
    fn any_width_roundtrip(node in wide_code(), digits in 0u16..6, trailing_dot in any::<bool>()) {
        let mut text = node.display(digits).to_string();
        if trailing_dot {
            text.push('.');
        }
        let parsed: HierarchyCode = text.parse().unwrap();
        prop_assert_eq!(parsed, node);
    }
}
