//! Property-based tests for UniqueIntSet laws.
//!
//! These tests verify the properties an insertion-ordered unique
//! collection must satisfy for arbitrary insertion sequences.

use proptest::prelude::*;
use unique_int_set::set::UniqueIntSet;

/// Deduplicates `values`, keeping the first occurrence of each.
fn first_occurrences(values: &[i32]) -> Vec<i32> {
    let mut result: Vec<i32> = Vec::new();
    for &value in values {
        if !result.contains(&value) {
            result.push(value);
        }
    }
    result
}

// =============================================================================
// Insert-Contains Law
// Description: An inserted element is always contained in the set
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_contains_law(
        elements in prop::collection::vec(any::<i32>(), 0..80),
        new_element: i32
    ) {
        let mut set: UniqueIntSet = elements.into_iter().collect();
        set.insert(new_element);

        prop_assert!(set.contains(new_element));
    }
}

// =============================================================================
// Absent-Before-Insert Law
// Description: An element never inserted is never contained
// =============================================================================

proptest! {
    #[test]
    fn prop_absent_before_insert_law(
        elements in prop::collection::vec(any::<i32>(), 0..80),
        probe: i32
    ) {
        let set: UniqueIntSet = elements.iter().copied().collect();

        prop_assert_eq!(set.contains(probe), elements.contains(&probe));
    }
}

// =============================================================================
// Idempotence Law
// Description: insert(x); insert(x) is observably the same as insert(x)
// =============================================================================

proptest! {
    #[test]
    fn prop_insert_idempotence_law(
        elements in prop::collection::vec(any::<i32>(), 0..80),
        element: i32
    ) {
        let mut once: UniqueIntSet = elements.into_iter().collect();
        let mut twice = once.clone();

        once.insert(element);
        twice.insert(element);
        let length_after_first = twice.len();
        twice.insert(element);

        prop_assert_eq!(twice.len(), length_after_first);
        prop_assert_eq!(once, twice);
    }
}

// =============================================================================
// Size Growth Law
// Description: insert grows the size by exactly 0 or 1
// =============================================================================

proptest! {
    #[test]
    fn prop_size_growth_law(elements in prop::collection::vec(-20i32..20, 0..120)) {
        let mut set = UniqueIntSet::new();
        for element in elements {
            let before = set.len();
            let was_present = set.contains(element);
            let inserted = set.insert(element);

            prop_assert_eq!(inserted, !was_present);
            prop_assert_eq!(set.len(), before + usize::from(inserted));
        }
    }
}

// =============================================================================
// Insertion Order Law
// Description: the sequence equals the input deduplicated by first occurrence
// =============================================================================

proptest! {
    #[test]
    fn prop_insertion_order_law(elements in prop::collection::vec(-50i32..50, 0..200)) {
        let set: UniqueIntSet = elements.iter().copied().collect();

        let expected = first_occurrences(&elements);
        prop_assert_eq!(set.as_slice(), expected.as_slice());
    }
}

// =============================================================================
// Uniqueness Law
// Description: no two positions hold the same value
// =============================================================================

proptest! {
    #[test]
    fn prop_uniqueness_law(elements in prop::collection::vec(-10i32..10, 0..100)) {
        let set: UniqueIntSet = elements.into_iter().collect();
        let slice = set.as_slice();

        for (i, left) in slice.iter().enumerate() {
            for right in &slice[i + 1..] {
                prop_assert_ne!(left, right);
            }
        }
    }
}

// =============================================================================
// Prefix Stability Law
// Description: inserting never changes the elements already present
// =============================================================================

proptest! {
    #[test]
    fn prop_prefix_stability_law(
        initial in prop::collection::vec(any::<i32>(), 0..80),
        later in prop::collection::vec(any::<i32>(), 0..80)
    ) {
        let mut set: UniqueIntSet = initial.into_iter().collect();
        let before: Vec<i32> = set.as_slice().to_vec();

        set.extend(later);

        prop_assert!(set.as_slice().starts_with(&before));
    }
}

// =============================================================================
// Fallible Insert Law
// Description: try_insert behaves like insert when allocation succeeds
// =============================================================================

proptest! {
    #[test]
    fn prop_try_insert_agrees_with_insert(elements in prop::collection::vec(-40i32..40, 0..150)) {
        let mut infallible = UniqueIntSet::new();
        let mut fallible = UniqueIntSet::new();

        for element in elements {
            let inserted = infallible.insert(element);
            prop_assert_eq!(fallible.try_insert(element), Ok(inserted));
        }

        prop_assert_eq!(infallible, fallible);
    }
}
