//! Property based checks of the ring invariants against a `Vec` model.

use e_ring::Ring;
use proptest::prelude::*;

const CAPACITY: usize = 16;

/// The last `CAPACITY` items of `values`, what the ring is expected to hold.
fn model(values: &[i32]) -> Vec<i32> {
    let skip = values.len().saturating_sub(CAPACITY);
    values[skip..].to_vec()
}

proptest! {
    #[test]
    fn test_iter_yields_last_n_appended(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut ring: Ring<i32, CAPACITY> = Ring::new();
        for value in &values {
            ring.append(*value);
        }

        prop_assert_eq!(ring.iter().collect::<Vec<_>>(), model(&values));
    }

    #[test]
    fn test_len_is_min_of_appends_and_capacity(count in 0usize..100) {
        let mut ring: Ring<u8, CAPACITY> = Ring::new();
        for i in 0..count {
            ring.append(i as u8);
        }

        prop_assert_eq!(ring.len(), count.min(CAPACITY));
        prop_assert_eq!(ring.iter().len(), ring.len());
        prop_assert_eq!(ring.is_empty(), count == 0);
        prop_assert_eq!(ring.is_full(), count >= CAPACITY);
    }

    #[test]
    fn test_first_and_last_match_model(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let ring: Ring<i32, CAPACITY> = values.iter().copied().collect();
        let expected = model(&values);

        prop_assert_eq!(ring.first(), expected.first().copied());
        prop_assert_eq!(ring.last(), expected.last().copied());
    }

    #[test]
    fn test_equal_content_means_equal_rings(
        prefix in prop::collection::vec(any::<i32>(), 0..40),
        tail in prop::collection::vec(any::<i32>(), CAPACITY..=CAPACITY),
    ) {
        // Different histories ending with the same CAPACITY values
        let a: Ring<i32, CAPACITY> = tail.iter().copied().collect();
        let b: Ring<i32, CAPACITY> = prefix.iter().chain(tail.iter()).copied().collect();

        prop_assert_eq!(a, b);
    }
}
