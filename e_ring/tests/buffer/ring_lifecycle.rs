//! Ring Lifecycle Integration Tests
//!
//! Tests focused on filling, wrapping and reading back a ring
//! through the public API only.

use e_ring::Ring;

#[test]
fn test_fill_then_wrap_keeps_newest_elements() {
    let mut ring: Ring<u32, 5> = Ring::new();

    for i in 0..5 {
        ring.append(i);
        assert_eq!(ring.len(), i as usize + 1);
    }
    assert!(ring.is_full());
    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);

    // Wrap around twice
    for i in 5..15 {
        ring.append(i);
    }
    assert_eq!(ring.len(), 5);
    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![10, 11, 12, 13, 14]);
    assert_eq!(ring.first(), Some(10));
    assert_eq!(ring.last(), Some(14));
}

#[test]
fn test_len_never_decreases() {
    let mut ring: Ring<i8, 3> = Ring::new();
    let mut previous = ring.len();

    for i in 0..20 {
        ring.append(i);
        assert!(ring.len() >= previous);
        assert!(ring.len() <= ring.size());
        previous = ring.len();
    }
}

#[test]
fn test_iterators_are_independent() {
    let ring: Ring<u8, 4> = (1..=6).collect();

    let mut first = ring.iter();
    let mut second = ring.iter();

    assert_eq!(first.next(), Some(3));
    assert_eq!(first.next(), Some(4));
    // Advancing one iterator does not move the other
    assert_eq!(second.next(), Some(3));
    assert_eq!(first.len(), 2);
    assert_eq!(second.len(), 3);
}

#[test]
fn test_extend_appends_in_order() {
    let mut ring: Ring<u16, 4> = Ring::new();
    ring.append(1);
    ring.extend([2, 3]);
    ring.extend(vec![4, 5, 6]);

    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
}

#[test]
fn test_ring_of_floats() {
    let ring: Ring<f32, 3> = [0.5, 1.5, 2.5, 3.5].into_iter().collect();
    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![1.5, 2.5, 3.5]);
    assert_eq!(ring.avg(), Some(2.5));
}

#[test]
fn test_ring_is_copy() {
    let mut ring: Ring<u8, 2> = Ring::new();
    ring.append(9);
    let copy = ring;

    ring.append(10);

    assert_eq!(copy.iter().collect::<Vec<_>>(), vec![9]);
    assert_eq!(ring.iter().collect::<Vec<_>>(), vec![9, 10]);
    assert_ne!(copy, ring);
}
