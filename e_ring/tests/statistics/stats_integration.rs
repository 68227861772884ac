//! Statistics Integration Tests
//!
//! Mean, variance and standard deviation over rings of different
//! element types and fill levels.

use e_ring::Ring;
use proptest::prelude::*;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() <= 1e-3 * expected.abs().max(1.0),
        "{} is not close to {}",
        actual,
        expected
    );
}

#[test]
fn test_stats_on_partially_filled_ring() {
    let mut ring: Ring<u8, 10> = Ring::new();
    ring.append(10);
    ring.append(20);

    // Unused slots hold T::default() but must not be counted
    assert_eq!(ring.avg(), Some(15.0));
    assert_eq!(ring.var(None), Some(25.0));
    assert_close(ring.std_dev(None).unwrap(), 5.0);
}

#[test]
fn test_stats_follow_the_window() {
    let mut ring: Ring<i16, 3> = Ring::new();
    ring.extend([-100, -100, -100]);
    assert_eq!(ring.avg(), Some(-100.0));

    ring.extend([1, 2, 3]);
    assert_eq!(ring.avg(), Some(2.0));
    assert_close(ring.var(None).unwrap(), 2.0 / 3.0);
}

#[test]
fn test_var_reuses_given_average() {
    let ring: Ring<u16, 4> = [1, 2, 3, 4].into_iter().collect();
    let avg = ring.avg();

    assert_eq!(avg, Some(2.5));
    assert_eq!(ring.var(avg), ring.var(None));

    // A different center gives the mean squared distance from it
    assert_eq!(ring.var(Some(0.0)), Some(7.5));
}

#[test]
fn test_stats_on_empty_ring() {
    let ring: Ring<i8, 4> = Ring::new();
    assert_eq!(ring.avg(), None);
    assert_eq!(ring.var(None), None);
    assert_eq!(ring.var(Some(3.0)), None);
    assert_eq!(ring.std_dev(None), None);
}

proptest! {
    #[test]
    fn test_avg_lies_within_range(values in prop::collection::vec(any::<i16>(), 1..32)) {
        let ring: Ring<i16, 32> = values.iter().copied().collect();
        let avg = ring.avg().unwrap();
        let min = *values.iter().min().unwrap() as f32;
        let max = *values.iter().max().unwrap() as f32;

        prop_assert!(avg >= min - 1e-2 && avg <= max + 1e-2);
    }

    #[test]
    fn test_var_is_not_negative(values in prop::collection::vec(any::<i16>(), 1..32)) {
        let ring: Ring<i16, 32> = values.iter().copied().collect();
        let var = ring.var(None).unwrap();
        let std_dev = ring.std_dev(None).unwrap();

        prop_assert!(var >= 0.0);
        prop_assert!(std_dev >= 0.0);
        prop_assert!((std_dev * std_dev - var).abs() <= 1e-3 * var.max(1.0));
    }
}
