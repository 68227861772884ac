//! Range detection and linear rescaling of the values stored in a [`Ring`].

use crate::ring::RingIterator;
use crate::Ring;
use core::ops::Sub;

/// Contains min and max value in a `Ring`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<T> {
    /// Minimum value
    pub min: T,
    /// Maximum value
    pub max: T,
}

/// Errors in building a [`Range`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// `min` is greater than `max`, or the two are not comparable
    #[error("range minimum is not lower or equal to the maximum")]
    Inverted,
}

impl<T: PartialOrd> Range<T> {
    /// Creates a range, failing if `min > max`.
    ///
    /// # Example
    /// ```
    /// use e_ring::{Range, RangeError};
    ///
    /// assert!(Range::new(1i16, 8).is_ok());
    /// assert!(Range::new(3, 3).is_ok());
    /// assert_eq!(Range::new(8i16, 1), Err(RangeError::Inverted));
    /// ```
    pub fn new(min: T, max: T) -> Result<Range<T>, RangeError> {
        if min <= max {
            Ok(Range { min, max })
        } else {
            Err(RangeError::Inverted)
        }
    }
}

impl<T: Sub<Output = T> + Copy> Range<T> {
    /// Returns the range delta
    pub fn delta(&self) -> T {
        self.max - self.min
    }
}

impl<T: Copy + Into<f32>> Range<T> {
    fn bounds_f32(&self) -> (f32, f32) {
        let min = self.min.into();
        (min, self.max.into() - min)
    }
}

/// Trait defining a `range` method to find min and max in one iteration
pub trait FindRange<T> {
    /// calculate min and max with one iteration
    fn range(&self) -> Option<Range<T>>;
}

impl<T: PartialOrd + Copy + Default, const N: usize> FindRange<T> for Ring<T, N> {
    fn range(&self) -> Option<Range<T>> {
        let mut iter = self.iter();
        let first = iter.next()?;
        let mut min_max = Range {
            min: first,
            max: first,
        };
        for el in iter {
            if min_max.min > el {
                min_max.min = el;
            }
            if min_max.max < el {
                min_max.max = el;
            }
        }

        Some(min_max)
    }
}

/// Iterator over a [`Ring`] yielding every element mapped from the `current` range into the
/// `desired` one, created with [`Ring::rescaled_iter`]
#[derive(Debug)]
pub struct RescaleIterator<'a, T, const N: usize> {
    current_min: f32,
    current_delta: f32,
    desired_min: f32,
    desired_delta: f32,
    ring_iter: RingIterator<'a, T, N>,
}

impl<T: Copy + Default + Into<f32>, const N: usize> Ring<T, N> {
    /// Returns an iterator over the `Ring` on which values are rescaled according to the `desired`
    /// range.
    ///
    /// When `current` is empty (min equal to max) every element lands in the middle of `desired`.
    ///
    /// # Example
    /// ```
    /// use e_ring::{FindRange, Range, Ring};
    ///
    /// let ring: Ring<i16, 3> = [100, 200, 300].into_iter().collect();
    /// let current = ring.range().unwrap();
    /// let desired = Range::new(20, 30).unwrap();
    ///
    /// let rescaled: Vec<f32> = ring.rescaled_iter(current, desired).collect();
    /// assert_eq!(rescaled, vec![20.0, 25.0, 30.0]);
    /// ```
    pub fn rescaled_iter(&self, current: Range<T>, desired: Range<T>) -> RescaleIterator<'_, T, N> {
        let (current_min, current_delta) = current.bounds_f32();
        let (desired_min, desired_delta) = desired.bounds_f32();
        RescaleIterator {
            current_min,
            current_delta,
            desired_min,
            desired_delta,
            ring_iter: self.iter(),
        }
    }
}

impl<T: Copy + Default + Into<f32>, const N: usize> Iterator for RescaleIterator<'_, T, N> {
    type Item = f32;

    fn next(&mut self) -> Option<Self::Item> {
        self.ring_iter.next().map(|el| {
            let mut zero_one = (el.into() - self.current_min) / self.current_delta;
            if zero_one.is_nan() {
                zero_one = 0.5;
            }
            zero_one * self.desired_delta + self.desired_min
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ring_iter.size_hint()
    }
}

impl<T: Copy + Default + Into<f32>, const N: usize> ExactSizeIterator
    for RescaleIterator<'_, T, N>
{
}
