//! Fixed capacity, append only ring buffer and its iterator.
//!
//! ```
//! use e_ring::ring::{Ring, RingIterator};
//!
//! let ring: Ring<u8, 2> = [1, 2, 3].into_iter().collect();
//! let iter: RingIterator<'_, u8, 2> = ring.iter();
//! assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
//! ```

/// Append only data structure, replace oldest element when reach maximum capacity of `N` elements.
///
/// The backing storage is a plain `[T; N]` array, a `Ring` never allocates.
///
/// # Example
/// ```
/// use e_ring::Ring;
///
/// let mut ring: Ring<u32, 3> = Ring::new();
/// ring.append(1);
/// ring.append(2);
/// ring.append(3);
/// ring.append(4); // replaces 1
///
/// assert_eq!(ring.len(), 3);
/// assert_eq!(ring.first(), Some(2));
/// assert_eq!(ring.last(), Some(4));
/// ```
///
/// A zero capacity ring is rejected at compile time:
/// ```compile_fail
/// use e_ring::Ring;
///
/// let ring: Ring<u32, 0> = Ring::new();
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Ring<T, const N: usize> {
    data: [T; N],
    next: usize, // index of the slot the next append writes
    len: usize,
}

/// Iterator over `Ring` starting from the oldest element.
#[derive(Debug)]
pub struct RingIterator<'a, T, const N: usize> {
    start: usize,
    count: usize,
    ring: &'a Ring<T, N>,
}

impl<T: Copy + Default, const N: usize> Default for Ring<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default, const N: usize> Ring<T, N> {
    /// Creates a new empty `Ring` of given size `N`.
    ///
    /// # Example
    /// ```
    /// use e_ring::Ring;
    ///
    /// let ring: Ring<i16, 8> = Ring::new();
    /// assert!(ring.is_empty());
    /// assert_eq!(ring.size(), 8);
    /// ```
    pub fn new() -> Self {
        const { assert!(N > 0, "Ring capacity must be greater than zero") };
        Ring {
            data: [T::default(); N],
            next: 0usize,
            len: 0usize,
        }
    }

    fn increment_next(&mut self) {
        self.next = (self.next + 1) % N
    }

    /// Append an element to the `Ring`, if there are already `N` elements, it replaces the oldest.
    ///
    /// # Example
    /// ```
    /// use e_ring::Ring;
    ///
    /// let mut ring: Ring<u8, 2> = Ring::new();
    /// ring.append(1);
    /// ring.append(2);
    /// ring.append(3);
    ///
    /// assert_eq!(ring.iter().collect::<Vec<_>>(), vec![2, 3]);
    /// ```
    pub fn append(&mut self, el: T) {
        self.data[self.next] = el;
        self.len = N.min(self.len + 1);
        self.increment_next()
    }

    /// Number of elements in the `Ring`, it never decreases.
    pub fn len(&self) -> usize {
        self.len
    }

    /// If the `Ring` is empty. Zero elements
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// If the `Ring` holds `N` elements, every further append replaces the oldest one.
    pub fn is_full(&self) -> bool {
        self.len == N
    }

    /// Return the max size of the ring
    pub fn size(&self) -> usize {
        N
    }

    /// Return the last item inserted
    ///
    /// # Example
    /// ```
    /// use e_ring::Ring;
    ///
    /// let mut ring: Ring<u8, 4> = Ring::new();
    /// assert_eq!(ring.last(), None);
    ///
    /// ring.append(7);
    /// assert_eq!(ring.last(), Some(7));
    /// ```
    pub fn last(&self) -> Option<T> {
        if self.len == 0 {
            None
        } else if self.next == 0 {
            Some(self.data[N - 1])
        } else {
            Some(self.data[self.next - 1])
        }
    }

    /// Return the oldest item still in the `Ring`
    pub fn first(&self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            Some(self.data[self.oldest_index()])
        }
    }

    fn oldest_index(&self) -> usize {
        if self.len == N {
            self.next
        } else {
            0
        }
    }

    /// Returns an iterator over the `Ring` starting from the oldest appended element
    ///
    /// # Example
    /// ```
    /// use e_ring::Ring;
    ///
    /// let mut ring: Ring<i32, 3> = Ring::new();
    /// ring.extend([10, 20, 30, 40]);
    ///
    /// let mut iter = ring.iter();
    /// assert_eq!(iter.len(), 3);
    /// assert_eq!(iter.next(), Some(20));
    /// assert_eq!(iter.next(), Some(30));
    /// assert_eq!(iter.next(), Some(40));
    /// assert_eq!(iter.next(), None);
    /// ```
    pub fn iter(&self) -> RingIterator<'_, T, N> {
        RingIterator {
            ring: self,
            start: self.oldest_index(),
            count: 0usize,
        }
    }
}

impl<T: Copy + Default + PartialEq, const N: usize> PartialEq for Ring<T, N> {
    /// Two rings are equal when they yield the same elements in the same order,
    /// regardless of where the elements sit in the backing array.
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Copy + Default + Eq, const N: usize> Eq for Ring<T, N> {}

impl<T: Copy + Default, const N: usize> Extend<T> for Ring<T, N> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for el in iter {
            self.append(el);
        }
    }
}

impl<T: Copy + Default, const N: usize> FromIterator<T> for Ring<T, N> {
    /// Collects into a `Ring`, only the last `N` items survive.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut ring = Ring::new();
        ring.extend(iter);
        ring
    }
}

impl<'a, T: Copy + Default, const N: usize> IntoIterator for &'a Ring<T, N> {
    type Item = T;
    type IntoIter = RingIterator<'a, T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Copy + Default, const N: usize> Iterator for RingIterator<'_, T, N> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.count == self.ring.len {
            return None;
        }
        let current_index = (self.start + self.count) % N;
        let result = self.ring.data[current_index];
        self.count += 1;
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len - self.count;
        (remaining, Some(remaining))
    }
}

impl<T: Copy + Default, const N: usize> ExactSizeIterator for RingIterator<'_, T, N> {}
