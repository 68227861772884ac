use crate::Ring;

impl<T: Copy + Default + Into<f32>, const N: usize> Ring<T, N> {
    /// Calculate the average of the elements in the `Ring`, `None` if it is empty
    pub fn avg(&self) -> Option<f32> {
        if self.is_empty() {
            return None;
        }
        let acc: f32 = self.iter().map(Into::<f32>::into).sum();
        Some(acc / self.len() as f32)
    }

    /// Calculate the variance of the elements in the `Ring`, use provided `avg` if `Some`,
    /// otherwise it calculates it (in the latter case two iterations are required).
    ///
    /// This is the population variance, the sum of squared deviations is divided by `len()`.
    ///
    /// # Example
    /// ```
    /// use e_ring::Ring;
    ///
    /// let ring: Ring<i16, 4> = [2, 4, 4, 6].into_iter().collect();
    /// let avg = ring.avg();
    /// assert_eq!(avg, Some(4.0));
    /// assert_eq!(ring.var(avg), Some(2.0));
    /// assert_eq!(ring.var(None), Some(2.0));
    /// ```
    pub fn var(&self, avg: Option<f32>) -> Option<f32> {
        let avg = match avg {
            Some(avg) => avg,
            None => self.avg()?,
        };
        if self.is_empty() {
            return None;
        }
        let acc: f32 = self
            .iter()
            .map(|el| {
                let val: f32 = el.into() - avg;
                val * val
            })
            .sum();
        Some(acc / self.len() as f32)
    }

    /// Standard deviation, the square root of [`Ring::var`]
    pub fn std_dev(&self, avg: Option<f32>) -> Option<f32> {
        self.var(avg).map(sqrt)
    }
}

/// Newton's method square root, `core` has no `f32::sqrt`.
fn sqrt(value: f32) -> f32 {
    if value.is_nan() || value < 0.0 {
        return f32::NAN;
    }
    if value == 0.0 || value.is_infinite() {
        return value;
    }
    let mut guess = if value > 1.0 { value / 2.0 } else { 1.0 };
    for _ in 0..64 {
        let next = 0.5 * (guess + value / guess);
        if next == guess {
            break;
        }
        guess = next;
    }
    guess
}
