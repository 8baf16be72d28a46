use crate::error::{Result, SimplifyError};
use crate::primitives::Point2;
use crate::simplify::{rdp, Epsilon};
use num_traits::Float;
use std::collections::VecDeque;

/// A fixed-length run of the most recent samples of one channel.
///
/// The window always holds exactly `capacity` samples; it starts out all
/// zeros and new readings overwrite them from the left. Once every slot has
/// been written, each new reading pushes the oldest one out so the trace
/// scrolls. Sample `i` is plotted at x = `i`.
///
/// # Example
///
/// ```
/// use wavethin::series::SampleWindow;
///
/// let mut window = SampleWindow::<f64>::with_capacity(3).unwrap();
/// window.extend([1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(window.values().collect::<Vec<_>>(), vec![2.0, 3.0, 4.0]);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SampleWindow<F> {
    values: VecDeque<F>,
    position: usize,
}

impl<F: Float> SampleWindow<F> {
    /// Creates a zero-filled window.
    ///
    /// Returns [`SimplifyError::EmptyWindow`] for a capacity of zero.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SimplifyError::EmptyWindow);
        }
        Ok(Self {
            values: std::iter::repeat(F::zero()).take(capacity).collect(),
            position: 0,
        })
    }

    /// Number of samples in the window.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.values.len()
    }

    /// Number of slots written since creation or the last [`clear`](Self::clear).
    #[inline]
    pub fn filled(&self) -> usize {
        self.position
    }

    /// Returns `true` once every slot holds a real reading.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.position == self.values.len()
    }

    /// Records a reading.
    pub fn push(&mut self, value: F) {
        if self.is_full() {
            self.values.pop_front();
            self.values.push_back(value);
        } else {
            self.values[self.position] = value;
            self.position += 1;
        }
    }

    /// Records several readings in order.
    pub fn extend<I: IntoIterator<Item = F>>(&mut self, values: I) {
        for value in values {
            self.push(value);
        }
    }

    /// Resets every sample to zero and rewinds the write position.
    pub fn clear(&mut self) {
        self.values.iter_mut().for_each(|v| *v = F::zero());
        self.position = 0;
    }

    /// Returns the sample at `index`, if it is inside the window.
    #[inline]
    pub fn get(&self, index: usize) -> Option<F> {
        self.values.get(index).copied()
    }

    /// Iterates over the samples from oldest to newest.
    pub fn values(&self) -> impl Iterator<Item = F> + '_ {
        self.values.iter().copied()
    }

    /// Returns the window as `(index, value)` points.
    pub fn points(&self) -> Vec<Point2<F>> {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &v)| Point2::new(num_traits::cast(i).unwrap_or_else(F::nan), v))
            .collect()
    }

    /// Returns the window as a simplified polyline.
    pub fn simplified(&self, epsilon: Epsilon<F>) -> Vec<Point2<F>> {
        rdp(&self.points(), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            SampleWindow::<f64>::with_capacity(0),
            Err(SimplifyError::EmptyWindow)
        );
    }

    #[test]
    fn test_starts_zeroed() {
        let window = SampleWindow::<f64>::with_capacity(4).unwrap();
        assert_eq!(window.capacity(), 4);
        assert_eq!(window.filled(), 0);
        assert!(!window.is_full());
        assert!(window.values().all(|v| v == 0.0));
    }

    #[test]
    fn test_push_fills_from_left() {
        let mut window = SampleWindow::<f64>::with_capacity(4).unwrap();
        window.push(5.0);
        window.push(6.0);
        assert_eq!(window.values().collect::<Vec<_>>(), vec![5.0, 6.0, 0.0, 0.0]);
        assert_eq!(window.filled(), 2);
    }

    #[test]
    fn test_push_scrolls_when_full() {
        let mut window = SampleWindow::<f64>::with_capacity(3).unwrap();
        window.extend([1.0, 2.0, 3.0]);
        assert!(window.is_full());

        window.push(4.0);
        window.push(5.0);
        assert_eq!(window.values().collect::<Vec<_>>(), vec![3.0, 4.0, 5.0]);
        assert_eq!(window.capacity(), 3);
    }

    #[test]
    fn test_clear() {
        let mut window = SampleWindow::<f64>::with_capacity(3).unwrap();
        window.extend([1.0, 2.0, 3.0, 4.0]);
        window.clear();
        assert_eq!(window.filled(), 0);
        assert!(window.values().all(|v| v == 0.0));

        window.push(9.0);
        assert_eq!(window.get(0), Some(9.0));
        assert_eq!(window.get(3), None);
    }

    #[test]
    fn test_points_use_sample_index() {
        let mut window = SampleWindow::<f32>::with_capacity(3).unwrap();
        window.extend([7.0, 8.0]);
        let points = window.points();
        assert_eq!(
            points,
            vec![
                Point2::new(0.0, 7.0),
                Point2::new(1.0, 8.0),
                Point2::new(2.0, 0.0)
            ]
        );
    }

    #[test]
    fn test_simplified_flat_window() {
        let window = SampleWindow::<f64>::with_capacity(1000).unwrap();
        let simplified = window.simplified(Epsilon::new(2.0).unwrap());
        assert_eq!(
            simplified,
            vec![Point2::new(0.0, 0.0), Point2::new(999.0, 0.0)]
        );
    }

    #[test]
    fn test_simplified_keeps_breath_peak() {
        let mut window = SampleWindow::<f64>::with_capacity(5).unwrap();
        window.extend([0.0, 10.0, 40.0, 10.0, 0.0]);
        let simplified = window.simplified(Epsilon::new(2.0).unwrap());
        assert!(simplified.contains(&Point2::new(2.0, 40.0)));
        assert_eq!(simplified.first(), Some(&Point2::new(0.0, 0.0)));
        assert_eq!(simplified.last(), Some(&Point2::new(4.0, 0.0)));
    }
}
