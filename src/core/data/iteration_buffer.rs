use std::ops::Range;

/// Dense row-major grid of smoothed iteration values, `side × side` cells.
///
/// A cell holds either exactly the iteration cap (the orbit never escaped) or a
/// smoothed escape value strictly below it.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationBuffer {
    side: usize,
    values: Vec<f64>,
}

impl IterationBuffer {
    #[must_use]
    pub fn new(side: usize) -> Self {
        Self {
            side,
            values: vec![0.0; side * side],
        }
    }

    #[must_use]
    pub fn side(&self) -> usize {
        self.side
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[row * self.side + column]
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Splits the buffer into one mutable slice per row band.
    ///
    /// `bands` must be contiguous, ascending and cover every row exactly once, as produced by
    /// [`row_bands`](crate::core::util::row_bands::row_bands). Each slice starts at the
    /// canonical offset of the band's first row.
    pub fn split_row_bands_mut(&mut self, bands: &[Range<usize>]) -> Vec<(Range<usize>, &mut [f64])> {
        let side = self.side;
        let mut remaining: &mut [f64] = &mut self.values;
        let mut slices = Vec::with_capacity(bands.len());

        for band in bands {
            let (head, tail) = std::mem::take(&mut remaining).split_at_mut(band.len() * side);
            slices.push((band.clone(), head));
            remaining = tail;
        }

        slices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_is_square() {
        let buffer = IterationBuffer::new(5);

        assert_eq!(buffer.side(), 5);
        assert_eq!(buffer.values().len(), 25);
    }

    #[test]
    fn test_split_row_bands_covers_buffer_without_overlap() {
        let mut buffer = IterationBuffer::new(4);
        let bands = vec![0..1, 1..2, 2..4];

        for (band, slice) in buffer.split_row_bands_mut(&bands) {
            assert_eq!(slice.len(), band.len() * 4);
            slice.fill(band.start as f64);
        }

        assert_eq!(buffer.value(0, 3), 0.0);
        assert_eq!(buffer.value(1, 0), 1.0);
        assert_eq!(buffer.value(2, 0), 2.0);
        assert_eq!(buffer.value(3, 3), 2.0);
    }
}
