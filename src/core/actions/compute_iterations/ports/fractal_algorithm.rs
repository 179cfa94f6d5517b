use std::ops::Range;

use crate::core::data::point::Point;

/// A per-pixel computation over a square grid, producing one iteration value per pixel.
pub trait FractalAlgorithm {
    /// Pixels per grid side.
    fn side(&self) -> usize;

    fn compute(&self, pixel: Point) -> f64;

    /// Fills `band` with the values of every pixel in `rows`, row-major.
    ///
    /// `band` must be exactly `rows.len() * side()` long; its first cell is column 0 of `rows.start`.
    fn compute_rows(&self, rows: Range<usize>, band: &mut [f64]) {
        let side = self.side();
        if side == 0 {
            return;
        }
        debug_assert_eq!(band.len(), rows.len() * side);

        for (row, cells) in rows.zip(band.chunks_exact_mut(side)) {
            for (column, cell) in cells.iter_mut().enumerate() {
                *cell = self.compute(Point {
                    x: column as i32,
                    y: row as i32,
                });
            }
        }
    }
}
