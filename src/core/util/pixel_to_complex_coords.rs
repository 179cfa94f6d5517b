use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Per-axis plane step for a square grid of `pixel_count` pixels per side.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapping {
    x_min: f64,
    y_max: f64,
    x_inc: f64,
    y_inc: f64,
}

impl PlaneMapping {
    #[must_use]
    pub fn new(viewport: &Viewport, pixel_count: u32) -> Self {
        Self {
            x_min: viewport.x_min(),
            y_max: viewport.y_max(),
            x_inc: viewport.x_increment(pixel_count),
            y_inc: viewport.y_increment(pixel_count),
        }
    }

    /// Maps grid position (`row`, `column`) onto the plane. Row 0 is the top edge, `y_max`.
    #[inline]
    #[must_use]
    pub fn pixel_to_complex(&self, row: usize, column: usize) -> Complex {
        Complex {
            real: self.x_min + column as f64 * self.x_inc,
            imag: self.y_max - row as f64 * self.y_inc,
        }
    }
}
