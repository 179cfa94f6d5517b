use thiserror::Error;

use crate::core::data::complex::Complex;

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("viewport must have positive, finite extent: x {x_min}..{x_max}, y {y_min}..{y_max}")]
    Degenerate {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
}

/// Region of the complex plane mapped onto the square pixel grid.
///
/// Row 0 of the grid sits at `y_max`: the imaginary axis runs opposite to the row index.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Viewport {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self, ViewportError> {
        let finite = [x_min, x_max, y_min, y_max].iter().all(|v| v.is_finite());

        if !finite || x_max <= x_min || y_max <= y_min {
            return Err(ViewportError::Degenerate {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }

        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    #[must_use]
    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    #[must_use]
    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    #[must_use]
    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    #[must_use]
    pub fn y_max(&self) -> f64 {
        self.y_max
    }

    #[must_use]
    pub fn x_width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn y_width(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// Real-axis distance between neighbouring pixel columns.
    #[must_use]
    pub fn x_increment(&self, pixel_count: u32) -> f64 {
        self.x_width() / pixel_count as f64
    }

    /// Imaginary-axis distance between neighbouring pixel rows.
    #[must_use]
    pub fn y_increment(&self, pixel_count: u32) -> f64 {
        self.y_width() / pixel_count as f64
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex {
            real: self.x_min + self.x_width() / 2.0,
            imag: self.y_min + self.y_width() / 2.0,
        }
    }
}
