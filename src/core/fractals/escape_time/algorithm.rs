use crate::core::actions::compute_iterations::compute_region::compute_region;
use crate::core::actions::compute_iterations::errors::ComputeIterationsError;
use crate::core::actions::compute_iterations::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::util::pixel_to_complex_coords::PlaneMapping;

/// Escape-time iteration of `z ← z^order + c` over a square pixel grid.
///
/// Produces, per pixel, either exactly `max_iterations` (the orbit stayed inside the bailout
/// radius) or a smoothed escape value in `[0, max_iterations)`.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeAlgorithm {
    viewport: Viewport,
    mapping: PlaneMapping,
    side: u32,
    params: EscapeTimeParams,
    cardioid_check: bool,
}

impl EscapeTimeAlgorithm {
    #[must_use]
    pub fn new(viewport: Viewport, side: u32, params: EscapeTimeParams) -> Self {
        Self {
            viewport,
            mapping: PlaneMapping::new(&viewport, side),
            side,
            params,
            cardioid_check: true,
        }
    }

    /// Always runs the full iteration loop, even for points in the main cardioid or period-2 bulb.
    #[must_use]
    pub fn without_cardioid_check(mut self) -> Self {
        self.cardioid_check = false;
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn params(&self) -> EscapeTimeParams {
        self.params
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.params.max_iterations()
    }

    /// Smoothed escape value for a single point of the plane.
    #[must_use]
    pub fn escape_value(&self, c: Complex) -> f64 {
        let order = self.params.order();
        let cap = self.params.max_iterations();
        let bailout = self.params.bailout_radius();

        if self.cardioid_check && order == 2 && in_main_cardioid_or_bulb(c) {
            return cap as f64;
        }

        let bailout_squared = bailout * bailout;
        let mut z = c;
        let mut k = 0;

        while k < cap && z.magnitude_squared() < bailout_squared {
            z = z.powi(order) + c;
            k += 1;
        }

        if k == cap {
            return cap as f64;
        }

        smoothed_iterations(k, z.magnitude_squared(), bailout, order, cap)
    }

    /// Writes the escape value of every pixel in `pixel_rect` into its slot of `buffer`.
    pub fn compute_region(
        &self,
        pixel_rect: PixelRect,
        buffer: &mut IterationBuffer,
    ) -> Result<(), ComputeIterationsError> {
        compute_region(self, pixel_rect, buffer)
    }
}

impl FractalAlgorithm for EscapeTimeAlgorithm {
    fn side(&self) -> usize {
        self.side as usize
    }

    #[inline]
    fn compute(&self, pixel: Point) -> f64 {
        self.escape_value(self.mapping.pixel_to_complex(pixel.y as usize, pixel.x as usize))
    }
}

/// Closed-form membership test for the main cardioid and the period-2 bulb of the order-2 set.
///
/// Points passing it never escape, so their iteration count is the cap without iterating.
#[inline]
#[must_use]
pub fn in_main_cardioid_or_bulb(c: Complex) -> bool {
    let x = c.real - 0.25;
    let y_squared = c.imag * c.imag;
    let q = x * x + y_squared;

    if 4.0 * q * (q + x) <= y_squared {
        return true;
    }

    let x = c.real + 1.0;
    x * x + y_squared <= 1.0 / 16.0
}

/// `k + 1 - ln(ln|z| / ln(bailout)) / ln(order)`, kept inside `[0, cap)`.
///
/// The upper clamp matters when `|z|` lands exactly on the bailout radius at `k = cap - 1`;
/// without it the value would equal the "never escaped" sentinel.
fn smoothed_iterations(k: u32, magnitude_squared: f64, bailout: f64, order: u32, cap: u32) -> f64 {
    let log_zn = 0.5 * magnitude_squared.ln();
    let nu = (log_zn / bailout.ln()).ln() / (order as f64).ln();
    let value = k as f64 + 1.0 - nu;

    value.clamp(0.0, largest_below(cap as f64))
}

/// The largest `f64` strictly less than a positive `value`.
fn largest_below(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}
