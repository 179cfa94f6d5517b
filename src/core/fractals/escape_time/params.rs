use crate::core::fractals::escape_time::errors::EscapeTimeError;

/// Inputs of the escape-time recurrence `z ← z^order + c`.
///
/// Validated on construction: the smoothing step divides by `ln(order)` and `ln(bailout_radius)`,
/// so both must be strictly positive.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EscapeTimeParams {
    order: u32,
    max_iterations: u32,
    bailout_radius: f64,
}

impl EscapeTimeParams {
    pub fn new(order: u32, max_iterations: u32, bailout_radius: f64) -> Result<Self, EscapeTimeError> {
        if order < 2 {
            return Err(EscapeTimeError::OrderTooLow(order));
        }

        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        if !(bailout_radius.is_finite() && bailout_radius > 1.0) {
            return Err(EscapeTimeError::BailoutTooSmall(bailout_radius));
        }

        Ok(Self {
            order,
            max_iterations,
            bailout_radius,
        })
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn bailout_radius(&self) -> f64 {
        self.bailout_radius
    }
}
