use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EscapeTimeError {
    #[error("polynomial order must be at least 2, got {0}")]
    OrderTooLow(u32),
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
    #[error("bailout radius must be a finite value greater than 1, got {0}")]
    BailoutTooSmall(f64),
}
