use thiserror::Error;

use crate::core::data::pixel_rect::PixelRect;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComputeIterationsError {
    #[error("algorithm grid side {algorithm_side} does not match buffer side {buffer_side}")]
    SideMismatch {
        algorithm_side: usize,
        buffer_side: usize,
    },
    #[error(
        "region top-left ({}, {}) bottom-right ({}, {}) lies outside the {side}x{side} grid",
        .pixel_rect.top_left().x, .pixel_rect.top_left().y,
        .pixel_rect.bottom_right().x, .pixel_rect.bottom_right().y
    )]
    RegionOutsideGrid { pixel_rect: PixelRect, side: usize },
}

pub(crate) fn check_sides(
    algorithm_side: usize,
    buffer_side: usize,
) -> Result<(), ComputeIterationsError> {
    if algorithm_side != buffer_side {
        return Err(ComputeIterationsError::SideMismatch {
            algorithm_side,
            buffer_side,
        });
    }

    Ok(())
}
