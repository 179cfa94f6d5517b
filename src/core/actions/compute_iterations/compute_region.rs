use crate::core::actions::compute_iterations::errors::{ComputeIterationsError, check_sides};
use crate::core::actions::compute_iterations::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

/// Computes every pixel of `pixel_rect` and stores it at its canonical row-major offset.
///
/// Offsets outside `pixel_rect` are never touched, so calls over disjoint rects of the same
/// grid produce the same buffer in any order.
pub fn compute_region<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    pixel_rect: PixelRect,
    buffer: &mut IterationBuffer,
) -> Result<(), ComputeIterationsError> {
    let side = buffer.side();
    check_sides(algorithm.side(), side)?;

    let top_left = pixel_rect.top_left();
    let bottom_right = pixel_rect.bottom_right();

    let inside = top_left.x >= 0
        && top_left.y >= 0
        && (bottom_right.x as i64) < side as i64
        && (bottom_right.y as i64) < side as i64;

    if !inside {
        return Err(ComputeIterationsError::RegionOutsideGrid { pixel_rect, side });
    }

    let cells = buffer.as_mut_slice();

    for y in top_left.y..=bottom_right.y {
        let row_offset = y as usize * side;

        for x in top_left.x..=bottom_right.x {
            cells[row_offset + x as usize] = algorithm.compute(Point { x, y });
        }
    }

    Ok(())
}
