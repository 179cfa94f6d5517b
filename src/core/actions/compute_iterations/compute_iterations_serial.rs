use crate::core::actions::compute_iterations::errors::{ComputeIterationsError, check_sides};
use crate::core::actions::compute_iterations::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_buffer::IterationBuffer;

/// Fills the whole buffer on the calling thread.
pub fn compute_iterations_serial<Alg: FractalAlgorithm>(
    algorithm: &Alg,
    buffer: &mut IterationBuffer,
) -> Result<(), ComputeIterationsError> {
    check_sides(algorithm.side(), buffer.side())?;

    let rows = 0..buffer.side();
    algorithm.compute_rows(rows, buffer.as_mut_slice());

    Ok(())
}
