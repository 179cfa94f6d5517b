use std::num::NonZeroUsize;
use std::thread;

use tracing::debug;

use crate::core::actions::compute_iterations::errors::{ComputeIterationsError, check_sides};
use crate::core::actions::compute_iterations::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::util::row_bands::row_bands;

/// Fills the buffer with one scoped worker per row band.
///
/// Each worker owns a disjoint `&mut` slice of the buffer, so no locking is needed. Returning
/// from this function is the barrier: every band has been written, and a worker panic is
/// propagated instead of leaving a partial buffer behind.
pub fn compute_iterations_parallel<Alg>(
    algorithm: &Alg,
    buffer: &mut IterationBuffer,
    workers: NonZeroUsize,
) -> Result<(), ComputeIterationsError>
where
    Alg: FractalAlgorithm + Sync,
{
    check_sides(algorithm.side(), buffer.side())?;

    let bands = row_bands(buffer.side(), workers);
    debug!(bands = bands.len(), side = buffer.side(), "dispatching row bands");

    thread::scope(|scope| {
        for (rows, band) in buffer.split_row_bands_mut(&bands) {
            scope.spawn(move || algorithm.compute_rows(rows, band));
        }
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_iterations::compute_iterations_serial::compute_iterations_serial;
    use crate::core::data::point::Point;
    use crate::core::data::viewport::Viewport;
    use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
    use crate::core::fractals::escape_time::params::EscapeTimeParams;

    #[derive(Debug)]
    struct StubAlgorithm {
        side: usize,
    }

    impl FractalAlgorithm for StubAlgorithm {
        fn side(&self) -> usize {
            self.side
        }

        fn compute(&self, pixel: Point) -> f64 {
            (pixel.x * 1000 + pixel.y) as f64
        }
    }

    fn workers(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn test_parallel_generates_same_results_as_serial() {
        let algorithm = StubAlgorithm { side: 11 };
        let mut serial = IterationBuffer::new(11);
        let mut parallel = IterationBuffer::new(11);

        compute_iterations_serial(&algorithm, &mut serial).unwrap();
        compute_iterations_parallel(&algorithm, &mut parallel, workers(4)).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_parallel_with_more_workers_than_rows() {
        let algorithm = StubAlgorithm { side: 3 };
        let mut serial = IterationBuffer::new(3);
        let mut parallel = IterationBuffer::new(3);

        compute_iterations_serial(&algorithm, &mut serial).unwrap();
        compute_iterations_parallel(&algorithm, &mut parallel, workers(16)).unwrap();

        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_escape_time_is_independent_of_band_count() {
        let viewport = Viewport::new(-2.5, 1.0, -1.75, 1.75).unwrap();
        let params = EscapeTimeParams::new(2, 128, 2.0).unwrap();
        let algorithm = EscapeTimeAlgorithm::new(viewport, 37, params);

        let mut single = IterationBuffer::new(37);
        compute_iterations_parallel(&algorithm, &mut single, workers(1)).unwrap();

        for n in [2, 3, 5, 8, 37] {
            let mut banded = IterationBuffer::new(37);
            compute_iterations_parallel(&algorithm, &mut banded, workers(n)).unwrap();

            let identical = single
                .values()
                .iter()
                .zip(banded.values())
                .all(|(a, b)| a.to_bits() == b.to_bits());

            assert!(identical, "buffer differs with {} workers", n);
        }
    }

    #[test]
    fn test_parallel_rejects_side_mismatch() {
        let algorithm = StubAlgorithm { side: 3 };
        let mut buffer = IterationBuffer::new(4);

        assert_eq!(
            compute_iterations_parallel(&algorithm, &mut buffer, workers(2)),
            Err(ComputeIterationsError::SideMismatch {
                algorithm_side: 3,
                buffer_side: 4
            })
        );
    }
}
