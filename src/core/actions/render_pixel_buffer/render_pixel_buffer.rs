use rayon::prelude::*;
use thiserror::Error;

use crate::core::actions::render_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::{BYTES_PER_PIXEL, PixelBuffer, write_colour};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderPixelBufferError {
    #[error("surface is {width}x{height} but the iteration buffer is {side}x{side}")]
    SizeMismatch { width: u32, height: u32, side: usize },
}

/// Colours every pixel of `surface` from the matching cell of `iterations`.
///
/// Rows are mapped in parallel; each worker writes only its own row of the surface.
pub fn render_pixel_buffer<CMap: ColourMap>(
    iterations: &IterationBuffer,
    mapper: &CMap,
    surface: &mut PixelBuffer,
) -> Result<(), RenderPixelBufferError> {
    let side = iterations.side();
    let rect = surface.pixel_rect();

    if rect.width() as usize != side || rect.height() as usize != side {
        return Err(RenderPixelBufferError::SizeMismatch {
            width: rect.width(),
            height: rect.height(),
            side,
        });
    }

    if side == 0 {
        return Ok(());
    }

    let stride = surface.stride();

    surface
        .buffer_mut()
        .par_chunks_exact_mut(stride)
        .zip(iterations.values().par_chunks_exact(side))
        .for_each(|(row_bytes, row_values)| {
            for (slot, &value) in row_bytes.chunks_exact_mut(BYTES_PER_PIXEL).zip(row_values) {
                write_colour(slot, mapper.map(value));
            }
        });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::pixel_rect::PixelRect;

    #[derive(Debug)]
    struct StubColourMap {}

    impl ColourMap for StubColourMap {
        fn map(&self, value: f64) -> Colour {
            let v = value as u8;
            Colour::new(v, v, v)
        }

        fn display_name(&self) -> &str {
            "Stub"
        }
    }

    fn iterations(side: usize, values: &[f64]) -> IterationBuffer {
        let mut buffer = IterationBuffer::new(side);
        buffer.as_mut_slice().copy_from_slice(values);
        buffer
    }

    #[test]
    fn test_renders_pixel_buffer_row_major() {
        let input = iterations(2, &[1.0, 2.0, 3.0, 4.0]);
        let mut surface = PixelBuffer::new(PixelRect::square(2).unwrap());

        render_pixel_buffer(&input, &StubColourMap {}, &mut surface).unwrap();

        assert_eq!(
            surface.buffer(),
            &vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]
        );
    }

    #[test]
    fn test_size_mismatch_returns_err() {
        let input = iterations(2, &[1.0, 2.0, 3.0, 4.0]);
        let mut surface = PixelBuffer::new(PixelRect::square(3).unwrap());

        assert_eq!(
            render_pixel_buffer(&input, &StubColourMap {}, &mut surface),
            Err(RenderPixelBufferError::SizeMismatch {
                width: 3,
                height: 3,
                side: 2
            })
        );
    }

    #[test]
    fn test_boxed_colour_map_delegates() {
        let boxed: Box<dyn ColourMap + Send> = Box::new(StubColourMap {});

        assert_eq!(boxed.map(7.9), Colour::new(7, 7, 7));
        assert_eq!(boxed.display_name(), "Stub");
    }
}
