use thiserror::Error;

use crate::core::data::colour::Colour;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point::Point;

pub const BYTES_PER_PIXEL: usize = 3;

fn pixel_rect_to_buffer_size(pixel_rect: PixelRect) -> usize {
    pixel_rect.size() as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PixelBufferError {
    #[error(
        "pixel at x:{}, y:{} outside of bounds top:{}, left:{}, bottom:{}, right:{}",
        .pixel.x, .pixel.y,
        .pixel_rect.top_left().y, .pixel_rect.top_left().x,
        .pixel_rect.bottom_right().y, .pixel_rect.bottom_right().x
    )]
    PixelOutsideBounds { pixel: Point, pixel_rect: PixelRect },
    #[error("pixel rect size {pixel_rect_size} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        pixel_rect_size: usize,
        buffer_size: usize,
    },
}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB8 surface written by the colour mapping engine, row-major.
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixel_rect: PixelRect,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(pixel_rect: PixelRect) -> Self {
        Self {
            pixel_rect,
            buffer: vec![0; pixel_rect_to_buffer_size(pixel_rect)],
        }
    }

    pub fn from_data(
        pixel_rect: PixelRect,
        buffer: PixelBufferData,
    ) -> Result<Self, PixelBufferError> {
        let buffer_size = pixel_rect_to_buffer_size(pixel_rect);

        if buffer_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                pixel_rect_size: buffer_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { pixel_rect, buffer })
    }

    #[must_use]
    pub fn pixel_rect(&self) -> PixelRect {
        self.pixel_rect
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes in one row of the surface.
    #[must_use]
    pub fn stride(&self) -> usize {
        self.pixel_rect.width() as usize * BYTES_PER_PIXEL
    }

    /// Raw bytes for writers that split the surface into disjoint rows themselves.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }

    fn index_of(&self, pixel: Point) -> Result<usize, PixelBufferError> {
        if !self.pixel_rect.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                pixel_rect: self.pixel_rect,
            });
        }

        let relative_x = (pixel.x - self.pixel_rect.top_left().x) as usize;
        let relative_y = (pixel.y - self.pixel_rect.top_left().y) as usize;

        Ok((relative_y * self.pixel_rect.width() as usize + relative_x) * BYTES_PER_PIXEL)
    }

    pub fn pixel(&self, pixel: Point) -> Result<Colour, PixelBufferError> {
        let index = self.index_of(pixel)?;

        Ok(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }

    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        let index = self.index_of(pixel)?;

        write_colour(&mut self.buffer[index..index + BYTES_PER_PIXEL], colour);
        Ok(())
    }
}

/// Writes one colour into a 3-byte RGB slot.
#[inline]
pub(crate) fn write_colour(slot: &mut [u8], colour: Colour) {
    slot[0] = colour.r;
    slot[1] = colour.g;
    slot[2] = colour.b;
}
