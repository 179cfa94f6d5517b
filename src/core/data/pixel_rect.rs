use thiserror::Error;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum PixelRectError {
    #[error("pixel rect size must be positive: {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Inclusive rectangle of pixels, `top_left` and `bottom_right` both inside it.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PixelRect {
    top_left: Point,
    bottom_right: Point,
}

impl PixelRect {
    pub fn new(top_left: Point, bottom_right: Point) -> Result<Self, PixelRectError> {
        let width = (bottom_right.x as i64) - (top_left.x as i64) + 1;
        let height = (bottom_right.y as i64) - (top_left.y as i64) + 1;

        if width < 1 || height < 1 {
            return Err(PixelRectError::InvalidSize { width, height });
        }

        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// The `side × side` rect anchored at the origin.
    pub fn square(side: u32) -> Result<Self, PixelRectError> {
        let last = side as i64 - 1;

        if last < 0 {
            return Err(PixelRectError::InvalidSize {
                width: side as i64,
                height: side as i64,
            });
        }

        Self::new(
            Point { x: 0, y: 0 },
            Point {
                x: last as i32,
                y: last as i32,
            },
        )
    }

    #[must_use]
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        (self.bottom_right.x - self.top_left.x + 1) as u32
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        (self.bottom_right.y - self.top_left.y + 1) as u32
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        self.top_left.x <= point.x
            && self.top_left.y <= point.y
            && self.bottom_right.x >= point.x
            && self.bottom_right.y >= point.y
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }
}
