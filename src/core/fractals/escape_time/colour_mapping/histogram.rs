use rayon::prelude::*;

use crate::core::actions::render_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render_pixel_buffer::render_pixel_buffer::{
    RenderPixelBufferError, render_pixel_buffer,
};
use crate::core::data::colour::Colour;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_time::colour_mapping::palette::Palette;

/// Upper iteration value of each palette bucket, ranked over the escaped pixels only.
///
/// Bucket `i` ends at the sorted escaped value with rank `⌊escaped·(i+1)/N⌋ − 1` (clamped to 0),
/// where `N` is the palette length. Equal neighbouring boundaries are then pulled apart: the
/// first is scaled by 0.2, any other moves to 20% of the way up from its predecessor. The result
/// is non-decreasing. Empty when no pixel escaped.
#[must_use]
pub fn histogram_boundaries(values: &[f64], max_iterations: u32, palette_len: usize) -> Vec<f64> {
    let cap = max_iterations as f64;
    let mut escaped: Vec<f64> = values.par_iter().copied().filter(|&v| v != cap).collect();

    if escaped.is_empty() || palette_len == 0 {
        return Vec::new();
    }

    escaped.par_sort_unstable_by(f64::total_cmp);

    let count = escaped.len();
    let mut boundaries: Vec<f64> = (0..palette_len)
        .map(|i| escaped[((count * (i + 1)) / palette_len).saturating_sub(1)])
        .collect();

    for i in 0..palette_len - 1 {
        if boundaries[i] == boundaries[i + 1] {
            boundaries[i] = if i == 0 {
                boundaries[i] * 0.2
            } else {
                boundaries[i - 1] + 0.2 * (boundaries[i] - boundaries[i - 1])
            };
        }
    }

    boundaries
}

/// Rank-based colour map built from one complete iteration buffer.
#[derive(Debug, Clone)]
pub struct HistogramColourMap {
    max_iterations: f64,
    palette: Palette,
    boundaries: Vec<f64>,
}

impl HistogramColourMap {
    #[must_use]
    pub fn new(iterations: &IterationBuffer, max_iterations: u32, palette: Palette) -> Self {
        let boundaries = histogram_boundaries(iterations.values(), max_iterations, palette.len());

        Self {
            max_iterations: max_iterations as f64,
            palette,
            boundaries,
        }
    }

    #[must_use]
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }
}

impl ColourMap for HistogramColourMap {
    fn map(&self, value: f64) -> Colour {
        if value == self.max_iterations {
            return Colour::BLACK;
        }

        let Some(&last) = self.boundaries.last() else {
            return self.palette.colour(0);
        };

        let bucket = self
            .boundaries
            .partition_point(|&boundary| boundary < value)
            .min(self.boundaries.len() - 1);

        if bucket == 0 {
            return self.palette.colour(0);
        }

        if value > last {
            return self.palette.colour(bucket);
        }

        let lower = self.boundaries[bucket - 1];
        let upper = self.boundaries[bucket];
        let blend = (value - lower) / (upper - lower);

        Colour::lerp(
            self.palette.colour(bucket - 1),
            self.palette.colour(bucket),
            blend,
        )
    }

    fn display_name(&self) -> &str {
        "Histogram"
    }
}

/// Histogram-equalised colouring of a complete iteration buffer into `surface`.
pub fn render_histogram(
    iterations: &IterationBuffer,
    max_iterations: u32,
    palette: &Palette,
    surface: &mut PixelBuffer,
) -> Result<(), RenderPixelBufferError> {
    let mapper = HistogramColourMap::new(iterations, max_iterations, palette.clone());

    render_pixel_buffer(iterations, &mapper, surface)
}
