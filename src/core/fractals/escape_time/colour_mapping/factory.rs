use crate::core::actions::render_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render_pixel_buffer::render_pixel_buffer::{
    RenderPixelBufferError, render_pixel_buffer,
};
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_time::colour_mapping::histogram::HistogramColourMap;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMappingMode;
use crate::core::fractals::escape_time::colour_mapping::modulo::ModuloColourMap;
use crate::core::fractals::escape_time::colour_mapping::palette::Palette;

/// Builds the colour map for `mode`. Histogram maps rank the values of `iterations`, so the
/// buffer must be complete.
#[must_use]
pub fn colour_map_factory(
    mode: ColourMappingMode,
    iterations: &IterationBuffer,
    max_iterations: u32,
    palette: &Palette,
) -> Box<dyn ColourMap + Send> {
    match mode {
        ColourMappingMode::Histogram => Box::new(HistogramColourMap::new(
            iterations,
            max_iterations,
            palette.clone(),
        )),
        ColourMappingMode::Modulo { blend_cycle } => Box::new(ModuloColourMap::new(
            max_iterations,
            palette.clone(),
            blend_cycle,
        )),
    }
}

/// Colours `surface` with whichever algorithm `mode` selects.
pub fn render(
    mode: ColourMappingMode,
    iterations: &IterationBuffer,
    max_iterations: u32,
    palette: &Palette,
    surface: &mut PixelBuffer,
) -> Result<(), RenderPixelBufferError> {
    let mapper = colour_map_factory(mode, iterations, max_iterations, palette);

    render_pixel_buffer(iterations, &mapper, surface)
}
