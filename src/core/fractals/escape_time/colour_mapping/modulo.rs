use crate::core::actions::render_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::actions::render_pixel_buffer::render_pixel_buffer::{
    RenderPixelBufferError, render_pixel_buffer,
};
use crate::core::data::colour::Colour;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::fractals::escape_time::colour_mapping::kinds::clamp_blend_cycle;
use crate::core::fractals::escape_time::colour_mapping::palette::Palette;

/// Cyclic colour map: the colour depends only on the value modulo `palette.len() * blend_cycle`.
#[derive(Debug, Clone)]
pub struct ModuloColourMap {
    max_iterations: f64,
    palette: Palette,
    blend_cycle: f64,
}

impl ModuloColourMap {
    /// `blend_cycle` below 1 is raised to 1.
    #[must_use]
    pub fn new(max_iterations: u32, palette: Palette, blend_cycle: f64) -> Self {
        Self {
            max_iterations: max_iterations as f64,
            palette,
            blend_cycle: clamp_blend_cycle(blend_cycle),
        }
    }

    #[must_use]
    pub fn blend_cycle(&self) -> f64 {
        self.blend_cycle
    }
}

impl ColourMap for ModuloColourMap {
    fn map(&self, value: f64) -> Colour {
        if value == self.max_iterations {
            return Colour::BLACK;
        }

        let len = self.palette.len();
        let cycle_pos = value.rem_euclid(self.blend_cycle);
        let step = ((value - cycle_pos) / self.blend_cycle).round();
        let bucket = (step.rem_euclid(len as f64) as usize).min(len - 1);
        let bucket2 = (bucket + 1) % len;
        let blend = cycle_pos / self.blend_cycle;

        Colour::lerp(self.palette.colour(bucket), self.palette.colour(bucket2), blend)
    }

    fn display_name(&self) -> &str {
        "Modulo"
    }
}

/// Cyclic colouring of a complete iteration buffer into `surface`.
pub fn render_modulo(
    iterations: &IterationBuffer,
    max_iterations: u32,
    palette: &Palette,
    blend_cycle: f64,
    surface: &mut PixelBuffer,
) -> Result<(), RenderPixelBufferError> {
    let mapper = ModuloColourMap::new(max_iterations, palette.clone(), blend_cycle);

    render_pixel_buffer(iterations, &mapper, surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel_rect::PixelRect;
    use crate::core::data::point::Point;

    const RED: Colour = Colour::new(255, 0, 0);
    const GREEN: Colour = Colour::new(0, 255, 0);
    const BLUE: Colour = Colour::new(0, 0, 255);

    fn rgb() -> Palette {
        Palette::new(vec![RED, GREEN, BLUE]).unwrap()
    }

    fn channels_close(a: Colour, b: Colour) -> bool {
        let close = |x: u8, y: u8| x.abs_diff(y) <= 1;
        close(a.r, b.r) && close(a.g, b.g) && close(a.b, b.b)
    }

    #[test]
    fn test_capped_pixels_are_black() {
        let map = ModuloColourMap::new(100, rgb(), 1.0);

        assert_eq!(map.map(100.0), Colour::BLACK);
    }

    #[test]
    fn test_whole_steps_land_on_palette_entries() {
        let map = ModuloColourMap::new(100, rgb(), 1.0);

        assert_eq!(map.map(0.0), RED);
        assert_eq!(map.map(1.0), GREEN);
        assert_eq!(map.map(2.0), BLUE);
        assert_eq!(map.map(3.0), RED);
    }

    #[test]
    fn test_last_entry_blends_back_into_first() {
        let map = ModuloColourMap::new(100, rgb(), 1.0);

        assert_eq!(map.map(2.5), Colour::new(127, 0, 127));
    }

    #[test]
    fn test_blend_cycle_stretches_each_step() {
        let map = ModuloColourMap::new(100, rgb(), 4.0);

        assert_eq!(map.map(0.0), RED);
        assert_eq!(map.map(2.0), Colour::new(127, 127, 0));
        assert_eq!(map.map(4.0), GREEN);
        assert_eq!(map.map(12.0), RED);
    }

    #[test]
    fn test_blend_cycle_below_one_is_raised() {
        assert_eq!(ModuloColourMap::new(100, rgb(), 0.5).blend_cycle(), 1.0);
    }

    #[test]
    fn test_output_is_periodic_in_palette_len_times_blend_cycle() {
        for blend_cycle in [1.0, 2.0, 3.5] {
            let map = ModuloColourMap::new(10_000, rgb(), blend_cycle);
            let period = 3.0 * blend_cycle;

            for i in 0..200 {
                let value = i as f64 * 0.37;
                let shifted = value + period;

                assert!(
                    channels_close(map.map(value), map.map(shifted)),
                    "{} and {} differ with blend cycle {}",
                    value,
                    shifted,
                    blend_cycle
                );
            }
        }
    }

    #[test]
    fn test_exact_periodicity_for_representable_values() {
        let map = ModuloColourMap::new(10_000, rgb(), 2.0);

        assert_eq!(map.map(3.5), map.map(9.5));
        assert_eq!(map.map(3.5), map.map(15.5));
    }

    #[test]
    fn test_single_colour_palette_has_no_blend_contribution() {
        let colour = Colour::new(12, 34, 56);
        let map = ModuloColourMap::new(100, Palette::new(vec![colour]).unwrap(), 3.0);

        for value in [0.0, 0.5, 1.7, 2.999, 42.25, 99.9] {
            assert_eq!(map.map(value), colour);
        }
        assert_eq!(map.map(100.0), Colour::BLACK);
    }

    #[test]
    fn test_render_modulo_writes_every_pixel() {
        let mut input = IterationBuffer::new(2);
        input.as_mut_slice().copy_from_slice(&[0.0, 1.0, 2.0, 20.0]);
        let mut surface = PixelBuffer::new(PixelRect::square(2).unwrap());

        render_modulo(&input, 20, &rgb(), 1.0, &mut surface).unwrap();

        assert_eq!(surface.pixel(Point { x: 0, y: 0 }).unwrap(), RED);
        assert_eq!(surface.pixel(Point { x: 1, y: 0 }).unwrap(), GREEN);
        assert_eq!(surface.pixel(Point { x: 0, y: 1 }).unwrap(), BLUE);
        assert_eq!(surface.pixel(Point { x: 1, y: 1 }).unwrap(), Colour::BLACK);
    }
}
