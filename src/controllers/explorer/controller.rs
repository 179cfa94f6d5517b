use std::fmt::Write as _;
use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use tracing::{debug, info, info_span};

use crate::config::ExplorerConfig;
use crate::controllers::explorer::errors::ExplorerError;
use crate::core::actions::compute_iterations::compute_iterations_parallel::compute_iterations_parallel;
use crate::core::data::iteration_buffer::IterationBuffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::escape_time::colour_mapping::factory::render;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMappingMode;
use crate::core::fractals::escape_time::colour_mapping::palette::Palette;
use crate::core::fractals::escape_time::colour_mapping::palettes::PaletteKind;
use crate::core::fractals::escape_time::params::EscapeTimeParams;

/// Iteration caps are never lowered below the palette length plus this margin.
const MIN_ITERATIONS_OVER_PALETTE: u32 = 5;

/// Owns the view state and both buffers, and decides when each engine runs.
///
/// View changes (viewport, order, cap) mark the iteration buffer stale and require a
/// [`recalculate`](Self::recalculate). Colour changes (palette, mode, blend cycle) only need a
/// [`redraw`](Self::redraw) of the existing buffer.
#[derive(Debug)]
pub struct ExplorerController {
    config: ExplorerConfig,
    workers: NonZeroUsize,
    viewport: Viewport,
    order: u32,
    max_iterations: u32,
    palette_kind: PaletteKind,
    palette: Palette,
    mode: ColourMappingMode,
    blend_cycle: f64,
    iterations: IterationBuffer,
    computed: bool,
    pixel_buffer: PixelBuffer,
}

impl ExplorerController {
    pub fn new(config: ExplorerConfig) -> Result<Self, ExplorerError> {
        config.validate()?;

        let workers = config.worker_count()?;
        let pixel_rect = PixelRect::square(config.pixel_width)?;
        let blend_cycle = match config.default_mode {
            ColourMappingMode::Histogram => config.default_blend_cycle,
            ColourMappingMode::Modulo { blend_cycle } => blend_cycle,
        };

        Ok(Self {
            config,
            workers,
            viewport: config.default_viewport,
            order: config.default_order,
            max_iterations: config.default_max_iterations,
            palette_kind: config.default_palette,
            palette: config.default_palette.palette(),
            mode: config.default_mode,
            blend_cycle,
            iterations: IterationBuffer::new(config.pixel_width as usize),
            computed: false,
            pixel_buffer: PixelBuffer::new(pixel_rect),
        })
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn order(&self) -> u32 {
        self.order
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn palette_kind(&self) -> PaletteKind {
        self.palette_kind
    }

    /// The active mode, with the current blend cycle when in modulo mode.
    #[must_use]
    pub fn mode(&self) -> ColourMappingMode {
        match self.mode {
            ColourMappingMode::Histogram => ColourMappingMode::Histogram,
            ColourMappingMode::Modulo { .. } => ColourMappingMode::Modulo {
                blend_cycle: self.blend_cycle,
            },
        }
    }

    #[must_use]
    pub fn blend_cycle(&self) -> f64 {
        self.blend_cycle
    }

    /// The iteration buffer, once it is complete for the current view.
    #[must_use]
    pub fn iterations(&self) -> Option<&IterationBuffer> {
        self.computed.then_some(&self.iterations)
    }

    #[must_use]
    pub fn pixel_buffer(&self) -> &PixelBuffer {
        &self.pixel_buffer
    }

    #[must_use]
    pub fn needs_recalculate(&self) -> bool {
        !self.computed
    }

    /// Recomputes the iteration buffer for the current view across all workers.
    ///
    /// The buffer only counts as complete once every row band has been written; a failed
    /// run leaves the controller refusing to redraw.
    pub fn recalculate(&mut self) -> Result<Duration, ExplorerError> {
        let span = info_span!(
            "recalculate",
            side = self.config.pixel_width,
            workers = self.workers.get(),
            order = self.order,
            max_iterations = self.max_iterations,
        );
        let _guard = span.enter();

        self.computed = false;

        let params = EscapeTimeParams::new(self.order, self.max_iterations, self.config.bailout_radius)?;
        let algorithm = EscapeTimeAlgorithm::new(self.viewport, self.config.pixel_width, params);

        let start = Instant::now();
        compute_iterations_parallel(&algorithm, &mut self.iterations, self.workers)?;
        let duration = start.elapsed();

        self.computed = true;
        info!(?duration, "iteration buffer complete");

        Ok(duration)
    }

    /// Colours the pixel buffer from the complete iteration buffer.
    pub fn redraw(&mut self) -> Result<Duration, ExplorerError> {
        if !self.computed {
            return Err(ExplorerError::NotComputed);
        }

        let mode = self.mode();
        let span = info_span!("redraw", mode = mode.display_name(), palette = self.palette_kind.display_name());
        let _guard = span.enter();

        let start = Instant::now();
        render(mode, &self.iterations, self.max_iterations, &self.palette, &mut self.pixel_buffer)?;
        let duration = start.elapsed();

        info!(?duration, "pixel buffer coloured");

        Ok(duration)
    }

    /// Recalculates if the view changed since the last run, then redraws.
    pub fn refresh(&mut self) -> Result<&PixelBuffer, ExplorerError> {
        if !self.computed {
            self.recalculate()?;
        }

        self.redraw()?;

        Ok(&self.pixel_buffer)
    }

    /// Restores the default viewport, iteration cap and blend cycle.
    pub fn reset_view(&mut self) {
        self.viewport = self.config.default_viewport;
        self.max_iterations = self.config.default_max_iterations;
        self.blend_cycle = self.config.default_blend_cycle;
        self.computed = false;
        debug!("view reset to defaults");
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        if viewport != self.viewport {
            self.viewport = viewport;
            self.computed = false;
        }
    }

    pub fn set_order(&mut self, order: u32) -> Result<(), ExplorerError> {
        EscapeTimeParams::new(order, self.max_iterations, self.config.bailout_radius)?;

        if order != self.order {
            self.order = order;
            self.computed = false;
        }

        Ok(())
    }

    /// Sets the iteration cap, raised to at least the palette length plus five.
    /// Returns the cap actually applied.
    pub fn set_max_iterations(&mut self, max_iterations: u32) -> u32 {
        let floor = u32::try_from(self.palette.len())
            .unwrap_or(u32::MAX)
            .saturating_add(MIN_ITERATIONS_OVER_PALETTE);
        let max_iterations = max_iterations.max(floor);

        if max_iterations != self.max_iterations {
            self.max_iterations = max_iterations;
            self.computed = false;
        }

        max_iterations
    }

    pub fn set_palette(&mut self, palette_kind: PaletteKind) {
        self.palette_kind = palette_kind;
        self.palette = palette_kind.palette();
    }

    /// Selects the mapping mode. A modulo mode also sets the blend cycle.
    pub fn set_mode(&mut self, mode: ColourMappingMode) {
        if let ColourMappingMode::Modulo { blend_cycle } = mode {
            self.blend_cycle = self.floor_blend_cycle(blend_cycle);
        }

        self.mode = mode;
    }

    /// Multiplies (`up`) or divides the blend cycle by the scroll factor.
    pub fn scale_blend_cycle(&mut self, up: bool) -> f64 {
        let scaled = if up {
            self.blend_cycle * self.config.blend_cycle_scroll
        } else {
            self.blend_cycle / self.config.blend_cycle_scroll
        };

        self.blend_cycle = self.floor_blend_cycle(scaled);
        self.blend_cycle
    }

    /// Multi-line dump of the view bounds, palette, mode and iteration settings.
    #[must_use]
    pub fn state_report(&self) -> String {
        let viewport = self.viewport;
        let mut report = String::new();

        // Writing into a String cannot fail.
        let _ = writeln!(report, "{}", "-".repeat(70));
        let _ = writeln!(
            report,
            "x_min = {:>25}, x_max = {:>25}",
            viewport.x_min(),
            viewport.x_max()
        );
        let _ = writeln!(
            report,
            "y_min = {:>25}, y_max = {:>25}",
            viewport.y_min(),
            viewport.y_max()
        );
        let _ = writeln!(report, "x_width = {:>23}", viewport.x_width());
        let _ = writeln!(report, "y_width = {:>23}", viewport.y_width());
        let _ = writeln!(report, "current palette: {}", self.palette_kind);
        let _ = writeln!(report, "{}", self.palette);
        let _ = writeln!(report, "mode           = {}", self.mode.display_name());
        let _ = writeln!(report, "order          = {}", self.order);
        let _ = writeln!(report, "max iterations = {}", self.max_iterations);
        let _ = write!(report, "blend cycle    = {}", self.blend_cycle);

        report
    }

    fn floor_blend_cycle(&self, blend_cycle: f64) -> f64 {
        let min = self.config.min_blend_cycle;

        if blend_cycle >= min { blend_cycle } else { min }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            pixel_width: 4,
            workers: 3,
            default_viewport: Viewport::new(-2.5, 1.0, -1.5, 1.5).unwrap(),
            default_max_iterations: 100,
            ..ExplorerConfig::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ExplorerConfig {
            workers: 0,
            ..small_config()
        };

        assert!(matches!(
            ExplorerController::new(config),
            Err(ExplorerError::Config(_))
        ));
    }

    #[test]
    fn test_redraw_before_recalculate_is_refused() {
        let mut controller = ExplorerController::new(small_config()).unwrap();

        assert!(controller.needs_recalculate());
        assert!(controller.iterations().is_none());
        assert_eq!(controller.redraw(), Err(ExplorerError::NotComputed));
    }

    #[test]
    fn test_four_by_four_view() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        controller.recalculate().unwrap();

        let iterations = controller.iterations().unwrap();

        // Corner pixel sits at (-2.5, 1.5), outside the escape radius after one step.
        let corner = iterations.value(0, 0);
        assert!((0.0..100.0).contains(&corner), "corner = {corner}");

        // Row 2, column 3 maps to (0.125, 0), inside the main cardioid.
        assert_eq!(iterations.value(2, 3), 100.0);

        for &value in iterations.values() {
            assert!((0.0..=100.0).contains(&value));
        }

        controller.redraw().unwrap();
        let pixels = controller.pixel_buffer();
        assert_eq!(pixels.pixel(Point { x: 3, y: 2 }).unwrap(), Colour::BLACK);
    }

    #[test]
    fn test_worker_count_does_not_change_result() {
        let mut serial = ExplorerController::new(ExplorerConfig {
            pixel_width: 33,
            workers: 1,
            ..small_config()
        })
        .unwrap();
        let mut banded = ExplorerController::new(ExplorerConfig {
            pixel_width: 33,
            workers: 8,
            ..small_config()
        })
        .unwrap();

        serial.refresh().unwrap();
        banded.refresh().unwrap();

        assert_eq!(serial.iterations(), banded.iterations());
        assert_eq!(serial.pixel_buffer().buffer(), banded.pixel_buffer().buffer());
    }

    #[test]
    fn test_view_changes_mark_buffer_stale() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        controller.recalculate().unwrap();

        controller.set_viewport(Viewport::new(-1.0, 1.0, -1.0, 1.0).unwrap());
        assert!(controller.needs_recalculate());
        controller.recalculate().unwrap();

        controller.set_order(3).unwrap();
        assert!(controller.needs_recalculate());
        controller.recalculate().unwrap();

        controller.set_max_iterations(400);
        assert!(controller.needs_recalculate());
    }

    #[test]
    fn test_colour_changes_keep_buffer() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        controller.recalculate().unwrap();

        controller.set_palette(PaletteKind::Fire);
        controller.set_mode(ColourMappingMode::modulo(3.0));
        controller.scale_blend_cycle(true);

        assert!(!controller.needs_recalculate());
        assert!(controller.redraw().is_ok());
    }

    #[test]
    fn test_set_order_rejects_low_order() {
        let mut controller = ExplorerController::new(small_config()).unwrap();

        assert_eq!(
            controller.set_order(1),
            Err(ExplorerError::EscapeTime(
                crate::core::fractals::escape_time::errors::EscapeTimeError::OrderTooLow(1)
            ))
        );
        assert_eq!(controller.order(), 2);
    }

    #[test]
    fn test_max_iterations_floored_above_palette_length() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        controller.set_palette(PaletteKind::Fire);

        assert_eq!(controller.set_max_iterations(3), 11);
        assert_eq!(controller.max_iterations(), 11);
        assert_eq!(controller.set_max_iterations(512), 512);
    }

    #[test]
    fn test_blend_cycle_scaling_is_floored() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        controller.set_mode(ColourMappingMode::modulo(1.0));

        let up = controller.scale_blend_cycle(true);
        assert!((up - 1.1).abs() < 1e-12);

        controller.scale_blend_cycle(false);
        let down = controller.scale_blend_cycle(false);
        assert_eq!(down, 1.0);
        assert_eq!(controller.mode(), ColourMappingMode::Modulo { blend_cycle: 1.0 });
    }

    #[test]
    fn test_reset_view_restores_defaults() {
        let mut controller = ExplorerController::new(small_config()).unwrap();
        controller.set_viewport(Viewport::new(-0.5, 0.5, -0.5, 0.5).unwrap());
        controller.set_max_iterations(1000);
        controller.set_mode(ColourMappingMode::modulo(4.0));
        controller.set_palette(PaletteKind::Ocean);

        controller.reset_view();

        assert_eq!(controller.viewport(), small_config().default_viewport);
        assert_eq!(controller.max_iterations(), 100);
        assert_eq!(controller.blend_cycle(), 1.0);
        assert_eq!(controller.palette_kind(), PaletteKind::Ocean);
        assert!(controller.needs_recalculate());
    }

    #[test]
    fn test_state_report_lists_view_and_palette() {
        let controller = ExplorerController::new(small_config()).unwrap();
        let report = controller.state_report();

        assert!(report.contains("x_min = "));
        assert!(report.contains("-2.5"));
        assert!(report.contains("x_width = "));
        assert!(report.contains("3.5"));
        assert!(report.contains("{0x00, 0x07, 0x64},"));
        assert!(report.contains("mode           = Histogram"));
        assert!(report.contains("max iterations = 100"));
        assert!(report.ends_with("blend cycle    = 1"));
    }
}
