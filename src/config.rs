use std::num::NonZeroUsize;

use thiserror::Error;

use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::escape_time::colour_mapping::kinds::{
    ColourMappingMode, MIN_BLEND_CYCLE,
};
use crate::core::fractals::escape_time::colour_mapping::palettes::PaletteKind;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::params::EscapeTimeParams;
use crate::core::util::row_bands::available_workers;

pub const DEFAULT_PIXEL_WIDTH: u32 = 800;
pub const DEFAULT_MAX_ITERATIONS: u32 = 256;
pub const DEFAULT_BAILOUT_RADIUS: f64 = 2.0;
pub const DEFAULT_ORDER: u32 = 2;
pub const DEFAULT_BLEND_CYCLE: f64 = 1.0;
pub const DEFAULT_BLEND_CYCLE_SCROLL: f64 = 1.1;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("pixel width must be between 1 and {max}, got {width}", max = i32::MAX)]
    InvalidPixelWidth { width: u32 },
    #[error("worker count must be greater than zero")]
    ZeroWorkers,
    #[error("blend cycle must be at least {min}, got {blend_cycle}")]
    BlendCycleTooSmall { blend_cycle: f64, min: f64 },
    #[error("blend cycle scroll factor must be a finite value greater than 1, got {0}")]
    InvalidBlendCycleScroll(f64),
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    EscapeTime(#[from] EscapeTimeError),
}

pub(crate) fn default_viewport() -> Viewport {
    Viewport::new(-2.5, 1.0, -1.75, 1.75).expect("default viewport is valid")
}

/// Startup settings for the explorer. The `default_*` values are what a view reset returns to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplorerConfig {
    pub pixel_width: u32,
    pub workers: usize,
    pub default_viewport: Viewport,
    pub default_max_iterations: u32,
    pub bailout_radius: f64,
    pub default_order: u32,
    pub default_palette: PaletteKind,
    pub default_mode: ColourMappingMode,
    pub default_blend_cycle: f64,
    pub blend_cycle_scroll: f64,
    pub min_blend_cycle: f64,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            workers: available_workers().get(),
            default_viewport: default_viewport(),
            default_max_iterations: DEFAULT_MAX_ITERATIONS,
            bailout_radius: DEFAULT_BAILOUT_RADIUS,
            default_order: DEFAULT_ORDER,
            default_palette: PaletteKind::default(),
            default_mode: ColourMappingMode::default(),
            default_blend_cycle: DEFAULT_BLEND_CYCLE,
            blend_cycle_scroll: DEFAULT_BLEND_CYCLE_SCROLL,
            min_blend_cycle: MIN_BLEND_CYCLE,
        }
    }
}

impl ExplorerConfig {
    /// Rejects settings the escape-time and colour mapping engines cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pixel_width == 0 || self.pixel_width > i32::MAX as u32 {
            return Err(ConfigError::InvalidPixelWidth {
                width: self.pixel_width,
            });
        }

        self.worker_count()?;
        self.default_params()?;

        let min = self.min_blend_cycle.max(MIN_BLEND_CYCLE);
        let blend_cycles = [self.default_blend_cycle, self.mode_blend_cycle()];
        if let Some(&blend_cycle) = blend_cycles.iter().find(|&&b| b.is_nan() || b < min) {
            return Err(ConfigError::BlendCycleTooSmall { blend_cycle, min });
        }

        if !self.blend_cycle_scroll.is_finite() || self.blend_cycle_scroll <= 1.0 {
            return Err(ConfigError::InvalidBlendCycleScroll(self.blend_cycle_scroll));
        }

        Ok(())
    }

    pub fn worker_count(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.workers).ok_or(ConfigError::ZeroWorkers)
    }

    /// Escape-time parameters for the default order and iteration cap.
    pub fn default_params(&self) -> Result<EscapeTimeParams, ConfigError> {
        Ok(EscapeTimeParams::new(
            self.default_order,
            self.default_max_iterations,
            self.bailout_radius,
        )?)
    }

    fn mode_blend_cycle(&self) -> f64 {
        match self.default_mode {
            ColourMappingMode::Histogram => self.default_blend_cycle,
            ColourMappingMode::Modulo { blend_cycle } => blend_cycle,
        }
    }
}
