use thiserror::Error;

use crate::config::ConfigError;
use crate::core::actions::compute_iterations::errors::ComputeIterationsError;
use crate::core::actions::render_pixel_buffer::render_pixel_buffer::RenderPixelBufferError;
use crate::core::data::pixel_rect::PixelRectError;
use crate::core::fractals::escape_time::errors::EscapeTimeError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExplorerError {
    #[error("no complete iteration buffer for the current view; recalculate first")]
    NotComputed,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    EscapeTime(#[from] EscapeTimeError),
    #[error(transparent)]
    PixelRect(#[from] PixelRectError),
    #[error(transparent)]
    ComputeIterations(#[from] ComputeIterationsError),
    #[error(transparent)]
    Render(#[from] RenderPixelBufferError),
}
