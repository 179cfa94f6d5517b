//! Command-line front end: one frame per invocation, written as a PPM file.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{ConfigError, ExplorerConfig};
use crate::controllers::explorer::controller::ExplorerController;
use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMappingMode;
use crate::core::fractals::escape_time::colour_mapping::palettes::PaletteKind;
use crate::presenters::file::ppm::PpmFilePresenter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    Histogram,
    Modulo,
}

#[derive(Parser, Debug)]
#[command(name = "mandelbrot_explorer")]
#[command(version, about = "Escape-time fractal renderer", long_about = None)]
pub struct Cli {
    /// Side of the square image in pixels
    #[arg(long, value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Worker threads for the iteration phase (default: available parallelism)
    #[arg(long)]
    pub workers: Option<usize>,

    /// Polynomial order of z^order + c
    #[arg(long)]
    pub order: Option<u32>,

    /// Iteration cap
    #[arg(long = "max-iterations")]
    pub max_iterations: Option<u32>,

    /// Palette preset: ultra, fire, ocean or greyscale
    #[arg(long)]
    pub palette: Option<PaletteKind>,

    /// Colour mapping mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Iterations per palette step in modulo mode
    #[arg(long = "blend-cycle")]
    pub blend_cycle: Option<f64>,

    /// Viewport bounds as x_min,x_max,y_min,y_max
    #[arg(long, value_name = "BOUNDS", value_parser = parse_view, allow_hyphen_values = true)]
    pub view: Option<Viewport>,

    /// Output file
    #[arg(long, short, default_value = "output/mandelbrot.ppm")]
    pub output: PathBuf,

    /// Print the view state after rendering
    #[arg(long = "print-state")]
    pub print_state: bool,
}

fn parse_view(s: &str) -> Result<Viewport, String> {
    let bounds = s
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("invalid bound in '{s}': {e}"))?;

    let [x_min, x_max, y_min, y_max] = bounds[..] else {
        return Err(format!("expected 4 comma-separated bounds, got {}", bounds.len()));
    };

    Viewport::new(x_min, x_max, y_min, y_max).map_err(|e| e.to_string())
}

impl Cli {
    /// Defaults overridden by whichever flags were given.
    pub fn to_config(&self) -> Result<ExplorerConfig, ConfigError> {
        let mut config = ExplorerConfig::default();

        if let Some(width) = self.width {
            config.pixel_width = width;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
        if let Some(order) = self.order {
            config.default_order = order;
        }
        if let Some(max_iterations) = self.max_iterations {
            config.default_max_iterations = max_iterations;
        }
        if let Some(palette) = self.palette {
            config.default_palette = palette;
        }
        if let Some(blend_cycle) = self.blend_cycle {
            config.default_blend_cycle = blend_cycle;
        }
        if let Some(view) = self.view {
            config.default_viewport = view;
        }
        match self.mode {
            Some(ModeArg::Histogram) => config.default_mode = ColourMappingMode::Histogram,
            Some(ModeArg::Modulo) => {
                config.default_mode = ColourMappingMode::Modulo {
                    blend_cycle: config.default_blend_cycle,
                };
            }
            None => {}
        }

        config.validate()?;

        Ok(config)
    }
}

pub fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = cli.to_config()?;
    let mut controller = ExplorerController::new(config)?;

    tracing::info!(
        width = config.pixel_width,
        workers = config.workers,
        max_iterations = config.default_max_iterations,
        mode = %controller.mode(),
        palette = %controller.palette_kind(),
        "rendering frame"
    );

    let frame = controller.refresh()?;
    PpmFilePresenter::new().present(frame, &cli.output)?;

    if cli.print_state {
        println!("{}", controller.state_report());
    }

    Ok(())
}
