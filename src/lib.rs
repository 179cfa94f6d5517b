pub mod cli;
pub mod config;
pub mod controllers;
pub mod core;
pub mod presenters;

pub use crate::config::{ConfigError, ExplorerConfig};
pub use crate::controllers::explorer::controller::ExplorerController;
pub use crate::controllers::explorer::errors::ExplorerError;
pub use crate::controllers::ports::file_presenter::FilePresenterPort;
pub use crate::core::fractals::escape_time::colour_mapping::kinds::ColourMappingMode;
pub use crate::core::fractals::escape_time::colour_mapping::palettes::PaletteKind;
pub use crate::presenters::file::ppm::PpmFilePresenter;
