use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;

/// Binary (P6) PPM writer.
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    /// Header and raw RGB bytes for `buffer`.
    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
        let rect = buffer.pixel_rect();

        // P6: binary RGB, then width, height and max channel value
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", rect.width(), rect.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        self.write_to(buffer, BufWriter::new(File::create(filepath)?))?;
        info!(path = %filepath.display(), bytes = buffer.buffer_size(), "frame written");

        Ok(())
    }
}
