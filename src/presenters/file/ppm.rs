use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::frame_buffer::FrameBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug)]
pub struct PpmFilePresenter {}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let filepath = filepath.as_ref();

        if let Some(parent) = filepath.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = BufWriter::new(std::fs::File::create(filepath)?);

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(file, "P6")?;
        writeln!(file, "{} {}", frame.width(), frame.height())?;
        writeln!(file, "255")?;
        file.write_all(&frame.to_rgb_bytes())?;
        file.flush()?;

        Ok(())
    }
}

impl Default for PpmFilePresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmFilePresenter {
    pub fn new() -> Self {
        Self {}
    }
}
