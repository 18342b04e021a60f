use std::path::Path;
use std::time::Instant;

use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::controllers::viewport::controller::ViewportController;
use crate::controllers::viewport::errors::ViewportControllerError;
use crate::controllers::viewport::render_state::RenderMode;
use crate::core::fractals::mandelbrot::mandelbrot_config::ExplorerConfig;

pub const SNAPSHOT_WIDTH: u32 = 800;
pub const SNAPSHOT_HEIGHT: u32 = 600;

/// Renders the default view once, without a window, and hands it to a file presenter.
pub struct SnapshotExportController<P: FilePresenterPort> {
    presenter: P,
    viewport: ViewportController,
}

impl<P: FilePresenterPort> SnapshotExportController<P> {
    pub fn new(
        presenter: P,
        config: ExplorerConfig,
        width: u32,
        height: u32,
    ) -> Result<Self, ViewportControllerError> {
        let viewport =
            ViewportController::new(config, width, height)?.with_render_mode(RenderMode::Parallel);

        Ok(Self {
            presenter,
            viewport,
        })
    }

    pub fn generate(&mut self) {
        let viewport = self.viewport.viewport();

        log::info!(
            "rendering Mandelbrot set: {}x{}, max iterations {}",
            viewport.pixel_width(),
            viewport.pixel_height(),
            self.viewport.config().max_iterations
        );

        let start = Instant::now();
        self.viewport.refresh();

        log::info!("duration: {:?}", start.elapsed());
    }

    /// Writes the last generated frame. Does nothing before [`Self::generate`].
    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        if self.viewport.refresh_count() > 0 {
            self.presenter.present(self.viewport.frame(), &filepath)?;
            log::info!("wrote {}", filepath.as_ref().display());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::frame_buffer::FrameBuffer;
    use std::cell::RefCell;
    use std::path::PathBuf;

    #[derive(Default)]
    struct RecordingPresenter {
        written: RefCell<Vec<(PathBuf, u32, u32)>>,
    }

    impl FilePresenterPort for &RecordingPresenter {
        fn present(&self, frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
            self.written.borrow_mut().push((
                filepath.as_ref().to_path_buf(),
                frame.width(),
                frame.height(),
            ));
            Ok(())
        }
    }

    #[test]
    fn test_write_before_generate_does_nothing() {
        let presenter = RecordingPresenter::default();
        let controller =
            SnapshotExportController::new(&presenter, ExplorerConfig::default(), 8, 6).unwrap();

        controller.write("unused.ppm").unwrap();

        assert!(presenter.written.borrow().is_empty());
    }

    #[test]
    fn test_generate_then_write_presents_frame() {
        let presenter = RecordingPresenter::default();
        let mut controller =
            SnapshotExportController::new(&presenter, ExplorerConfig::default(), 8, 6).unwrap();

        controller.generate();
        controller.write("out/frame.ppm").unwrap();

        assert_eq!(
            *presenter.written.borrow(),
            vec![(PathBuf::from("out/frame.ppm"), 8, 6)]
        );
    }
}
