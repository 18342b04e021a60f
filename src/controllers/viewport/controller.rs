use std::time::Instant;

use crate::controllers::viewport::errors::ViewportControllerError;
use crate::controllers::viewport::render_state::{RenderMode, RenderState};
use crate::controllers::viewport::snapshot::{FrameSnapshot, HudText};
use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::actions::generate_fractal::generate_fractal::generate_fractal;
use crate::core::actions::generate_fractal::generate_fractal_rayon::generate_fractal_rayon;
use crate::core::actions::generate_frame::generate_frame::generate_frame;
use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::{PlaneSize, Viewport, ViewportError};
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_maps::band_gradient::MandelbrotBandGradient;
use crate::core::fractals::mandelbrot::mandelbrot_config::ExplorerConfig;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Owns the viewport and the frame buffer and keeps them consistent.
///
/// Every operation that changes what should be on screen moves the controller
/// to [`RenderState::Calculating`]; [`ViewportController::refresh`] is the only
/// place the frame is recomputed.
#[derive(Debug)]
pub struct ViewportController {
    config: ExplorerConfig,
    viewport: Viewport,
    algorithm: MandelbrotAlgorithm,
    colour_map: MandelbrotBandGradient,
    frame: FrameBuffer,
    render_state: RenderState,
    render_mode: RenderMode,
    cursor: Complex,
    refresh_count: u64,
}

impl ViewportController {
    pub fn new(
        config: ExplorerConfig,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<Self, ViewportControllerError> {
        config.validate()?;

        let viewport = Viewport::new(
            pixel_width,
            pixel_height,
            PlaneSize {
                width: config.base_width,
                height: config.base_height,
            },
            config.zoom_factor,
        )?;
        let algorithm =
            MandelbrotAlgorithm::new(config.max_iterations, config.escape_threshold)?;
        let colour_map = MandelbrotBandGradient::new(config.max_iterations)?;

        log::debug!(
            "viewport controller created: {}x{} pixels, max iterations {}, {} with band size {}",
            pixel_width,
            pixel_height,
            algorithm.max_iterations(),
            colour_map.display_name(),
            colour_map.band_size()
        );

        Ok(Self {
            config,
            viewport,
            algorithm,
            colour_map,
            frame: FrameBuffer::new(pixel_width, pixel_height),
            render_state: RenderState::Calculating,
            render_mode: RenderMode::default(),
            cursor: Complex::ZERO,
            refresh_count: 0,
        })
    }

    #[must_use]
    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    #[must_use]
    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn render_state(&self) -> RenderState {
        self.render_state
    }

    #[must_use]
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    #[must_use]
    pub fn needs_refresh(&self) -> bool {
        self.render_state == RenderState::Calculating
    }

    /// Number of full recomputations done so far.
    #[must_use]
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }

    #[must_use]
    pub fn cursor(&self) -> Complex {
        self.cursor
    }

    #[must_use]
    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }

    pub fn zoom_in(&mut self) {
        self.viewport.set_zoom_level(self.viewport.zoom_level() + 1);
        log::debug!("zoom in to level {}", self.viewport.zoom_level());
        self.invalidate();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.set_zoom_level(self.viewport.zoom_level() - 1);
        log::debug!("zoom out to level {}", self.viewport.zoom_level());
        self.invalidate();
    }

    /// Moves the center to the plane point under `pixel`, using the current extents.
    pub fn recenter(&mut self, pixel: Point) {
        let center = pixel_to_complex_coords(pixel, &self.viewport);

        self.viewport.set_center(center);
        log::debug!(
            "recenter on pixel ({}, {}) -> ({}, {})",
            pixel.x,
            pixel.y,
            center.real,
            center.imag
        );
        self.invalidate();
    }

    /// Records the plane point under the pointer. Display only.
    pub fn set_cursor(&mut self, pixel: Point) {
        self.cursor = pixel_to_complex_coords(pixel, &self.viewport);
    }

    pub fn reset_view(&mut self) {
        self.viewport.set_zoom_level(0);
        self.viewport.set_center(Complex::ZERO);
        log::debug!("view reset");
        self.invalidate();
    }

    /// Changes the pixel grid. On error nothing is changed.
    pub fn resize(&mut self, pixel_width: u32, pixel_height: u32) -> Result<(), ViewportError> {
        if pixel_width == self.viewport.pixel_width()
            && pixel_height == self.viewport.pixel_height()
        {
            return Ok(());
        }

        self.viewport.resize(pixel_width, pixel_height)?;
        self.frame = FrameBuffer::new(pixel_width, pixel_height);
        log::debug!("resized to {}x{}", pixel_width, pixel_height);
        self.invalidate();

        Ok(())
    }

    /// Recomputes every cell when the frame is stale.
    ///
    /// Returns `true` if a recomputation happened. In [`RenderState::Displaying`]
    /// this does nothing and returns `false`.
    pub fn refresh(&mut self) -> bool {
        if self.render_state == RenderState::Displaying {
            return false;
        }

        let width = self.viewport.pixel_width();
        let height = self.viewport.pixel_height();
        let algorithm = self.algorithm.bind(&self.viewport);

        let start = Instant::now();
        let counts = match self.render_mode {
            RenderMode::Serial => generate_fractal(width, height, &algorithm),
            RenderMode::Parallel => generate_fractal_rayon(width, height, &algorithm),
        };

        if let Err(err) = generate_frame(counts, &self.colour_map, &mut self.frame) {
            // resize() reallocates the frame whenever the viewport grid changes
            unreachable!("frame buffer out of step with viewport: {}", err);
        }

        self.refresh_count += 1;
        self.render_state = RenderState::Displaying;

        log::debug!(
            "refresh #{} ({} mode, {} pixels) took {:?}",
            self.refresh_count,
            self.render_mode,
            self.viewport.pixel_count(),
            start.elapsed()
        );

        true
    }

    #[must_use]
    pub fn hud_text(&self) -> HudText {
        HudText {
            label: self.config.hud_label.clone(),
            center: self.viewport.center(),
            cursor: self.cursor,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> FrameSnapshot<'_> {
        FrameSnapshot {
            cells: self.frame.cells(),
            width: self.frame.width(),
            height: self.frame.height(),
            generation: self.refresh_count,
            hud: self.hud_text(),
        }
    }

    fn invalidate(&mut self) {
        self.render_state = RenderState::Calculating;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::mandelbrot::errors::ConfigError;

    const MAGENTA: Colour = Colour {
        r: 255,
        g: 0,
        b: 255,
    };
    const BLUE: Colour = Colour { r: 0, g: 0, b: 255 };
    const SKY: Colour = Colour {
        r: 0,
        g: 127,
        b: 255,
    };
    const BLACK: Colour = Colour::BLACK;

    fn small_config() -> ExplorerConfig {
        ExplorerConfig {
            max_iterations: 10,
            ..ExplorerConfig::default()
        }
    }

    fn colour_grid(controller: &ViewportController) -> Vec<Vec<Colour>> {
        let frame = controller.frame();

        (0..frame.height() as i32)
            .map(|y| {
                (0..frame.width() as i32)
                    .map(|x| frame.cell(Point { x, y }).unwrap().colour)
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_new_starts_calculating_at_origin() {
        let controller = ViewportController::new(ExplorerConfig::default(), 8, 6).unwrap();

        assert_eq!(controller.render_state(), RenderState::Calculating);
        assert!(controller.needs_refresh());
        assert_eq!(controller.viewport().center(), Complex::ZERO);
        assert_eq!(controller.viewport().zoom_level(), 0);
        assert_eq!(controller.refresh_count(), 0);
        assert_eq!(controller.render_mode(), RenderMode::Serial);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = ExplorerConfig {
            max_iterations: 0,
            ..ExplorerConfig::default()
        };

        assert_eq!(
            ViewportController::new(config, 4, 4).unwrap_err(),
            ViewportControllerError::Config(ConfigError::ZeroMaxIterations)
        );
    }

    #[test]
    fn test_new_rejects_empty_pixel_grid() {
        assert_eq!(
            ViewportController::new(ExplorerConfig::default(), 0, 4).unwrap_err(),
            ViewportControllerError::Viewport(ViewportError::InvalidPixelSize {
                width: 0,
                height: 4
            })
        );
    }

    #[test]
    fn test_four_by_four_frame_matches_hand_computed_colours() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();

        assert!(controller.refresh());

        // columns map to re {-2, -1, 0, 1}, rows to im {2, 1, 0, -1}
        assert_eq!(
            colour_grid(&controller),
            vec![
                vec![MAGENTA, MAGENTA, BLUE, MAGENTA],
                vec![MAGENTA, SKY, BLACK, BLUE],
                vec![BLACK, BLACK, BLACK, SKY],
                vec![MAGENTA, SKY, BLACK, BLUE],
            ]
        );
        assert_eq!(controller.render_state(), RenderState::Displaying);
    }

    #[test]
    fn test_refresh_reads_the_current_viewport() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.refresh();
        controller.zoom_in();

        assert!(controller.refresh());

        // on the 2x2 plane the top row is im 1 with re {-1, -0.5, 0, 0.5}
        let frame = controller.frame();
        assert_eq!(frame.cell(Point { x: 0, y: 0 }).unwrap().colour, SKY);
        assert_eq!(frame.cell(Point { x: 2, y: 0 }).unwrap().colour, BLACK);
    }

    #[test]
    fn test_cells_carry_their_positions() {
        let mut controller = ViewportController::new(small_config(), 3, 2).unwrap();
        controller.refresh();

        let positions: Vec<Point> = controller
            .frame()
            .cells()
            .iter()
            .map(|cell| cell.position)
            .collect();

        assert_eq!(
            positions,
            vec![
                Point { x: 0, y: 0 },
                Point { x: 1, y: 0 },
                Point { x: 2, y: 0 },
                Point { x: 0, y: 1 },
                Point { x: 1, y: 1 },
                Point { x: 2, y: 1 },
            ]
        );
    }

    #[test]
    fn test_second_refresh_is_a_no_op() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();

        assert!(controller.refresh());
        let before = colour_grid(&controller);

        assert!(!controller.refresh());
        assert_eq!(controller.refresh_count(), 1);
        assert_eq!(colour_grid(&controller), before);
    }

    #[test]
    fn test_every_view_change_requests_a_refresh() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        let changes: [fn(&mut ViewportController); 4] = [
            |c| c.zoom_in(),
            |c| c.zoom_out(),
            |c| c.recenter(Point { x: 1, y: 1 }),
            |c| c.reset_view(),
        ];

        for change in changes {
            controller.refresh();
            assert_eq!(controller.render_state(), RenderState::Displaying);

            change(&mut controller);

            assert_eq!(controller.render_state(), RenderState::Calculating);
        }
        assert_eq!(controller.refresh_count(), 4);
    }

    #[test]
    fn test_set_cursor_does_not_invalidate() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.refresh();

        controller.set_cursor(Point { x: 1, y: 3 });

        assert_eq!(controller.cursor(), Complex::new(-1.0, -1.0));
        assert_eq!(controller.render_state(), RenderState::Displaying);
    }

    #[test]
    fn test_zoom_in_then_out_restores_plane_size() {
        let mut controller = ViewportController::new(ExplorerConfig::default(), 640, 480).unwrap();
        let original = controller.viewport().plane_size();

        for _ in 0..12 {
            controller.zoom_in();
        }
        assert_eq!(controller.viewport().zoom_level(), 12);

        for _ in 0..12 {
            controller.zoom_out();
        }

        assert_eq!(controller.viewport().zoom_level(), 0);
        assert_eq!(controller.viewport().plane_size(), original);
    }

    #[test]
    fn test_zoom_out_has_no_lower_bound() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();

        controller.zoom_out();
        controller.zoom_out();

        assert_eq!(controller.viewport().zoom_level(), -2);
        assert_eq!(controller.viewport().plane_size().width, 16.0);
    }

    #[test]
    fn test_zoom_then_recenter_uses_new_extents() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();

        controller.zoom_in();
        controller.recenter(Point { x: 0, y: 0 });

        // after zooming the plane is 2x2, so pixel (0, 0) is -1 + 1i
        assert_eq!(controller.viewport().center(), Complex::new(-1.0, 1.0));
    }

    #[test]
    fn test_reset_view_returns_to_origin() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.zoom_in();
        controller.recenter(Point { x: 3, y: 3 });

        controller.reset_view();

        assert_eq!(controller.viewport().center(), Complex::ZERO);
        assert_eq!(controller.viewport().zoom_level(), 0);
    }

    #[test]
    fn test_resize_reallocates_frame() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.refresh();

        controller.resize(8, 2).unwrap();

        assert_eq!(controller.frame().cells().len(), 16);
        assert_eq!(controller.viewport().aspect_ratio(), 0.25);
        assert!(controller.needs_refresh());
        assert!(controller.refresh());
        assert_eq!(controller.snapshot().width, 8);
    }

    #[test]
    fn test_resize_to_same_size_keeps_frame() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.refresh();

        controller.resize(4, 4).unwrap();

        assert_eq!(controller.render_state(), RenderState::Displaying);
    }

    #[test]
    fn test_failed_resize_changes_nothing() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.refresh();

        assert!(controller.resize(0, 0).is_err());

        assert_eq!(controller.viewport().pixel_width(), 4);
        assert_eq!(controller.frame().cells().len(), 16);
        assert_eq!(controller.render_state(), RenderState::Displaying);
    }

    #[test]
    fn test_parallel_refresh_matches_serial() {
        let mut serial = ViewportController::new(ExplorerConfig::default(), 37, 23).unwrap();
        let mut parallel = ViewportController::new(ExplorerConfig::default(), 37, 23)
            .unwrap()
            .with_render_mode(RenderMode::Parallel);

        for controller in [&mut serial, &mut parallel] {
            controller.zoom_in();
            controller.recenter(Point { x: 5, y: 17 });
            controller.refresh();
        }

        assert_eq!(serial.frame(), parallel.frame());
    }

    #[test]
    fn test_snapshot_reports_generation_and_hud() {
        let mut controller = ViewportController::new(small_config(), 4, 4).unwrap();
        controller.refresh();
        controller.set_cursor(Point { x: 2, y: 2 });

        let snapshot = controller.snapshot();

        assert_eq!(snapshot.generation, 1);
        assert_eq!(snapshot.cells.len(), 16);
        assert_eq!(snapshot.hud.label, "Mandelbrot Set");
        assert_eq!(snapshot.hud.center, Complex::ZERO);
        assert_eq!(snapshot.hud.cursor, Complex::ZERO);
    }
}
