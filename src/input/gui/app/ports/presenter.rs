use egui::Context as EguiContext;

use crate::controllers::viewport::snapshot::FrameSnapshot;
use crate::core::data::point::Point;

pub trait GuiPresenterPort {
    /// Draws the frame with the egui output layered on top.
    fn render(
        &mut self,
        snapshot: &FrameSnapshot<'_>,
        egui_output: egui::FullOutput,
        egui_ctx: &EguiContext,
    ) -> Result<(), pixels::Error>;

    /// Resizes the window surface. The frame keeps its pixel grid and is scaled.
    fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError>;

    /// Maps a physical window position onto the frame's pixel grid.
    fn window_pos_to_pixel(&self, x: f64, y: f64) -> Point;
}
