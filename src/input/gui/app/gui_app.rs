use egui::{Color32, Context, FontDefinitions, RichText};
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::event_loop::EventLoop;
use winit::window::Window;

use crate::controllers::input::controller::InputController;
use crate::controllers::input::events::InputOutcome;
use crate::controllers::viewport::controller::ViewportController;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::EventTranslator;

pub struct GuiApp<T: GuiPresenterPort> {
    presenter: T,
    viewport: ViewportController,
    input: InputController,
    translator: EventTranslator,
    hud_text_size: f32,
    egui_ctx: Context,
    egui_state: EguiWinitState,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: T,
        viewport: ViewportController,
        fonts: FontDefinitions,
        hud_text_size: f32,
    ) -> Self {
        let egui_ctx = Context::default();
        egui_ctx.set_fonts(fonts);

        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            presenter,
            viewport,
            input: InputController::new(),
            translator: EventTranslator::new(),
            hud_text_size,
            egui_ctx,
            egui_state,
        }
    }

    /// Feeds a window event to egui and then to the explorer.
    ///
    /// Returns whether the event loop should exit and whether a redraw is needed.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> (InputOutcome, bool) {
        let response = self.egui_state.on_window_event(window, event);
        let mut repaint = response.repaint;

        let presenter = &self.presenter;
        let input_event = self
            .translator
            .translate(event, |x, y| presenter.window_pos_to_pixel(x, y));

        let outcome = match input_event {
            Some(input_event) => {
                repaint = true;
                self.input.handle(&mut self.viewport, input_event)
            }
            None => InputOutcome::Continue,
        };

        (outcome, repaint)
    }

    pub fn resize_surface(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.presenter.resize_surface(width, height)
    }

    /// Recomputes the frame if needed, then draws it with the HUD.
    pub fn redraw(&mut self, window: &Window) -> Result<(), pixels::Error> {
        self.viewport.refresh();

        let raw_input = self.egui_state.take_egui_input(window);
        let hud = self.viewport.hud_text().to_string();
        let hud_text_size = self.hud_text_size;

        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Area::new(egui::Id::new("hud"))
                .fixed_pos([8.0, 8.0])
                .interactable(false)
                .show(ctx, |ui| {
                    ui.label(RichText::new(hud).color(Color32::WHITE).size(hud_text_size));
                });
        });

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        self.presenter
            .render(&self.viewport.snapshot(), egui_output, &self.egui_ctx)
    }
}
