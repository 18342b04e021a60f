use std::marker::PhantomData;

use winit::dpi::PhysicalSize;
use winit::event::{Event, WindowEvent};
use winit::event_loop::EventLoop;
use winit::window::{Window, WindowBuilder};

use crate::controllers::input::events::InputOutcome;
use crate::controllers::ports::soundtrack::{start_soundtrack, SoundtrackPort};
use crate::controllers::viewport::controller::ViewportController;
use crate::core::fractals::mandelbrot::mandelbrot_config::ExplorerConfig;
use crate::input::gui::app::gui_app::GuiApp;
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::errors::StartupError;
use crate::input::gui::hud_font::load_hud_font;
use crate::input::gui::settings::GuiSettings;

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: ExplorerConfig,
    settings: GuiSettings,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: ExplorerConfig, settings: GuiSettings) -> Self {
        Self {
            presenter_factory,
            config,
            settings,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and runs until it is closed or Escape is pressed.
    ///
    /// The soundtrack starts once the window is open. It keeps playing as long as `soundtrack` lives.
    pub fn execute(&self, soundtrack: &mut dyn SoundtrackPort) -> Result<(), StartupError> {
        let fonts = load_hud_font(&self.settings.font_path)?;
        log::info!("loaded HUD font {}", self.settings.font_path.display());

        let event_loop = EventLoop::new()?;

        let monitor_size = event_loop
            .primary_monitor()
            .map(|monitor| (monitor.size().width, monitor.size().height));
        let (pixel_width, pixel_height) = self.settings.pixel_size(monitor_size);

        let viewport = ViewportController::new(self.config.clone(), pixel_width, pixel_height)?;

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(self.config.window_title.as_str())
                .with_inner_size(PhysicalSize::new(pixel_width, pixel_height))
                .with_resizable(false)
                .build(&event_loop)?,
        ));
        log::info!("window opened at {}x{}", pixel_width, pixel_height);

        let presenter = self
            .presenter_factory
            .build(window, pixel_width, pixel_height)?;
        let mut app = GuiApp::new(
            window,
            &event_loop,
            presenter,
            viewport,
            fonts,
            self.settings.hud_text_size,
        );

        start_soundtrack(soundtrack, &self.settings.soundtrack_path);

        let mut redraw_pending = true;

        event_loop.run(|event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                let (outcome, repaint) = app.handle_window_event(window, event);
                if outcome == InputOutcome::Exit {
                    elwt.exit();
                }
                redraw_pending |= repaint;

                match event {
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        if let Err(err) = app.redraw(window) {
                            log::error!("render failed: {}", err);
                            elwt.exit();
                        }
                    }
                    WindowEvent::Resized(size) => {
                        if let Err(err) = app.resize_surface(size.width, size.height) {
                            log::error!("surface resize failed: {}", err);
                            elwt.exit();
                        }
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        log::info!("explorer closed");

        Ok(())
    }
}
