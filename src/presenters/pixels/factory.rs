use winit::window::Window;

use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::presenters::pixels::presenter::PixelsPresenter;

#[derive(Debug, Default)]
pub struct PixelsPresenterFactory {}

impl GuiPresenterFactoryPort<PixelsPresenter> for PixelsPresenterFactory {
    fn build(
        &self,
        window: &'static Window,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<PixelsPresenter, pixels::Error> {
        PixelsPresenter::new(window, pixel_width, pixel_height)
    }
}

impl PixelsPresenterFactory {
    pub fn new() -> Self {
        Self {}
    }
}
