use winit::window::Window;

use crate::input::gui::app::ports::presenter::GuiPresenterPort;

pub trait GuiPresenterFactoryPort<P: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        pixel_width: u32,
        pixel_height: u32,
    ) -> Result<P, pixels::Error>;
}
