#[cfg_attr(not(feature = "gui"), allow(dead_code))]
mod adapters;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod presenters;

pub use controllers::cli::snapshot_export::{
    SNAPSHOT_HEIGHT, SNAPSHOT_WIDTH, SnapshotExportController,
};
pub use controllers::input::controller::InputController;
pub use controllers::input::events::{InputEvent, InputOutcome, Key, PointerButton};
pub use controllers::ports::file_presenter::FilePresenterPort;
pub use controllers::ports::soundtrack::{SilentSoundtrack, SoundtrackPort, start_soundtrack};
pub use controllers::viewport::controller::ViewportController;
pub use controllers::viewport::errors::ViewportControllerError;
pub use controllers::viewport::render_state::{RenderMode, RenderState};
pub use controllers::viewport::snapshot::{FrameSnapshot, HudText};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError, FrameCell};
pub use crate::core::data::point::Point;
pub use crate::core::data::viewport::{PlaneSize, Viewport, ViewportError};
pub use crate::core::fractals::mandelbrot::algorithm::escape_count;
pub use crate::core::fractals::mandelbrot::errors::ConfigError;
pub use crate::core::fractals::mandelbrot::mandelbrot_config::ExplorerConfig;
pub use crate::core::util::pixel_to_complex_coords::{complex_to_pixel_coords, pixel_to_complex_coords};
pub use presenters::file::ppm::PpmFilePresenter;

#[cfg(feature = "gui")]
pub use input::gui::commands::run_gui::RunGuiCommand;
#[cfg(feature = "gui")]
pub use input::gui::errors::StartupError;
#[cfg(feature = "gui")]
pub use input::gui::settings::GuiSettings;
#[cfg(feature = "gui")]
pub use presenters::pixels::factory::PixelsPresenterFactory;

#[cfg(feature = "audio")]
pub use presenters::audio::rodio_soundtrack::RodioSoundtrack;
