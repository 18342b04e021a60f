use std::process::ExitCode;

use env_logger::Env;
use mandelbrot_explorer::{
    ExplorerConfig, GuiSettings, PixelsPresenterFactory, RunGuiCommand, SoundtrackPort,
};

#[cfg(feature = "audio")]
fn soundtrack(settings: &GuiSettings) -> Box<dyn SoundtrackPort> {
    Box::new(mandelbrot_explorer::RodioSoundtrack::new(
        settings.soundtrack_volume,
    ))
}

#[cfg(not(feature = "audio"))]
fn soundtrack(_settings: &GuiSettings) -> Box<dyn SoundtrackPort> {
    Box::new(mandelbrot_explorer::SilentSoundtrack::default())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // usage: gui [FONT_PATH [SOUNDTRACK_PATH]]
    let settings = GuiSettings::default().with_asset_args(std::env::args().skip(1));
    let mut soundtrack = soundtrack(&settings);
    let command = RunGuiCommand::new(
        PixelsPresenterFactory::new(),
        ExplorerConfig::default(),
        settings,
    );

    match command.execute(soundtrack.as_mut()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
