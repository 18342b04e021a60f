use std::path::PathBuf;

pub const DEFAULT_FONT_PATH: &str = "assets/KOMIKAP_.ttf";
pub const DEFAULT_SOUNDTRACK_PATH: &str = "assets/music.wav";
pub const DEFAULT_HUD_TEXT_SIZE: f32 = 16.0;
pub const DEFAULT_SOUNDTRACK_VOLUME: f32 = 0.5;
pub const FALLBACK_PIXEL_WIDTH: u32 = 800;
pub const FALLBACK_PIXEL_HEIGHT: u32 = 600;

/// Settings of the windowed front end that the core never sees.
#[derive(Debug, Clone, PartialEq)]
pub struct GuiSettings {
    pub font_path: PathBuf,
    pub soundtrack_path: PathBuf,
    pub soundtrack_volume: f32,
    pub hud_text_size: f32,
    /// Used when the platform reports no primary monitor.
    pub fallback_pixel_size: (u32, u32),
}

impl Default for GuiSettings {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from(DEFAULT_FONT_PATH),
            soundtrack_path: PathBuf::from(DEFAULT_SOUNDTRACK_PATH),
            soundtrack_volume: DEFAULT_SOUNDTRACK_VOLUME,
            hud_text_size: DEFAULT_HUD_TEXT_SIZE,
            fallback_pixel_size: (FALLBACK_PIXEL_WIDTH, FALLBACK_PIXEL_HEIGHT),
        }
    }
}

impl GuiSettings {
    /// Overrides the asset paths from positional arguments: `[FONT_PATH [SOUNDTRACK_PATH]]`.
    #[must_use]
    pub fn with_asset_args<I>(mut self, args: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<PathBuf>,
    {
        let mut args = args.into_iter();

        if let Some(font_path) = args.next() {
            self.font_path = font_path.into();
        }
        if let Some(soundtrack_path) = args.next() {
            self.soundtrack_path = soundtrack_path.into();
        }

        self
    }

    /// Half the monitor resolution, or the fallback size without a monitor.
    #[must_use]
    pub fn pixel_size(&self, monitor_size: Option<(u32, u32)>) -> (u32, u32) {
        match monitor_size {
            Some((width, height)) if width >= 2 && height >= 2 => (width / 2, height / 2),
            _ => self.fallback_pixel_size,
        }
    }
}
