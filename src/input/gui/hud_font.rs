use std::path::Path;

use egui::{FontData, FontDefinitions, FontFamily};

use crate::input::gui::errors::{FontError, StartupError};

const HUD_FONT_NAME: &str = "hud";

// sfnt version tags: TrueType, Apple TrueType, OpenType CFF, collection
const FONT_MAGICS: [&[u8; 4]; 4] = [b"\x00\x01\x00\x00", b"true", b"OTTO", b"ttcf"];

/// Reads the HUD font and installs it as the preferred proportional face.
pub fn load_hud_font(path: &Path) -> Result<FontDefinitions, StartupError> {
    let bytes = std::fs::read(path).map_err(|err| StartupError::Font {
        path: path.to_path_buf(),
        source: FontError::Io(err),
    })?;

    hud_font_definitions(bytes).map_err(|source| StartupError::Font {
        path: path.to_path_buf(),
        source,
    })
}

fn hud_font_definitions(bytes: Vec<u8>) -> Result<FontDefinitions, FontError> {
    if bytes.is_empty() {
        return Err(FontError::Empty);
    }

    if !FONT_MAGICS.iter().any(|magic| bytes.starts_with(*magic)) {
        return Err(FontError::NotAFont);
    }

    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(HUD_FONT_NAME.to_owned(), FontData::from_owned(bytes));
    fonts
        .families
        .entry(FontFamily::Proportional)
        .or_default()
        .insert(0, HUD_FONT_NAME.to_owned());

    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_a_font_error() {
        let err = load_hud_font(Path::new("does/not/exist.ttf")).unwrap_err();

        assert!(matches!(
            err,
            StartupError::Font {
                source: FontError::Io(_),
                ..
            }
        ));
    }

    #[test]
    fn test_empty_and_foreign_files_are_rejected() {
        assert!(matches!(
            hud_font_definitions(Vec::new()),
            Err(FontError::Empty)
        ));
        assert!(matches!(
            hud_font_definitions(b"RIFF....WAVE".to_vec()),
            Err(FontError::NotAFont)
        ));
    }

    #[test]
    fn test_font_becomes_first_proportional_family() {
        let fonts = hud_font_definitions(b"\x00\x01\x00\x00rest".to_vec()).unwrap();

        assert!(fonts.font_data.contains_key(HUD_FONT_NAME));
        assert_eq!(fonts.families[&FontFamily::Proportional][0], HUD_FONT_NAME);
    }
}
