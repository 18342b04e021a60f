use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::frame_buffer::FrameCell;

/// Text shown over the fractal.
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub label: String,
    pub center: Complex,
    pub cursor: Complex,
}

impl fmt::Display for HudText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.label)?;
        writeln!(
            f,
            "Center: ({:.6}, {:.6})",
            self.center.real, self.center.imag
        )?;
        writeln!(
            f,
            "Cursor: ({:.6}, {:.6})",
            self.cursor.real, self.cursor.imag
        )?;
        writeln!(f, "Left click to zoom in")?;
        write!(f, "Right click to zoom out")
    }
}

/// Read-only view of the current frame for a rendering surface.
///
/// `generation` is the refresh count the cells were computed in; presenters
/// compare it with the last one they uploaded to skip unchanged frames.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSnapshot<'a> {
    pub cells: &'a [FrameCell],
    pub width: u32,
    pub height: u32,
    pub generation: u64,
    pub hud: HudText,
}
