use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FrameBufferError {
    BoundsMismatch {
        cell_count: usize,
        colour_count: usize,
    },
}

impl fmt::Display for FrameBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                cell_count,
                colour_count,
            } => {
                write!(
                    f,
                    "frame buffer has {} cells but {} colours were supplied",
                    cell_count, colour_count
                )
            }
        }
    }
}

impl Error for FrameBufferError {}

/// One sample of the frame: where it sits on the pixel grid and what colour it is.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FrameCell {
    pub position: Point,
    pub colour: Colour,
}

/// Dense row-major grid of cells, one per device pixel.
///
/// The cell for `(x, y)` lives at index `x + y * width`.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    width: u32,
    height: u32,
    cells: Vec<FrameCell>,
}

impl FrameBuffer {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let cells = (0..height as i32)
            .flat_map(|y| {
                (0..width as i32).map(move |x| FrameCell {
                    position: Point { x, y },
                    colour: Colour::BLACK,
                })
            })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn cells(&self) -> &[FrameCell] {
        &self.cells
    }

    #[must_use]
    pub fn index_of(&self, pixel: Point) -> Option<usize> {
        let inside = pixel.x >= 0
            && pixel.y >= 0
            && (pixel.x as u32) < self.width
            && (pixel.y as u32) < self.height;

        inside.then(|| pixel.x as usize + pixel.y as usize * self.width as usize)
    }

    #[must_use]
    pub fn cell(&self, pixel: Point) -> Option<&FrameCell> {
        self.index_of(pixel).map(|index| &self.cells[index])
    }

    /// Overwrites every cell's colour, in row-major order.
    ///
    /// Leaves the buffer untouched when the number of colours does not match.
    pub fn set_colours(&mut self, colours: Vec<Colour>) -> Result<(), FrameBufferError> {
        if colours.len() != self.cells.len() {
            return Err(FrameBufferError::BoundsMismatch {
                cell_count: self.cells.len(),
                colour_count: colours.len(),
            });
        }

        for (cell, colour) in self.cells.iter_mut().zip(colours) {
            cell.colour = colour;
        }

        Ok(())
    }

    /// Packs the colours as tightly packed RGB bytes, row-major.
    #[must_use]
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flat_map(|cell| [cell.colour.r, cell.colour.g, cell.colour.b])
            .collect()
    }
}
