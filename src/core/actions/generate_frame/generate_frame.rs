use crate::core::actions::generate_frame::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};

/// Colours every cell of `frame` from the row-major `input` values.
///
/// Fails without touching `frame` when `input` does not hold exactly one
/// value per cell.
pub fn generate_frame<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    frame: &mut FrameBuffer,
) -> Result<(), FrameBufferError> {
    let colours: Vec<Colour> = input.into_iter().map(|value| mapper.map(value)).collect();

    frame.set_colours(colours)
}
