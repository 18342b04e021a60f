//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::frame_buffer::FrameCell;

/// Copies frame cells into an RGBA byte buffer, setting alpha to 255.
///
/// # Panics
/// Panics if `dst.len()` is not exactly four bytes per cell.
pub fn copy_cells_to_rgba(cells: &[FrameCell], dst: &mut [u8]) {
    let expected_dst_len = cells.len() * 4;
    assert_eq!(
        dst.len(),
        expected_dst_len,
        "dst length {} does not match expected {}",
        dst.len(),
        expected_dst_len
    );

    for (cell, dst_pixel) in cells.iter().zip(dst.chunks_exact_mut(4)) {
        dst_pixel[0] = cell.colour.r;
        dst_pixel[1] = cell.colour.g;
        dst_pixel[2] = cell.colour.b;
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::colour::Colour;
    use crate::core::data::point::Point;

    fn cell(x: i32, r: u8, g: u8, b: u8) -> FrameCell {
        FrameCell {
            position: Point { x, y: 0 },
            colour: Colour { r, g, b },
        }
    }

    #[test]
    fn test_copy_cells_to_rgba_known_values() {
        let cells = vec![
            cell(0, 255, 0, 0),
            cell(1, 0, 255, 0),
            cell(2, 0, 0, 255),
            cell(3, 255, 255, 255),
        ];
        let mut dst = vec![0; cells.len() * 4];

        copy_cells_to_rgba(&cells, &mut dst);

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_copy_cells_to_rgba_empty_buffers() {
        let mut dst: Vec<u8> = vec![];

        copy_cells_to_rgba(&[], &mut dst);

        assert!(dst.is_empty());
    }

    #[test]
    #[should_panic(expected = "does not match expected")]
    fn test_copy_cells_to_rgba_rejects_short_destination() {
        let mut dst = vec![0; 3];

        copy_cells_to_rgba(&[cell(0, 1, 2, 3)], &mut dst);
    }
}
