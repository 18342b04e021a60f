use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;

/// Maps a pixel onto the complex plane through `viewport`.
///
/// Pixel `y` grows downwards while the imaginary axis grows upwards, so the
/// vertical axis is flipped: row 0 is the top edge of the plane region.
#[must_use]
pub fn pixel_to_complex_coords(pixel: Point, viewport: &Viewport) -> Complex {
    let pixel_width = f64::from(viewport.pixel_width());
    let pixel_height = f64::from(viewport.pixel_height());
    let size = viewport.plane_size();
    let center = viewport.center();

    let real = (f64::from(pixel.x) / pixel_width) * size.width + (center.real - size.width / 2.0);
    let imag = ((f64::from(pixel.y) - pixel_height) / -pixel_height) * size.height
        + (center.imag - size.height / 2.0);

    Complex { real, imag }
}

/// Inverse of [`pixel_to_complex_coords`], returning fractional pixel coordinates.
#[must_use]
pub fn complex_to_pixel_coords(point: Complex, viewport: &Viewport) -> (f64, f64) {
    let pixel_width = f64::from(viewport.pixel_width());
    let pixel_height = f64::from(viewport.pixel_height());
    let size = viewport.plane_size();
    let center = viewport.center();

    let x = (point.real - (center.real - size.width / 2.0)) / size.width * pixel_width;
    let y = pixel_height
        - (point.imag - (center.imag - size.height / 2.0)) / size.height * pixel_height;

    (x, y)
}
