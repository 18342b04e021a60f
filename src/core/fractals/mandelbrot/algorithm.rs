use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::errors::ConfigError;
use crate::core::util::pixel_to_complex_coords::pixel_to_complex_coords;

/// Counts how many applications of `z = z² + c` it takes for `|z|` to exceed
/// `escape_threshold`, starting from `z = 0`.
///
/// Returns `max_iterations` when the point never escapes, which is treated as
/// membership of the set. The comparison is done on squared magnitudes, which
/// yields the same counts as comparing the true modulus.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32, escape_threshold: f64) -> u32 {
    let threshold_squared = escape_threshold * escape_threshold;
    let mut z = Complex::ZERO;
    let mut count = 0;

    while count < max_iterations && z.magnitude_squared() <= threshold_squared {
        z = z * z + c;
        count += 1;
    }

    count
}

/// Validated iteration settings for the escape-time algorithm.
///
/// Holds no viewport of its own; [`MandelbrotAlgorithm::bind`] borrows the
/// viewport a frame is computed for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
    escape_threshold: f64,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32, escape_threshold: f64) -> Result<Self, ConfigError> {
        if max_iterations == 0 {
            return Err(ConfigError::ZeroMaxIterations);
        }

        Ok(Self {
            max_iterations,
            escape_threshold,
        })
    }

    #[must_use]
    pub fn bind<'a>(&'a self, viewport: &'a Viewport) -> BoundMandelbrot<'a> {
        BoundMandelbrot {
            algorithm: self,
            viewport,
        }
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }
}

/// The algorithm applied to one viewport for the length of a refresh.
#[derive(Debug, Clone, Copy)]
pub struct BoundMandelbrot<'a> {
    algorithm: &'a MandelbrotAlgorithm,
    viewport: &'a Viewport,
}

impl FractalAlgorithm for BoundMandelbrot<'_> {
    type Success = u32;

    fn compute(&self, pixel: Point) -> Self::Success {
        let c = pixel_to_complex_coords(pixel, self.viewport);

        escape_count(
            c,
            self.algorithm.max_iterations,
            self.algorithm.escape_threshold,
        )
    }
}
