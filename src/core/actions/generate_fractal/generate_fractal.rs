use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Runs `algorithm` over every pixel of a `width` x `height` grid, row-major.
pub fn generate_fractal<Alg: FractalAlgorithm>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubAlgorithm {}

    impl FractalAlgorithm for StubAlgorithm {
        type Success = (i32, i32);

        fn compute(&self, pixel: Point) -> Self::Success {
            (pixel.x, pixel.y)
        }
    }

    #[test]
    fn test_covers_every_pixel_in_row_major_order() {
        let results = generate_fractal(3, 2, &StubAlgorithm {});

        assert_eq!(results, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_single_pixel_grid() {
        let results = generate_fractal(1, 1, &StubAlgorithm {});

        assert_eq!(results, vec![(0, 0)]);
    }
}
