use rayon::prelude::*;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Generates fractal data in parallel using rayon's work-stealing scheduler.
///
/// Each row is computed by exactly one worker. The result is row-major and
/// identical to [`generate_fractal`](super::generate_fractal::generate_fractal);
/// it is only returned once every worker has finished.
pub fn generate_fractal_rayon<Alg>(width: u32, height: u32, algorithm: &Alg) -> Vec<Alg::Success>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Success: Send,
{
    (0..height as i32)
        .into_par_iter()
        .flat_map_iter(|y| (0..width as i32).map(move |x| algorithm.compute(Point { x, y })))
        .collect()
}
