use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::point::Point;

/// Computes every pixel of a `width x height` grid on the calling thread,
/// in row-major order.
pub fn generate_fractal_serial<Alg: FractalAlgorithm>(
    width: u32,
    height: u32,
    algorithm: &Alg,
) -> Vec<Alg::Success> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| Point { x, y }))
        .map(|pixel| algorithm.compute(pixel))
        .collect()
}
