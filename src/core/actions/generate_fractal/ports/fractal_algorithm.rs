use crate::core::data::point::Point;

/// Per-pixel computation of a fractal over a fixed grid.
pub trait FractalAlgorithm {
    type Success;

    fn compute(&self, pixel: Point) -> Self::Success;
}
