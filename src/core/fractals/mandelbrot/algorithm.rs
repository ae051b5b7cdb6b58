use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::render_params::RenderParams;

/// Squared magnitude at which an orbit counts as escaped.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Escape-time kernel over the pixel grid described by [`RenderParams`].
///
/// Pixel `(x, y)` maps to `c = (start.real + x * dx, start.imag + y * dy)` with
/// `dx = width_on_plane / width` and `dy = height_on_plane / height`.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotAlgorithm {
    start: Complex,
    dx: f64,
    dy: f64,
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    #[must_use]
    pub fn new(params: &RenderParams) -> Self {
        let region = params.region();

        Self {
            start: region.start(),
            dx: region.width() / f64::from(params.width()),
            dy: region.height() / f64::from(params.height()),
            max_iterations: params.max_iterations(),
        }
    }

    #[must_use]
    pub fn pixel_to_complex(&self, pixel: Point) -> Complex {
        Complex {
            real: self.start.real + f64::from(pixel.x) * self.dx,
            imag: self.start.imag + f64::from(pixel.y) * self.dy,
        }
    }
}

/// Counts iterations of `z = z² + c` until `|z|² >= 4` or `max_iterations`.
///
/// The orbit starts at `z = c`, not at the origin. A NaN orbit fails the `< 4`
/// check on entry and counts as escaping at 0.
#[must_use]
pub fn escape_count(c: Complex, max_iterations: u32) -> u32 {
    let mut z = c;
    let mut iterations = 0;

    while iterations < max_iterations && z.magnitude_squared() < ESCAPE_RADIUS_SQUARED {
        z = z.square() + c;
        iterations += 1;
    }

    iterations
}

impl FractalAlgorithm for MandelbrotAlgorithm {
    type Success = u32;

    fn compute(&self, pixel: Point) -> u32 {
        escape_count(self.pixel_to_complex(pixel), self.max_iterations)
    }
}
