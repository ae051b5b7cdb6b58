use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
use crate::core::actions::generate_index_buffer::generate_index_buffer::generate_index_buffer;
use crate::core::actions::render_image::ports::render_kernel::RenderKernel;
use crate::core::data::render_params::RenderParams;
use crate::core::data::rendered_image::RenderedImage;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
use crate::core::fractals::mandelbrot::colour_map::MandelbrotPaletteMap;

/// Escape-time counts computed row-parallel, then mapped onto the palette.
#[derive(Debug, Default, Clone, Copy)]
pub struct MandelbrotKernel;

impl MandelbrotKernel {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Raw escape counts, row-major, each in `0..=max_iterations`.
    #[must_use]
    pub fn escape_counts(&self, params: &RenderParams) -> Vec<u32> {
        let algorithm = MandelbrotAlgorithm::new(params);

        generate_fractal_parallel_rayon(params.width(), params.height(), &algorithm)
    }
}

impl RenderKernel for MandelbrotKernel {
    fn render(&self, params: &RenderParams) -> RenderedImage {
        let colour_map = MandelbrotPaletteMap::new(params.max_iterations());
        let counts = self.escape_counts(params);

        generate_index_buffer(counts, &colour_map, params.width(), params.height())
    }
}
