use crate::core::data::render_params::RenderParams;
use crate::core::data::rendered_image::RenderedImage;

/// Turns validated render params into a finished indexed image. Cannot fail.
pub trait RenderKernel: Send + Sync {
    fn render(&self, params: &RenderParams) -> RenderedImage;
}
