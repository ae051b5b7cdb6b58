use rayon::prelude::*;

use crate::core::actions::generate_index_buffer::ports::colour_map::ColourMap;
use crate::core::data::rendered_image::RenderedImage;

/// Builds an indexed image by mapping every fractal value through `mapper`.
///
/// `input` must be the row-major output of a generator run over the same
/// `width x height` grid.
pub fn generate_index_buffer<T, CMap>(
    input: Vec<T>,
    mapper: &CMap,
    width: u32,
    height: u32,
) -> RenderedImage
where
    T: Send,
    CMap: ColourMap<T> + Sync,
{
    let indices: Vec<u8> = input.into_par_iter().map(|value| mapper.map(value)).collect();

    RenderedImage::from_grid(width, height, indices)
}
