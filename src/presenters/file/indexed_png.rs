use std::io::Write;

use crate::controllers::ports::image_presenter::{EncodeError, ImagePresenterPort};
use crate::core::data::rendered_image::RenderedImage;
use crate::core::fractals::mandelbrot::palette::flat_palette;

/// 8-bit indexed-colour PNG carrying the fixed palette.
pub struct PngPresenter {
    palette: Vec<u8>,
}

impl ImagePresenterPort for PngPresenter {
    fn present(&self, image: &RenderedImage, sink: &mut dyn Write) -> Result<(), EncodeError> {
        let mut encoder = png::Encoder::new(sink, image.width(), image.height());
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(self.palette.clone());

        let mut writer = encoder.write_header()?;
        writer.write_image_data(image.indices())?;
        writer.finish()?;

        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PngPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: flat_palette(),
        }
    }
}
