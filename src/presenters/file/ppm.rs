use std::io::Write;

use crate::controllers::ports::image_presenter::{EncodeError, ImagePresenterPort};
use crate::core::data::rendered_image::RenderedImage;
use crate::core::fractals::mandelbrot::palette::{PALETTE_SIZE, Rgb, default_palette};

/// Binary P6 PPM, expanding each palette index to its RGB triple.
pub struct PpmPresenter {
    palette: [Rgb; PALETTE_SIZE],
}

impl ImagePresenterPort for PpmPresenter {
    fn present(&self, image: &RenderedImage, sink: &mut dyn Write) -> Result<(), EncodeError> {
        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(sink, "P6")?;
        writeln!(sink, "{} {}", image.width(), image.height())?;
        writeln!(sink, "255")?;

        for row in image.rows() {
            let rgb: Vec<u8> = row
                .iter()
                .flat_map(|&index| self.palette[index as usize])
                .collect();
            sink.write_all(&rgb)?;
        }

        Ok(())
    }

    fn content_type(&self) -> &'static str {
        "image/x-portable-pixmap"
    }
}

impl Default for PpmPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl PpmPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: default_palette(),
        }
    }
}
