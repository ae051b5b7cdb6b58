use std::io::Write;

use thiserror::Error;

use crate::core::data::rendered_image::RenderedImage;

#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("failed to write image: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode png: {0}")]
    Png(#[from] png::EncodingError),
}

/// Serializes a rendered image into a caller-supplied sink.
pub trait ImagePresenterPort: Send + Sync {
    fn present(&self, image: &RenderedImage, sink: &mut dyn Write) -> Result<(), EncodeError>;

    /// MIME type of the produced bytes.
    fn content_type(&self) -> &'static str;
}
