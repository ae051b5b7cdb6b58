use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RenderedImageError {
    #[error("image size {width}x{height} does not match buffer size {buffer_size}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        buffer_size: usize,
    },
}

/// Row-major grid of palette indices. Immutable once built; the cache hands
/// out shared references to the same buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    width: u32,
    height: u32,
    indices: Vec<u8>,
}

impl RenderedImage {
    pub fn from_indices(
        width: u32,
        height: u32,
        indices: Vec<u8>,
    ) -> Result<Self, RenderedImageError> {
        if width as usize * height as usize != indices.len() {
            return Err(RenderedImageError::BoundsMismatch {
                width,
                height,
                buffer_size: indices.len(),
            });
        }

        Ok(Self {
            width,
            height,
            indices,
        })
    }

    /// Wraps a buffer whose length the caller already derived from
    /// `width x height`.
    pub(crate) fn from_grid(width: u32, height: u32, indices: Vec<u8>) -> Self {
        debug_assert_eq!(width as usize * height as usize, indices.len());

        Self {
            width,
            height,
            indices,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.indices.chunks_exact(self.width.max(1) as usize)
    }
}
