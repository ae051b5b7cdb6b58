use std::hash::{Hash, Hasher};

use thiserror::Error;

use crate::core::data::complex_rect::ComplexRect;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RenderParamsError {
    #[error("image size must be positive: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}

/// Everything that determines a rendered image: resolution, iteration cap
/// and viewport. Doubles as the render cache key.
///
/// Equality and hashing use the exact bit patterns of the viewport bounds, so
/// two params are the same key only if they would produce the same image.
#[derive(Debug, Copy, Clone)]
pub struct RenderParams {
    width: u32,
    height: u32,
    max_iterations: u32,
    region: ComplexRect,
}

impl RenderParams {
    pub fn new(
        width: u32,
        height: u32,
        max_iterations: u32,
        region: ComplexRect,
    ) -> Result<Self, RenderParamsError> {
        if width == 0 || height == 0 {
            return Err(RenderParamsError::ZeroSize { width, height });
        }

        if max_iterations == 0 {
            return Err(RenderParamsError::ZeroMaxIterations);
        }

        Ok(Self {
            width,
            height,
            max_iterations,
            region,
        })
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
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn region(&self) -> ComplexRect {
        self.region
    }

    fn key(&self) -> (u32, u32, u32, [u64; 4]) {
        (self.width, self.height, self.max_iterations, self.region.to_bits())
    }
}

impl PartialEq for RenderParams {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for RenderParams {}

impl Hash for RenderParams {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}
