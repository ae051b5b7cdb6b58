use crate::core::actions::generate_index_buffer::ports::colour_map::ColourMap;
use crate::core::fractals::mandelbrot::palette::{IN_SET_INDEX, PALETTE_SIZE};

/// Number of palette slots escaped points cycle through.
const ESCAPE_CYCLE: u32 = (PALETTE_SIZE - 1) as u32;

/// Maps escape counts onto the fixed palette: `max_iterations` is the in-set
/// slot, everything else cycles through slots `1..=255`.
#[derive(Debug, Clone, Copy)]
pub struct MandelbrotPaletteMap {
    max_iterations: u32,
}

impl MandelbrotPaletteMap {
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }
}

impl ColourMap<u32> for MandelbrotPaletteMap {
    fn map(&self, iterations: u32) -> u8 {
        if iterations >= self.max_iterations {
            return IN_SET_INDEX;
        }

        (1 + iterations % ESCAPE_CYCLE) as u8
    }
}
