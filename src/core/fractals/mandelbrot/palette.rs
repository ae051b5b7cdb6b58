/// Number of entries in the fixed palette.
pub const PALETTE_SIZE: usize = 256;

/// Palette slot reserved for points that never escaped.
pub const IN_SET_INDEX: u8 = 0;

const PALETTE_LUMA: u8 = 128;

pub type Rgb = [u8; 3];

/// The fixed 256-entry palette: black at index 0, then a chroma cycle at
/// constant luma.
#[must_use]
pub fn default_palette() -> [Rgb; PALETTE_SIZE] {
    let mut palette = [[0; 3]; PALETTE_SIZE];

    for (i, entry) in palette.iter_mut().enumerate().skip(1) {
        let cb = ((i * 191) % 256) as u8;
        let cr = (((i + 1) * 191) % 256) as u8;
        *entry = ycbcr_to_rgb(PALETTE_LUMA, cb, cr);
    }

    palette
}

/// Palette flattened to `[r, g, b, r, g, b, ...]` as PNG `PLTE` expects.
#[must_use]
pub fn flat_palette() -> Vec<u8> {
    default_palette().iter().flat_map(|rgb| rgb.iter().copied()).collect()
}

/// JFIF YCbCr to RGB in 16.16 fixed point, clamped to `0..=255`.
#[must_use]
pub fn ycbcr_to_rgb(y: u8, cb: u8, cr: u8) -> Rgb {
    let yy = i32::from(y) * 0x10101;
    let cb = i32::from(cb) - 128;
    let cr = i32::from(cr) - 128;

    [
        clamp_channel(yy + 91881 * cr),
        clamp_channel(yy - 22554 * cb - 46802 * cr),
        clamp_channel(yy + 116130 * cb),
    ]
}

fn clamp_channel(value: i32) -> u8 {
    (value >> 16).clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_set_entry_is_black() {
        assert_eq!(default_palette()[IN_SET_INDEX as usize], [0, 0, 0]);
    }

    #[test]
    fn test_neutral_chroma_is_grey() {
        assert_eq!(ycbcr_to_rgb(128, 128, 128), [128, 128, 128]);
        assert_eq!(ycbcr_to_rgb(0, 128, 128), [0, 0, 0]);
        assert_eq!(ycbcr_to_rgb(255, 128, 128), [255, 255, 255]);
    }

    #[test]
    fn test_conversion_clamps() {
        assert_eq!(ycbcr_to_rgb(255, 255, 255)[0], 255);
        assert_eq!(ycbcr_to_rgb(0, 0, 0)[0], 0);
    }

    #[test]
    fn test_first_coloured_entry() {
        // i = 1: cb = 191, cr = 126
        assert_eq!(default_palette()[1], ycbcr_to_rgb(128, 191, 126));
    }

    #[test]
    fn test_flat_palette_layout() {
        let flat = flat_palette();
        let palette = default_palette();

        assert_eq!(flat.len(), PALETTE_SIZE * 3);
        assert_eq!(&flat[3..6], &palette[1]);
    }
}
