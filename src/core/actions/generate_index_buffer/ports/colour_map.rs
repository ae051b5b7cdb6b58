/// Maps a per-pixel fractal value to a palette index.
pub trait ColourMap<T> {
    fn map(&self, value: T) -> u8;
}
