/// Pixel position inside a render grid, `x` along a row and `y` down the columns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}
