pub mod indexed_png;
pub mod ppm;
