pub mod generate_fractal;
pub mod generate_index_buffer;
pub mod render_image;
