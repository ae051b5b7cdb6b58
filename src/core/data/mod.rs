pub mod complex;
pub mod complex_rect;
pub mod point;
pub mod render_params;
pub mod rendered_image;
