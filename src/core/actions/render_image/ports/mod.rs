pub mod render_kernel;
