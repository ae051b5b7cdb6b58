pub mod mandelbrot_kernel;
pub mod ports;
