mod controllers;
mod core;
mod input;
mod presenters;
mod storage;

pub use crate::controllers::ports::image_presenter::{EncodeError, ImagePresenterPort};
pub use crate::controllers::render::config::ServiceConfig;
pub use crate::controllers::render::request::{DispatchError, EmitError, RenderTicket, SharedBuffer};
pub use crate::controllers::render::service::RenderService;
pub use crate::core::actions::generate_fractal::generate_fractal_parallel_rayon::generate_fractal_parallel_rayon;
pub use crate::core::actions::generate_fractal::generate_fractal_serial::generate_fractal_serial;
pub use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::generate_index_buffer::ports::colour_map::ColourMap;
pub use crate::core::actions::render_image::mandelbrot_kernel::MandelbrotKernel;
pub use crate::core::actions::render_image::ports::render_kernel::RenderKernel;
pub use crate::core::cache::render_cache::{CacheStats, RenderCache};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_params::{RenderParams, RenderParamsError};
pub use crate::core::data::rendered_image::{RenderedImage, RenderedImageError};
pub use crate::core::fractals::mandelbrot::algorithm::{MandelbrotAlgorithm, escape_count};
pub use crate::core::fractals::mandelbrot::colour_map::MandelbrotPaletteMap;
pub use crate::core::fractals::mandelbrot::palette::default_palette;
pub use crate::input::http::params::{HTTP_IMAGE_SIZE, ParamsError, parse_render_path};
pub use crate::input::http::server::{HttpServer, ServeError, ServerStopper};
pub use crate::presenters::file::indexed_png::PngPresenter;
pub use crate::presenters::file::ppm::PpmPresenter;
pub use crate::storage::write_image::{WriteImageError, write_image};
