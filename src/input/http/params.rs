use thiserror::Error;

use crate::core::data::complex::Complex;
use crate::core::data::complex_rect::{ComplexRect, ComplexRectError};
use crate::core::data::render_params::{RenderParams, RenderParamsError};

/// Resolution of every image served over HTTP.
pub const HTTP_IMAGE_SIZE: u32 = 256;

const SEGMENT_NAMES: [&str; 5] = ["startY", "startX", "endY", "endX", "maxIterations"];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    #[error("expected /startY/startX/endY/endX/maxIterations, got {found} path segments")]
    WrongSegmentCount { found: usize },
    #[error("{name} is not a valid number: {value:?}")]
    InvalidNumber { name: &'static str, value: String },
    #[error("invalid viewport: {0}")]
    Viewport(#[from] ComplexRectError),
    #[error("invalid render params: {0}")]
    Render(#[from] RenderParamsError),
}

/// Parses `/{startY}/{startX}/{endY}/{endX}/{maxIterations}` into params for a
/// fixed-size image. A query string, if present, is ignored.
pub fn parse_render_path(url: &str) -> Result<RenderParams, ParamsError> {
    let path = url.split_once('?').map_or(url, |(path, _)| path);
    let segments: Vec<&str> = path.strip_prefix('/').unwrap_or(path).split('/').collect();

    let [start_y, start_x, end_y, end_x, max_iterations] = segments.as_slice() else {
        return Err(ParamsError::WrongSegmentCount {
            found: segments.len(),
        });
    };

    let start_y = parse_float(SEGMENT_NAMES[0], start_y)?;
    let start_x = parse_float(SEGMENT_NAMES[1], start_x)?;
    let end_y = parse_float(SEGMENT_NAMES[2], end_y)?;
    let end_x = parse_float(SEGMENT_NAMES[3], end_x)?;
    let max_iterations: u32 = max_iterations.parse().map_err(|_| ParamsError::InvalidNumber {
        name: SEGMENT_NAMES[4],
        value: max_iterations.to_string(),
    })?;

    let region = ComplexRect::new(Complex::new(start_x, start_y), Complex::new(end_x, end_y))?;

    Ok(RenderParams::new(HTTP_IMAGE_SIZE, HTTP_IMAGE_SIZE, max_iterations, region)?)
}

fn parse_float(name: &'static str, value: &str) -> Result<f64, ParamsError> {
    value.parse().map_err(|_| ParamsError::InvalidNumber {
        name,
        value: value.to_string(),
    })
}
