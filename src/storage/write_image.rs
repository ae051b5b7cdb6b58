use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use log::info;
use thiserror::Error;

use crate::controllers::render::request::DispatchError;
use crate::controllers::render::service::RenderService;
use crate::core::actions::render_image::ports::render_kernel::RenderKernel;
use crate::core::data::render_params::RenderParams;

#[derive(Debug, Error)]
pub enum WriteImageError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: String,
        source: std::io::Error,
    },
    #[error(transparent)]
    Dispatch(#[from] DispatchError),
}

/// Renders `params` through the service into a new file at `filepath`,
/// blocking until the file has been written.
pub fn write_image<K: RenderKernel + 'static>(
    service: &RenderService<K>,
    params: RenderParams,
    filepath: impl AsRef<Path>,
) -> Result<(), WriteImageError> {
    let path = filepath.as_ref();
    let file = File::create(path).map_err(|source| WriteImageError::Create {
        path: path.display().to_string(),
        source,
    })?;

    service.render(params, BufWriter::new(file))?;
    info!("saved to {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::render::config::ServiceConfig;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;

    fn params() -> RenderParams {
        let region =
            ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        RenderParams::new(512, 512, 32, region).unwrap()
    }

    #[test]
    fn test_write_image_creates_png_file() {
        let service = RenderService::new(ServiceConfig::with_workers(1)).unwrap();
        let path = std::env::temp_dir().join(format!("mandel_server_{}.png", std::process::id()));

        write_image(&service, params(), &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
        assert_eq!(bytes, service.render_to_vec(params()).unwrap());
    }

    #[test]
    fn test_write_image_reports_unwritable_path() {
        let service = RenderService::new(ServiceConfig::with_workers(1)).unwrap();
        let path = std::env::temp_dir()
            .join("mandel_server_missing_dir")
            .join("nested")
            .join("out.png");

        let result = write_image(&service, params(), &path);

        assert!(matches!(result, Err(WriteImageError::Create { .. })));
    }
}
