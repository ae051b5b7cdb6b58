//! Render worker - runs on each pool thread

use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use flume::Receiver;
use log::{debug, error, warn};

use super::request::{EmitError, RenderRequest, Sink};
use crate::controllers::ports::image_presenter::ImagePresenterPort;
use crate::core::actions::render_image::ports::render_kernel::RenderKernel;
use crate::core::cache::render_cache::RenderCache;
use crate::core::data::render_params::RenderParams;

/// Pulls requests off the shared queue until every sender is gone.
///
/// Every dequeued request gets exactly one completion, including when
/// encoding fails or the render panics.
pub(crate) fn render_worker<K: RenderKernel>(
    id: usize,
    requests: Receiver<RenderRequest>,
    cache: Arc<RenderCache<K>>,
    presenter: Arc<dyn ImagePresenterPort>,
) {
    debug!("render worker {id} started");

    while let Ok(RenderRequest { params, sink, done }) = requests.recv() {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            emit(&params, sink, &cache, presenter.as_ref())
        }));

        let completion = match outcome {
            Ok(Ok(())) => Ok(()),
            Ok(Err(err)) => {
                warn!("render worker {id}: failed to emit {params:?}: {err}");
                Err(err)
            }
            Err(_) => {
                error!("render worker {id}: panicked while rendering {params:?}");
                Err(EmitError::Panicked)
            }
        };

        // The caller may have stopped waiting; nothing to do then.
        let _ = done.send(completion);
    }

    debug!("render worker {id} stopped");
}

/// Cache lookup (rendering on a miss), then encode into the sink. The sink is
/// dropped before returning so the caller sees every byte once signalled.
fn emit<K: RenderKernel>(
    params: &RenderParams,
    mut sink: Sink,
    cache: &RenderCache<K>,
    presenter: &dyn ImagePresenterPort,
) -> Result<(), EmitError> {
    let image = cache.get_or_compute(params);

    presenter.present(&image, &mut sink)?;
    sink.flush().map_err(|err| EmitError::Encode(err.into()))?;

    Ok(())
}
