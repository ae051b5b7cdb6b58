//! Render service - owns the cache, the request queue and the worker pool

use std::io::{self, Write};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use flume::Sender;
use log::{debug, info};

use super::config::ServiceConfig;
use super::request::{DispatchError, RenderRequest, RenderTicket, SharedBuffer};
use super::worker::render_worker;
use crate::controllers::ports::image_presenter::ImagePresenterPort;
use crate::core::actions::render_image::mandelbrot_kernel::MandelbrotKernel;
use crate::core::actions::render_image::ports::render_kernel::RenderKernel;
use crate::core::cache::render_cache::RenderCache;
use crate::core::data::render_params::RenderParams;
use crate::presenters::file::indexed_png::PngPresenter;

/// Long-lived render service shared by every caller.
///
/// Callers submit requests onto one queue; a fixed pool of workers takes them
/// off in any order, so requests may complete out of submission order.
/// Dropping the service closes the queue and joins the workers once the
/// queued requests have drained.
pub struct RenderService<K: RenderKernel + 'static = MandelbrotKernel> {
    request_tx: Option<Sender<RenderRequest>>,
    cache: Arc<RenderCache<K>>,
    presenter: Arc<dyn ImagePresenterPort>,
    workers: Vec<JoinHandle<()>>,
}

impl RenderService<MandelbrotKernel> {
    /// Mandelbrot kernel encoding indexed PNGs.
    pub fn new(config: ServiceConfig) -> io::Result<Self> {
        Self::with_parts(config, MandelbrotKernel::new(), Arc::new(PngPresenter::new()))
    }
}

impl<K: RenderKernel + 'static> RenderService<K> {
    pub fn with_parts(
        config: ServiceConfig,
        kernel: K,
        presenter: Arc<dyn ImagePresenterPort>,
    ) -> io::Result<Self> {
        let cache = Arc::new(RenderCache::new(kernel));

        // flume rather than std mpsc: every worker clones the receiver to
        // pull from the one shared queue.
        let (request_tx, request_rx) = flume::unbounded();

        let mut workers = Vec::with_capacity(config.workers());
        for id in 0..config.workers() {
            let rx = request_rx.clone();
            let cache = Arc::clone(&cache);
            let presenter = Arc::clone(&presenter);

            let handle = thread::Builder::new()
                .name(format!("render-worker-{id}"))
                .spawn(move || render_worker(id, rx, cache, presenter))?;
            workers.push(handle);
        }

        info!("render service started with {} workers", workers.len());

        Ok(Self {
            request_tx: Some(request_tx),
            cache,
            presenter,
            workers,
        })
    }

    /// Queues a render of `params` into `sink`. The returned ticket fires once
    /// the image has been written, or failed to be.
    pub fn submit<W>(&self, params: RenderParams, sink: W) -> Result<RenderTicket, DispatchError>
    where
        W: Write + Send + 'static,
    {
        let request_tx = self.request_tx.as_ref().ok_or(DispatchError::QueueClosed)?;
        let (request, ticket) = RenderRequest::new(params, Box::new(sink));

        request_tx
            .send(request)
            .map_err(|_| DispatchError::QueueClosed)?;

        Ok(ticket)
    }

    /// Submits and blocks until the completion signal fires.
    pub fn render<W>(&self, params: RenderParams, sink: W) -> Result<(), DispatchError>
    where
        W: Write + Send + 'static,
    {
        self.submit(params, sink)?.wait()
    }

    /// Renders into memory and returns the encoded bytes.
    pub fn render_to_vec(&self, params: RenderParams) -> Result<Vec<u8>, DispatchError> {
        let buffer = SharedBuffer::new();

        self.render(params, buffer.clone())?;

        Ok(buffer.take())
    }

    #[must_use]
    pub fn cache(&self) -> &RenderCache<K> {
        &self.cache
    }

    #[must_use]
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    #[must_use]
    pub fn content_type(&self) -> &'static str {
        self.presenter.content_type()
    }
}

impl<K: RenderKernel + 'static> Drop for RenderService<K> {
    fn drop(&mut self) {
        self.request_tx.take();

        for handle in self.workers.drain(..) {
            let _ = handle.join();
        }

        let stats = self.cache.stats();
        debug!(
            "render service stopped: {} hits, {} misses, {} cached images",
            stats.hits, stats.misses, stats.entries
        );
    }
}
