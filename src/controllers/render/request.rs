use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use flume::{Receiver, RecvTimeoutError, Sender};
use thiserror::Error;

use crate::controllers::ports::image_presenter::EncodeError;
use crate::core::data::render_params::RenderParams;

/// Destination for an encoded image.
pub type Sink = Box<dyn Write + Send>;

/// Failure while emitting a finished request. The completion signal still
/// fires with it.
#[derive(Debug, Error)]
pub enum EmitError {
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error("render worker panicked while handling the request")]
    Panicked,
}

/// Failure seen by the submitting caller.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("render service is shut down")]
    QueueClosed,
    #[error("request was dropped before completing")]
    Aborted,
    #[error("timed out after {0:?} waiting for render")]
    TimedOut(Duration),
    #[error(transparent)]
    Emit(#[from] EmitError),
}

pub(crate) type Completion = Result<(), EmitError>;

/// One render job on the shared queue: what to render, where to write it,
/// and the one-shot signal to fire once it has been written.
pub struct RenderRequest {
    pub(crate) params: RenderParams,
    pub(crate) sink: Sink,
    pub(crate) done: Sender<Completion>,
}

impl RenderRequest {
    pub(crate) fn new(params: RenderParams, sink: Sink) -> (Self, RenderTicket) {
        let (done, waiter) = flume::bounded(1);

        (Self { params, sink, done }, RenderTicket { waiter })
    }
}

/// Caller-side end of a request's completion signal.
#[must_use = "a ticket does nothing unless waited on"]
pub struct RenderTicket {
    waiter: Receiver<Completion>,
}

impl RenderTicket {
    /// Blocks until the request has been written to its sink.
    pub fn wait(self) -> Result<(), DispatchError> {
        match self.waiter.recv() {
            Ok(completion) => Ok(completion?),
            Err(_) => Err(DispatchError::Aborted),
        }
    }

    /// Like [`wait`](Self::wait) but gives up after `timeout`. The request
    /// keeps running; only the wait is abandoned.
    pub fn wait_timeout(self, timeout: Duration) -> Result<(), DispatchError> {
        match self.waiter.recv_timeout(timeout) {
            Ok(completion) => Ok(completion?),
            Err(RecvTimeoutError::Timeout) => Err(DispatchError::TimedOut(timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(DispatchError::Aborted),
        }
    }
}

/// In-memory sink the caller keeps a handle to while a worker writes into it.
#[derive(Debug, Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the bytes written so far, leaving the buffer empty.
    #[must_use]
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.bytes.lock().unwrap_or_else(PoisonError::into_inner))
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::complex::Complex;
    use crate::core::data::complex_rect::ComplexRect;

    fn params() -> RenderParams {
        let region =
            ComplexRect::new(Complex::new(-2.0, -2.0), Complex::new(2.0, 2.0)).unwrap();
        RenderParams::new(4, 4, 4, region).unwrap()
    }

    #[test]
    fn test_ticket_returns_completion() {
        let (request, ticket) = RenderRequest::new(params(), Box::new(io::sink()));

        request.done.send(Ok(())).unwrap();

        assert!(ticket.wait().is_ok());
    }

    #[test]
    fn test_ticket_reports_emit_error() {
        let (request, ticket) = RenderRequest::new(params(), Box::new(io::sink()));

        request.done.send(Err(EmitError::Panicked)).unwrap();

        assert!(matches!(
            ticket.wait(),
            Err(DispatchError::Emit(EmitError::Panicked))
        ));
    }

    #[test]
    fn test_dropped_request_aborts_ticket() {
        let (request, ticket) = RenderRequest::new(params(), Box::new(io::sink()));

        drop(request);

        assert!(matches!(ticket.wait(), Err(DispatchError::Aborted)));
    }

    #[test]
    fn test_wait_timeout_expires() {
        let (_request, ticket) = RenderRequest::new(params(), Box::new(io::sink()));

        let result = ticket.wait_timeout(Duration::from_millis(10));

        assert!(matches!(result, Err(DispatchError::TimedOut(_))));
    }

    #[test]
    fn test_shared_buffer_collects_writes_through_clones() {
        let buffer = SharedBuffer::new();
        let mut writer = buffer.clone();

        writer.write_all(b"abc").unwrap();
        writer.write_all(b"def").unwrap();

        assert_eq!(buffer.take(), b"abcdef");
        assert!(buffer.take().is_empty());
    }
}
