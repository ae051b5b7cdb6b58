//! Blocking HTTP front end. Each inbound request gets its own thread, which
//! parses the path, submits a render and waits on its completion signal
//! before answering.

use std::io::{Cursor, Read};
use std::net::SocketAddr;
use std::sync::Arc;
use std::thread;

use log::{error, info, warn};
use thiserror::Error;
use tiny_http::{Header, Request, Response, Server};

use super::params::parse_render_path;
use crate::controllers::render::service::RenderService;
use crate::core::actions::render_image::ports::render_kernel::RenderKernel;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {message}")]
    Bind { addr: String, message: String },
}

pub struct HttpServer {
    server: Arc<Server>,
}

impl HttpServer {
    pub fn bind(addr: &str) -> Result<Self, ServeError> {
        let server = Server::http(addr).map_err(|err| ServeError::Bind {
            addr: addr.to_string(),
            message: err.to_string(),
        })?;

        Ok(Self {
            server: Arc::new(server),
        })
    }

    #[must_use]
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Handle that stops [`run`](Self::run) from another thread.
    #[must_use]
    pub fn stopper(&self) -> ServerStopper {
        ServerStopper {
            server: Arc::clone(&self.server),
        }
    }

    /// Serves requests until stopped.
    pub fn run<K: RenderKernel + 'static>(&self, service: Arc<RenderService<K>>) {
        if let Some(addr) = self.local_addr() {
            info!("listening on http://{addr}");
        }

        for request in self.server.incoming_requests() {
            let service = Arc::clone(&service);
            let spawned = thread::Builder::new()
                .name("http-request".to_string())
                .spawn(move || handle_request(request, &service));

            if let Err(err) = spawned {
                error!("failed to spawn request thread: {err}");
            }
        }

        info!("http server stopped");
    }
}

#[derive(Clone)]
pub struct ServerStopper {
    server: Arc<Server>,
}

impl ServerStopper {
    pub fn stop(&self) {
        self.server.unblock();
    }
}

/// The image is encoded into memory before the response starts, so a render
/// failure can still become a 500 and the body carries a Content-Length. A
/// peer that hangs up surfaces as a failed `respond`, not as an encode error.
fn handle_request<K: RenderKernel + 'static>(request: Request, service: &RenderService<K>) {
    let url = request.url().to_string();

    let params = match parse_render_path(&url) {
        Ok(params) => params,
        Err(err) => {
            warn!("rejecting {url}: {err}");
            respond(request, text_response(400, &err.to_string()));
            return;
        }
    };

    let region = params.region();
    info!(
        "requesting {url}: x {}..{}, y {}..{}, {} iterations",
        region.start().real,
        region.end().real,
        region.start().imag,
        region.end().imag,
        params.max_iterations()
    );

    let response = match service.render_to_vec(params) {
        Ok(bytes) => with_content_type(Response::from_data(bytes), service.content_type()),
        Err(err) => {
            error!("render of {url} failed: {err}");
            text_response(500, &err.to_string())
        }
    };

    respond(request, response);
}

fn respond<R: Read>(request: Request, response: Response<R>) {
    if let Err(err) = request.respond(response) {
        warn!("failed to send response: {err}");
    }
}

fn text_response(status: u16, body: &str) -> Response<Cursor<Vec<u8>>> {
    let response = Response::from_string(body).with_status_code(status);

    with_content_type(response, "text/plain; charset=utf-8")
}

fn with_content_type<R: Read>(response: Response<R>, value: &str) -> Response<R> {
    match Header::from_bytes(&b"Content-Type"[..], value.as_bytes()) {
        Ok(header) => response.with_header(header),
        Err(()) => response,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::render::config::ServiceConfig;
    use std::io::Write;
    use std::net::TcpStream;

    fn get(addr: SocketAddr, path: &str) -> Vec<u8> {
        let mut stream = TcpStream::connect(addr).unwrap();
        write!(stream, "GET {path} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n").unwrap();

        let mut response = Vec::new();
        stream.read_to_end(&mut response).unwrap();
        response
    }

    fn split_response(response: &[u8]) -> (String, Vec<u8>) {
        let end = response
            .windows(4)
            .position(|window| window == b"\r\n\r\n")
            .unwrap();

        (
            String::from_utf8_lossy(&response[..end]).to_string(),
            response[end + 4..].to_vec(),
        )
    }

    #[test]
    fn test_serves_png_and_rejects_bad_paths() {
        let service = Arc::new(RenderService::new(ServiceConfig::with_workers(2)).unwrap());
        let server = HttpServer::bind("127.0.0.1:0").unwrap();
        let addr = server.local_addr().unwrap();
        let stopper = server.stopper();

        let serving = {
            let service = Arc::clone(&service);
            thread::spawn(move || server.run(service))
        };

        let (head, body) = split_response(&get(addr, "/-2/-2/2/2/32"));
        assert!(head.starts_with("HTTP/1.1 200"), "{head}");
        assert!(head.contains("image/png"), "{head}");
        assert_eq!(&body[1..4], b"PNG");

        let (head, body) = split_response(&get(addr, "/abc/-2/2/2/32"));
        assert!(head.starts_with("HTTP/1.1 400"), "{head}");
        assert!(String::from_utf8_lossy(&body).contains("startY"));

        let (head, _) = split_response(&get(addr, "/favicon.ico"));
        assert!(head.starts_with("HTTP/1.1 400"), "{head}");

        // Only the one valid request reached the render service.
        assert_eq!(service.cache().stats().entries, 1);

        stopper.stop();
        serving.join().unwrap();
    }

    #[test]
    fn test_client_hangup_does_not_break_serving() {
        let service = Arc::new(RenderService::new(ServiceConfig::with_workers(1)).unwrap());
        let server = HttpServer::bind("127.0.0.1:0").unwrap();
        let addr = server.local_addr().unwrap();
        let stopper = server.stopper();

        let serving = {
            let service = Arc::clone(&service);
            thread::spawn(move || server.run(service))
        };

        {
            let mut stream = TcpStream::connect(addr).unwrap();
            write!(stream, "GET /-2/-2/2/2/48 HTTP/1.1\r\nHost: localhost\r\n\r\n").unwrap();
        }

        let (head, body) = split_response(&get(addr, "/-2/-2/2/2/48"));
        assert!(head.starts_with("HTTP/1.1 200"), "{head}");
        assert_eq!(&body[1..4], b"PNG");
        assert_eq!(service.cache().stats().entries, 1);

        stopper.stop();
        serving.join().unwrap();
    }
}
