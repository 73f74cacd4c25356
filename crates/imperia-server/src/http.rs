//! The hyper-based HTTP surface.
//!
//! One catch-all route: any GET path renders a complete HTML document with
//! status 200. Render-local failures are absorbed by the orchestrator;
//! only transport-level failures reach the generic error path here.

use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper::{HeaderMap, StatusCode};
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info};

use crate::error::ServerError;
use crate::ssr::SsrEngine;

/// An incoming HTTP request, reduced to what the site needs.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: hyper::Method,
	pub path: String,
}

/// An outgoing HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Creates an HTML response with status 200.
	pub fn html(body: String) -> Self {
		let mut headers = HeaderMap::new();
		headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("text/html; charset=utf-8"),
		);
		Self {
			status: StatusCode::OK,
			headers,
			body: Bytes::from(body),
		}
	}

	/// Creates an empty 500 response for transport-level failures.
	pub fn internal_server_error() -> Self {
		Self {
			status: StatusCode::INTERNAL_SERVER_ERROR,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}
}

/// Request handler seam.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, req: Request) -> Result<Response, ServerError>;
}

/// The site's catch-all handler: every path goes through the SSR engine.
pub struct SiteHandler {
	engine: SsrEngine,
}

impl SiteHandler {
	/// Creates the handler over a configured engine.
	pub fn new(engine: SsrEngine) -> Self {
		Self { engine }
	}
}

#[async_trait]
impl Handler for SiteHandler {
	async fn handle(&self, req: Request) -> Result<Response, ServerError> {
		debug!(method = %req.method, path = %req.path, "rendering request");
		let html = self.engine.handle(&req.path);
		Ok(Response::html(html))
	}
}

/// HTTP server over a handler.
pub struct HttpServer {
	handler: Arc<dyn Handler>,
}

impl HttpServer {
	/// Creates a new server with the given handler.
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self { handler }
	}

	/// Starts the server and accepts connections until an error occurs.
	pub async fn listen(self, addr: SocketAddr) -> Result<(), ServerError> {
		let listener = TcpListener::bind(addr).await?;
		info!(%addr, "server listening");

		loop {
			let (stream, remote_addr) = listener.accept().await?;
			let handler = self.handler.clone();

			tokio::task::spawn(async move {
				if let Err(err) = Self::handle_connection(stream, handler).await {
					error!(%remote_addr, error = %err, "connection error");
				}
			});
		}
	}

	/// Serves HTTP/1.1 on one TCP connection.
	async fn handle_connection(
		stream: TcpStream,
		handler: Arc<dyn Handler>,
	) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
		let io = TokioIo::new(stream);
		let service = RequestService { handler };
		http1::Builder::new().serve_connection(io, service).await?;
		Ok(())
	}
}

/// Service implementation for hyper.
struct RequestService {
	handler: Arc<dyn Handler>,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = Box<dyn std::error::Error + Send + Sync>;
	type Future =
		Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = self.handler.clone();

		Box::pin(async move {
			let request = Request {
				method: req.method().clone(),
				path: req.uri().path().to_string(),
			};

			// The generic error path: unexpected internal failures become a
			// bare 500; render-local failures never surface here.
			let response = match handler.handle(request).await {
				Ok(response) => response,
				Err(err) => {
					error!(error = %err, "handler error");
					Response::internal_server_error()
				}
			};

			let mut hyper_response = hyper::Response::builder().status(response.status);
			for (key, value) in response.headers.iter() {
				hyper_response = hyper_response.header(key, value);
			}
			Ok(hyper_response.body(Full::new(response.body))?)
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::template::Template;
	use imperia_meta::MetaResolver;

	fn handler() -> SiteHandler {
		SiteHandler::new(SsrEngine::new(
			MetaResolver::default(),
			Template::builtin().unwrap(),
		))
	}

	#[tokio::test]
	async fn test_handler_returns_html_200() {
		let response = handler()
			.handle(Request {
				method: hyper::Method::GET,
				path: "/about".to_string(),
			})
			.await
			.unwrap();

		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(
			response.headers.get(hyper::header::CONTENT_TYPE).unwrap(),
			"text/html; charset=utf-8"
		);
		let body = String::from_utf8(response.body.to_vec()).unwrap();
		assert!(body.starts_with("<!DOCTYPE html>"));
	}

	#[tokio::test]
	async fn test_handler_catch_all_unknown_path() {
		let response = handler()
			.handle(Request {
				method: hyper::Method::GET,
				path: "/totally/unknown".to_string(),
			})
			.await
			.unwrap();

		assert_eq!(response.status, StatusCode::OK);
		let body = String::from_utf8(response.body.to_vec()).unwrap();
		assert!(body.contains("Page Not Found"));
	}
}
