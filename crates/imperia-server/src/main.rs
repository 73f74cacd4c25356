//! Server binary: validates configuration, then serves the site.

use std::sync::Arc;

use imperia_meta::{MetaResolver, Site};
use imperia_pages::route_patterns;
use imperia_server::{HttpServer, ServerError, Settings, SiteHandler, SsrEngine, Template};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
		.init();

	let settings = Settings::from_env()?;

	// Template and route configuration fail fast at startup; a violation
	// here must never be discovered per request.
	let template = match &settings.template_path {
		Some(path) => {
			let html = std::fs::read_to_string(path).map_err(|source| {
				ServerError::TemplateIo {
					path: path.display().to_string(),
					source,
				}
			})?;
			Template::parse(html)?
		}
		None => Template::builtin()?,
	};

	let resolver = MetaResolver::new(Site::new(settings.base_url.as_str()));
	resolver.verify_coverage(route_patterns())?;
	imperia_pages::app_router()?;

	info!(base_url = %settings.base_url, "configuration validated");

	let engine = SsrEngine::new(resolver, template);
	let handler = Arc::new(SiteHandler::new(engine));
	HttpServer::new(handler).listen(settings.bind_addr).await
}
