//! The canonical route table and the server render entry point.

use crate::component::Component;
use crate::layout::app_layout;
use crate::router::{Router, RouterError};
use crate::screens::{About, BlogIndex, BlogPost, Contact, Home, NotFound, Properties, ViewProperty};

/// Every pattern the router registers, including the wildcard.
///
/// The metadata table is checked against this list at startup; the two must
/// stay in lockstep.
pub fn route_patterns() -> [&'static str; 8] {
	[
		"/",
		"/about",
		"/properties",
		"/property/{id}",
		"/contact",
		"/blogs",
		"/blog/{slug}",
		"*",
	]
}

/// Builds a fresh router over the application's route tree.
///
/// Constructed per request (server) and per navigation (client) — router
/// state is never shared between renders. Data-dependent routes register
/// their `Loading` state; real content arrives via the hydration path.
pub fn app_router() -> Result<Router, RouterError> {
	Ok(Router::new()
		.route("/", |_| Home.render())?
		.route("/about", |_| About.render())?
		.route("/properties", |_| Properties.render())?
		.route("/property/{id}", |m| {
			ViewProperty::for_id(m.param("id")).render()
		})?
		.route("/contact", |_| Contact.render())?
		.route("/blogs", |_| BlogIndex::loading().render())?
		.route("/blog/{slug}", |m| {
			BlogPost::loading(m.param("slug")).render()
		})?
		.not_found(|_| NotFound.render()))
}

/// Renders the full route tree for a request path to markup.
///
/// Builds an isolated router, renders the matched screen inside the shared
/// layout, and serializes. This is the Page Renderer's server entry point;
/// the client's first paint runs the same code, so the two agree byte for
/// byte at hydration time.
pub fn render_route(path: &str) -> Result<String, RouterError> {
	let router = app_router()?;
	let content = router.render(path);
	Ok(app_layout(path, content).render_to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_router_builds() {
		let router = app_router().unwrap();
		assert_eq!(router.route_count(), 7);
	}

	#[test]
	fn test_every_pattern_is_registered_or_wildcard() {
		// route_patterns() lists the 7 registered routes plus "*".
		assert_eq!(route_patterns().len(), 8);
		assert!(route_patterns().contains(&"*"));
	}

	#[test]
	fn test_render_route_home() {
		let html = render_route("/").unwrap();
		assert!(html.contains("Premier Real Estate in Kenya"));
		assert!(html.contains("<header"));
	}

	#[test]
	fn test_render_route_blog_detail_is_placeholder() {
		let html = render_route("/blog/market-trends-2025").unwrap();
		assert!(html.contains("aria-busy=\"true\""));
	}

	#[test]
	fn test_render_route_unknown_path_is_not_found() {
		let html = render_route("/this-does-not-exist").unwrap();
		assert!(html.contains("Page Not Found"));
	}

	#[test]
	fn test_renders_are_isolated() {
		// Two sequential renders with different paths must not leak state.
		let about = render_route("/about").unwrap();
		let contact = render_route("/contact").unwrap();
		assert!(about.contains("About Imperia Consulting"));
		assert!(!about.contains("Contact Us"));
		assert!(contact.contains("Contact Us"));
		assert!(!contact.contains("About Imperia Consulting"));
	}
}
