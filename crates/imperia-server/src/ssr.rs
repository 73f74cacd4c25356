//! The SSR orchestrator.

use std::panic::{AssertUnwindSafe, catch_unwind};

use imperia_meta::{MetaResolver, MetadataRecord, render_head};
use imperia_pages::render_route;
use tracing::warn;

use crate::template::{BODY_OUTLET, Template};

/// Placeholder body used when the route render fails.
///
/// The client bootstrap re-renders on load, so a failed server render
/// degrades to a client-rendered page rather than an error response.
const FALLBACK_BODY: &str = "<div id=\"ssr-fallback\">Loading...</div>";

/// Output of one full-page render.
///
/// `head_fragment` is always derived from `metadata` by the same call that
/// produced it; the two cannot drift.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderResult {
	pub body_markup: String,
	pub head_fragment: String,
	pub metadata: MetadataRecord,
}

/// Coordinates metadata resolution, body render, head render and template
/// merge for each request.
///
/// Holds only immutable configuration — the resolver's static table and
/// the validated template — so one engine serves concurrent requests
/// without shared mutable state.
pub struct SsrEngine {
	resolver: MetaResolver,
	template: Template,
}

impl SsrEngine {
	/// Creates an engine over a resolver and a validated template.
	pub fn new(resolver: MetaResolver, template: Template) -> Self {
		Self { resolver, template }
	}

	/// Returns the metadata resolver.
	pub fn resolver(&self) -> &MetaResolver {
		&self.resolver
	}

	/// Handles one request path, always producing a complete document.
	pub fn handle(&self, request_path: &str) -> String {
		let result = self.render(request_path);
		self.merge(&result)
	}

	/// Runs RESOLVE_METADATA, RENDER_BODY and RENDER_HEAD.
	///
	/// Metadata resolution cannot fail. A body render failure (panic or
	/// route-table error) transitions to the ERROR branch: the placeholder
	/// body is substituted and the already-resolved metadata is kept, so
	/// the response still carries correct head content.
	pub fn render(&self, request_path: &str) -> RenderResult {
		let metadata = self.resolver.resolve(request_path);

		let body_markup = match catch_unwind(AssertUnwindSafe(|| render_route(request_path))) {
			Ok(Ok(markup)) => markup,
			Ok(Err(err)) => {
				warn!(path = request_path, error = %err, "route render failed, serving fallback");
				FALLBACK_BODY.to_string()
			}
			Err(_) => {
				warn!(path = request_path, "route render panicked, serving fallback");
				FALLBACK_BODY.to_string()
			}
		};

		let head_fragment = render_head(&metadata);

		RenderResult {
			body_markup,
			head_fragment,
			metadata,
		}
	}

	/// MERGE: three deterministic text substitutions against the template.
	///
	/// 1. Replace the default `<title>…</title>` with the resolved title.
	/// 2. Insert the head fragment (with its own `<title>` stripped, since
	///    the title was already substituted) before `</head>`.
	/// 3. Replace the single body outlet marker — first match only, so an
	///    outlet marker appearing literally in the body markup survives.
	fn merge(&self, result: &RenderResult) -> String {
		let mut html = self.template.html().to_string();

		let (fragment_title, fragment_rest) = split_title(&result.head_fragment);
		if let Some(title_tag) = fragment_title
			&& let Some(range) = title_range(&html)
		{
			html.replace_range(range, &title_tag);
		}

		if !fragment_rest.is_empty()
			&& let Some(head_close) = html.find("</head>")
		{
			html.insert_str(head_close, &fragment_rest);
		}

		html.replacen(BODY_OUTLET, &result.body_markup, 1)
	}
}

/// Splits a head fragment into its `<title>` element and the remainder.
fn split_title(fragment: &str) -> (Option<String>, String) {
	let Some(range) = title_range(fragment) else {
		return (None, fragment.to_string());
	};
	let title = fragment[range.clone()].to_string();
	let mut rest = String::with_capacity(fragment.len() - title.len());
	rest.push_str(&fragment[..range.start]);
	// Drop the newline the renderer places after the title element.
	let after = fragment[range.end..].strip_prefix('\n').unwrap_or(&fragment[range.end..]);
	rest.push_str(after);
	(Some(title), rest)
}

/// Byte range of the first `<title>…</title>` element.
fn title_range(html: &str) -> Option<std::ops::Range<usize>> {
	let start = html.find("<title>")?;
	let end = html[start..].find("</title>")? + start + "</title>".len();
	Some(start..end)
}

#[cfg(test)]
mod tests {
	use super::*;
	use imperia_meta::OgType;

	fn engine() -> SsrEngine {
		SsrEngine::new(MetaResolver::default(), Template::builtin().unwrap())
	}

	#[test]
	fn test_handle_about_round_trip() {
		let html = engine().handle("/about");

		assert_eq!(html.matches("<title>").count(), 1);
		assert!(html.contains("<title>About Us | Imperia Consulting Real Estate</title>"));
		assert!(html.contains("About Imperia Consulting"));
		assert!(!html.contains(BODY_OUTLET));
	}

	#[test]
	fn test_render_result_metadata_matches_fragment() {
		let result = engine().render("/contact");
		assert_eq!(result.head_fragment, render_head(&result.metadata));
	}

	#[test]
	fn test_unmatched_path_still_responds() {
		let html = engine().handle("/this-does-not-exist");
		assert!(html.contains("Page Not Found"));
		assert!(html.contains("<title>Imperia Consulting | Premier Real Estate in Kenya</title>"));
	}

	#[test]
	fn test_blog_route_placeholder_metadata() {
		let html = engine().handle("/blog/market-trends-2025");
		assert!(html.contains("<title>Blog Post | Imperia Consulting</title>"));
		assert!(html.contains("content=\"article\""));
		assert!(html.contains("aria-busy=\"true\""));
	}

	#[test]
	fn test_merge_with_empty_fragment_is_well_formed() {
		let engine = engine();
		let result = RenderResult {
			body_markup: "<p>body</p>".to_string(),
			head_fragment: String::new(),
			metadata: engine.resolver.resolve("/"),
		};
		let html = engine.merge(&result);

		assert!(html.contains("<p>body</p>"));
		assert!(html.contains("<title>Imperia Consulting | Premier Real Estate in Kenya</title>"));
		assert!(html.contains("</head>"));
	}

	#[test]
	fn test_merge_replaces_outlet_once() {
		let engine = engine();
		let body = format!("<p>literal marker: {}</p>", BODY_OUTLET);
		let result = RenderResult {
			body_markup: body.clone(),
			head_fragment: String::new(),
			metadata: engine.resolver.resolve("/"),
		};
		let html = engine.merge(&result);

		// The literal marker inside the body markup survives untouched.
		assert_eq!(html.matches(BODY_OUTLET).count(), 1);
		assert!(html.contains(&body));
	}

	#[test]
	fn test_no_second_title_after_merge() {
		let html = engine().handle("/blogs");
		assert_eq!(html.matches("<title>").count(), 1);
		assert_eq!(html.matches("</title>").count(), 1);
	}

	#[test]
	fn test_blog_metadata_og_type() {
		let result = engine().render("/blog/anything");
		assert_eq!(result.metadata.og_type, OgType::Article);
		assert!(result.metadata.is_blog_post);
	}
}
