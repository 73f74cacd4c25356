//! Browser-side head backend and hydration entry point.
//!
//! Compiled only for `wasm32`. [`DomHead`] implements the upsert contract
//! over the live document; [`boot`] attaches to the server markup and
//! schedules the content fetch for data-dependent routes.

use std::sync::OnceLock;

use imperia_content::{ContentConfig, ContentQuery, SanityClient};
use imperia_meta::{HeadSink, MetaResolver};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::{HydrationController, NavigationToken, patch_route_metadata};
use crate::component::Component;
use crate::layout::app_layout;
use crate::routes::render_route;
use crate::screens::{BlogIndex, BlogPost};

/// Id of the hydration root element in the HTML template.
const ROOT_ID: &str = "root";

/// One controller for the lifetime of the loaded document.
fn controller() -> &'static HydrationController {
	static CONTROLLER: OnceLock<HydrationController> = OnceLock::new();
	CONTROLLER.get_or_init(HydrationController::new)
}

/// Head backend over the live document.
pub struct DomHead {
	document: Document,
}

impl DomHead {
	/// Creates a backend over the given document.
	pub fn new(document: Document) -> Self {
		Self { document }
	}

	/// Finds an existing head element or creates and appends a new one.
	fn find_or_create(&self, selector: &str, tag: &str) -> Option<Element> {
		if let Ok(Some(existing)) = self.document.query_selector(selector) {
			return Some(existing);
		}
		let head = self.document.head()?;
		let element = self.document.create_element(tag).ok()?;
		head.append_child(&element).ok()?;
		Some(element)
	}
}

impl HeadSink for DomHead {
	fn set_title(&mut self, title: &str) {
		self.document.set_title(title);
	}

	fn upsert_meta_name(&mut self, name: &str, content: &str) {
		let selector = format!("meta[name=\"{}\"]", name);
		if let Some(element) = self.find_or_create(&selector, "meta") {
			let _ = element.set_attribute("name", name);
			let _ = element.set_attribute("content", content);
		}
	}

	fn upsert_meta_property(&mut self, property: &str, content: &str) {
		let selector = format!("meta[property=\"{}\"]", property);
		if let Some(element) = self.find_or_create(&selector, "meta") {
			let _ = element.set_attribute("property", property);
			let _ = element.set_attribute("content", content);
		}
	}

	fn upsert_canonical(&mut self, href: &str) {
		if let Some(element) = self.find_or_create("link[rel=\"canonical\"]", "link") {
			let _ = element.set_attribute("rel", "canonical");
			let _ = element.set_attribute("href", href);
		}
	}

	fn upsert_json_ld(&mut self, payload: &str) {
		if let Some(element) =
			self.find_or_create("script[type=\"application/ld+json\"]", "script")
		{
			let _ = element.set_attribute("type", "application/ld+json");
			element.set_text_content(Some(payload));
		}
	}
}

/// Hydration entry point, invoked once on load and again per client-side
/// navigation.
#[wasm_bindgen]
pub fn boot() {
	console_error_panic_hook::set_once();

	let Some(window) = web_sys::window() else {
		return;
	};
	let Some(document) = window.document() else {
		return;
	};
	let location = window.location();
	let path = location.pathname().unwrap_or_else(|_| "/".to_string());
	let search_term = location
		.search()
		.ok()
		.and_then(|search| super::query_param(&search, "q"));

	attach(&document, &path);

	let token = controller().begin_navigation();
	schedule_route_data(document, path, search_term, token);
}

/// Re-renders the route tree and reconciles the root element.
///
/// When the expected markup matches what the server delivered — the normal
/// case, since both sides render the same loading placeholders — the DOM is
/// left untouched.
fn attach(document: &Document, path: &str) {
	let Some(root) = document.get_element_by_id(ROOT_ID) else {
		web_sys::console::warn_1(&format!("[hydrate] #{} not found", ROOT_ID).into());
		return;
	};
	match render_route(path) {
		Ok(markup) => {
			if root.inner_html() != markup {
				root.set_inner_html(&markup);
			}
		}
		Err(err) => {
			web_sys::console::error_1(&format!("[hydrate] render failed: {}", err).into());
		}
	}
}

/// Fetches the content for data-dependent routes, then swaps in the loaded
/// screen and patches the document head.
fn schedule_route_data(
	document: Document,
	path: String,
	search_term: Option<String>,
	token: NavigationToken,
) {
	let slug = path
		.strip_prefix("/blog/")
		.filter(|rest| !rest.is_empty())
		.map(str::to_string);
	let is_index = path.trim_end_matches('/') == "/blogs";
	if slug.is_none() && !is_index {
		return;
	}

	spawn_local(async move {
		let client = SanityClient::new(ContentConfig::default());
		let resolver = MetaResolver::default();

		if let Some(slug) = slug {
			let screen = match client.post_by_slug(&slug).await {
				Ok(Some(post)) => {
					let categories: Vec<String> = post
						.categories
						.iter()
						.map(|category| category.id.clone())
						.collect();
					let related = client
						.related_posts(&categories, &post.id, 3)
						.await
						.unwrap_or_default();
					BlogPost::loaded(post, related, client.images().clone())
				}
				Ok(None) => BlogPost::not_found(slug.clone()),
				Err(err) => {
					web_sys::console::error_1(
						&format!("[hydrate] post fetch failed: {}", err).into(),
					);
					BlogPost::failed(slug.clone())
				}
			};

			if !controller().is_current(token) {
				return;
			}
			swap_screen(&document, &path, screen.render());
			let mut head = DomHead::new(document.clone());
			patch_route_metadata(
				controller(),
				token,
				&resolver,
				&path,
				screen.post_meta().as_ref(),
				&mut head,
			);
		} else {
			let fetched = match &search_term {
				Some(term) => client.search_posts(term).await,
				None => client.posts_page(10, 0).await,
			};
			let screen = match fetched {
				Ok(posts) => BlogIndex::loaded(posts, client.images().clone()),
				Err(err) => {
					web_sys::console::error_1(
						&format!("[hydrate] post list fetch failed: {}", err).into(),
					);
					BlogIndex::failed()
				}
			};
			if !controller().is_current(token) {
				return;
			}
			swap_screen(&document, &path, screen.render());
		}
	});
}

/// Replaces the root content with a re-render around the given screen.
fn swap_screen(document: &Document, path: &str, content: crate::view::Page) {
	if let Some(root) = document.get_element_by_id(ROOT_ID) {
		let markup = app_layout(path, content).render_to_string();
		root.set_inner_html(&markup);
	}
}
