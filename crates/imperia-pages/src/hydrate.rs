//! Client hydration bootstrap.
//!
//! On load the client attaches to the server-delivered markup using the
//! same route tree and the path from the current location. For
//! data-dependent routes it then fetches the route's content and patches
//! the live document head element by element through the upsert backend.
//!
//! Patches are keyed by a navigation epoch: a patch computed for a route
//! the user has already left is discarded, never applied. The controller
//! and [`patch_route_metadata`] are target-independent and fully testable;
//! the `web-sys`-backed [`DomHead`](dom::DomHead) and the WASM entry point
//! live in [`dom`], compiled only for the browser target.

use std::sync::atomic::{AtomicU64, Ordering};

use imperia_meta::{BlogPostMeta, HeadSink, MetaResolver, apply_head};

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// A navigation's identity, handed out by [`HydrationController::begin_navigation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationToken(u64);

/// Tracks the current navigation so late-arriving metadata patches for
/// abandoned routes can be suppressed.
///
/// One controller lives for the lifetime of the loaded document; each
/// navigation begins by taking a fresh token, and every asynchronous patch
/// carries the token of the navigation that scheduled it.
#[derive(Debug, Default)]
pub struct HydrationController {
	epoch: AtomicU64,
}

impl HydrationController {
	/// Creates a controller with no navigation begun.
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new navigation, invalidating all earlier tokens.
	pub fn begin_navigation(&self) -> NavigationToken {
		NavigationToken(self.epoch.fetch_add(1, Ordering::SeqCst) + 1)
	}

	/// Whether the token still identifies the active navigation.
	pub fn is_current(&self, token: NavigationToken) -> bool {
		self.epoch.load(Ordering::SeqCst) == token.0
	}
}

/// Recomputes a route's metadata and patches the document head.
///
/// `post_meta` carries the fetched content for a loaded blog post; without
/// it the resolver's static/placeholder record is used. Returns `false`
/// without touching the head when `token` no longer identifies the active
/// navigation.
pub fn patch_route_metadata(
	controller: &HydrationController,
	token: NavigationToken,
	resolver: &MetaResolver,
	path: &str,
	post_meta: Option<&BlogPostMeta>,
	sink: &mut dyn HeadSink,
) -> bool {
	if !controller.is_current(token) {
		return false;
	}
	let record = match post_meta {
		Some(meta) => resolver.blog_post_record(path, meta),
		None => resolver.resolve(path),
	};
	apply_head(&record, sink);
	true
}

/// Extracts a query parameter from a `?key=value&…` search string.
///
/// Handles form-encoded values (`+` for space, percent escapes); used by
/// the bootstrap to pick up the blog search term.
pub fn query_param(search: &str, name: &str) -> Option<String> {
	let search = search.strip_prefix('?').unwrap_or(search);
	for pair in search.split('&') {
		let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
		if key == name {
			let value = value.replace('+', " ");
			return Some(
				urlencoding::decode(&value)
					.map(|decoded| decoded.into_owned())
					.unwrap_or(value),
			);
		}
	}
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use imperia_meta::MemoryHead;

	#[test]
	fn test_query_param_extraction() {
		assert_eq!(
			query_param("?q=market+trends&page=2", "q"),
			Some("market trends".to_string())
		);
		assert_eq!(
			query_param("?q=na%C3%AFrobi", "q"),
			Some("naïrobi".to_string())
		);
		assert_eq!(query_param("?page=2", "q"), None);
		assert_eq!(query_param("", "q"), None);
	}

	#[test]
	fn test_patch_applies_for_current_navigation() {
		let controller = HydrationController::new();
		let resolver = MetaResolver::default();
		let mut head = MemoryHead::new();

		let token = controller.begin_navigation();
		let applied =
			patch_route_metadata(&controller, token, &resolver, "/about", None, &mut head);

		assert!(applied);
		assert_eq!(
			head.title(),
			Some("About Us | Imperia Consulting Real Estate")
		);
	}

	#[test]
	fn test_stale_patch_is_discarded() {
		let controller = HydrationController::new();
		let resolver = MetaResolver::default();
		let mut head = MemoryHead::new();

		// Navigate to /blog/a; its fetch is still in flight when the user
		// moves on to /blog/b.
		let token_a = controller.begin_navigation();
		let token_b = controller.begin_navigation();

		let meta_b = BlogPostMeta {
			title: "Post B".to_string(),
			..BlogPostMeta::default()
		};
		assert!(patch_route_metadata(
			&controller,
			token_b,
			&resolver,
			"/blog/b",
			Some(&meta_b),
			&mut head,
		));

		// /blog/a's fetch resolves late; its patch must not land.
		let meta_a = BlogPostMeta {
			title: "Post A".to_string(),
			..BlogPostMeta::default()
		};
		let applied = patch_route_metadata(
			&controller,
			token_a,
			&resolver,
			"/blog/a",
			Some(&meta_a),
			&mut head,
		);

		assert!(!applied);
		assert_eq!(head.title(), Some("Post B | Imperia Consulting Blog"));
	}

	#[test]
	fn test_repeated_patch_keeps_single_elements() {
		let controller = HydrationController::new();
		let resolver = MetaResolver::default();
		let mut head = MemoryHead::new();

		let token = controller.begin_navigation();
		patch_route_metadata(&controller, token, &resolver, "/contact", None, &mut head);
		let count = head.element_count();
		patch_route_metadata(&controller, token, &resolver, "/contact", None, &mut head);

		assert_eq!(head.element_count(), count);
	}

	#[test]
	fn test_tokens_are_per_navigation() {
		let controller = HydrationController::new();
		let first = controller.begin_navigation();
		assert!(controller.is_current(first));
		let second = controller.begin_navigation();
		assert!(!controller.is_current(first));
		assert!(controller.is_current(second));
	}
}
