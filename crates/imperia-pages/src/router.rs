//! Request-scoped routing.
//!
//! A [`Router`] instance is constructed per server request (and per client
//! navigation) and dropped afterwards — routing state is never shared, so
//! two concurrent renders cannot observe each other's path or params.
//!
//! Patterns are Django-style: `/property/{id}` captures one path segment
//! as `id`. Matching is trailing-slash insensitive.

use std::collections::HashMap;
use std::sync::Arc;

use crate::view::Page;

/// Errors raised while building a router.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// The pattern could not be compiled.
	#[error("invalid route pattern `{pattern}`: {reason}")]
	InvalidPattern { pattern: String, reason: String },
}

/// A compiled path pattern.
#[derive(Debug, Clone)]
pub struct PathPattern {
	pattern: String,
	regex: regex::Regex,
	param_names: Vec<String>,
}

impl PathPattern {
	/// Compiles a pattern string.
	///
	/// `{name}` captures one non-empty path segment; literal text matches
	/// exactly.
	pub fn new(pattern: &str) -> Result<Self, RouterError> {
		let (regex_str, param_names) = Self::compile(pattern);
		let regex = regex::Regex::new(&regex_str).map_err(|e| RouterError::InvalidPattern {
			pattern: pattern.to_string(),
			reason: e.to_string(),
		})?;
		Ok(Self {
			pattern: pattern.to_string(),
			regex,
			param_names,
		})
	}

	fn compile(pattern: &str) -> (String, Vec<String>) {
		let mut regex_str = String::from("^");
		let mut param_names = Vec::new();
		let mut chars = pattern.chars().peekable();

		while let Some(c) = chars.next() {
			match c {
				'{' => {
					let mut param = String::new();
					while let Some(&next) = chars.peek() {
						chars.next();
						if next == '}' {
							break;
						}
						param.push(next);
					}
					regex_str.push_str(&format!("(?P<{}>[^/]+)", param));
					param_names.push(param);
				}
				'/' | '.' | '+' | '*' | '?' | '(' | ')' | '[' | ']' | '^' | '$' | '|' | '\\' => {
					regex_str.push('\\');
					regex_str.push(c);
				}
				_ => regex_str.push(c),
			}
		}

		regex_str.push('$');
		(regex_str, param_names)
	}

	/// Returns the original pattern string.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Attempts to match a path, returning extracted parameters.
	pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
		self.regex.captures(normalize(path)).map(|caps| {
			self.param_names
				.iter()
				.filter_map(|name| {
					caps.name(name)
						.map(|m| (name.clone(), m.as_str().to_string()))
				})
				.collect()
		})
	}
}

/// Strips a trailing slash, keeping the root path intact.
fn normalize(path: &str) -> &str {
	if path.len() > 1 {
		path.trim_end_matches('/')
	} else {
		path
	}
}

/// A matched route with its extracted parameters.
#[derive(Debug, Clone, Default)]
pub struct RouteMatch {
	/// The request path that matched.
	pub path: String,
	/// Extracted path parameters.
	pub params: HashMap<String, String>,
}

impl RouteMatch {
	/// Returns a parameter value, or an empty string when absent.
	pub fn param(&self, name: &str) -> &str {
		self.params.get(name).map(String::as_str).unwrap_or("")
	}
}

type ComponentFactory = Arc<dyn Fn(&RouteMatch) -> Page + Send + Sync>;

/// A single route definition.
#[derive(Clone)]
pub struct Route {
	pattern: PathPattern,
	component: ComponentFactory,
}

impl std::fmt::Debug for Route {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Route")
			.field("pattern", &self.pattern.pattern())
			.finish()
	}
}

impl Route {
	/// Creates a new route.
	pub fn new<F>(pattern: &str, component: F) -> Result<Self, RouterError>
	where
		F: Fn(&RouteMatch) -> Page + Send + Sync + 'static,
	{
		Ok(Self {
			pattern: PathPattern::new(pattern)?,
			component: Arc::new(component),
		})
	}

	/// Renders the route's component for a match.
	pub fn render(&self, route_match: &RouteMatch) -> Page {
		(self.component)(route_match)
	}
}

/// The request-scoped router.
pub struct Router {
	routes: Vec<Route>,
	not_found: Option<ComponentFactory>,
}

impl std::fmt::Debug for Router {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.routes.len())
			.finish()
	}
}

impl Default for Router {
	fn default() -> Self {
		Self::new()
	}
}

impl Router {
	/// Creates an empty router.
	pub fn new() -> Self {
		Self {
			routes: Vec::new(),
			not_found: None,
		}
	}

	/// Adds a route.
	///
	/// An invalid pattern is a programming error in the static route table,
	/// so it fails loudly at construction rather than at match time.
	pub fn route<F>(mut self, pattern: &str, component: F) -> Result<Self, RouterError>
	where
		F: Fn(&RouteMatch) -> Page + Send + Sync + 'static,
	{
		self.routes.push(Route::new(pattern, component)?);
		Ok(self)
	}

	/// Sets the wildcard not-found handler.
	pub fn not_found<F>(mut self, component: F) -> Self
	where
		F: Fn(&RouteMatch) -> Page + Send + Sync + 'static,
	{
		self.not_found = Some(Arc::new(component));
		self
	}

	/// Matches a path against the registered routes.
	pub fn match_path(&self, path: &str) -> Option<(&Route, RouteMatch)> {
		for route in &self.routes {
			if let Some(params) = route.pattern.matches(path) {
				let route_match = RouteMatch {
					path: path.to_string(),
					params,
				};
				return Some((route, route_match));
			}
		}
		None
	}

	/// Renders the screen for a path.
	///
	/// Unmatched paths render the not-found handler; a router without one
	/// renders nothing rather than failing.
	pub fn render(&self, path: &str) -> Page {
		if let Some((route, route_match)) = self.match_path(path) {
			route.render(&route_match)
		} else if let Some(not_found) = &self.not_found {
			let route_match = RouteMatch {
				path: path.to_string(),
				params: HashMap::new(),
			};
			not_found(&route_match)
		} else {
			Page::Empty
		}
	}

	/// Returns the number of registered routes.
	pub fn route_count(&self) -> usize {
		self.routes.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::view::IntoPage;

	fn page(text: &'static str) -> Page {
		text.into_page()
	}

	#[test]
	fn test_pattern_exact() {
		let pattern = PathPattern::new("/about").unwrap();
		assert!(pattern.matches("/about").is_some());
		assert!(pattern.matches("/about/").is_some());
		assert!(pattern.matches("/about/us").is_none());
	}

	#[test]
	fn test_pattern_param() {
		let pattern = PathPattern::new("/blog/{slug}").unwrap();
		let params = pattern.matches("/blog/market-trends-2025").unwrap();
		assert_eq!(params.get("slug").unwrap(), "market-trends-2025");
		assert!(pattern.matches("/blog/").is_none());
		assert!(pattern.matches("/blog/a/b").is_none());
	}

	#[test]
	fn test_router_matches_in_order() {
		let router = Router::new()
			.route("/", |_| page("home"))
			.unwrap()
			.route("/blog/{slug}", |m| {
				Page::text(format!("post:{}", m.param("slug")))
			})
			.unwrap();

		assert_eq!(router.render("/").render_to_string(), "home");
		assert_eq!(router.render("/blog/abc").render_to_string(), "post:abc");
	}

	#[test]
	fn test_router_not_found() {
		let router = Router::new()
			.route("/", |_| page("home"))
			.unwrap()
			.not_found(|_| page("404"));
		assert_eq!(
			router.render("/this-does-not-exist").render_to_string(),
			"404"
		);
	}

	#[test]
	fn test_router_without_not_found_renders_nothing() {
		let router = Router::new().route("/", |_| page("home")).unwrap();
		assert_eq!(router.render("/missing").render_to_string(), "");
	}

	#[test]
	fn test_route_match_param_default() {
		let route_match = RouteMatch::default();
		assert_eq!(route_match.param("missing"), "");
	}
}
