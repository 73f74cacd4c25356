//! Wildcard not-found screen.

use crate::component::Component;
use crate::view::{IntoPage, Page, PageElement};

/// Styled 404 screen with navigation back to the main sections.
pub struct NotFound;

impl Component for NotFound {
	fn render(&self) -> Page {
		PageElement::new("section")
			.attr("class", "not-found")
			.child(PageElement::new("h1").child("Page Not Found"))
			.child(PageElement::new("p").child(
				"The page you're looking for doesn't exist or has been moved.",
			))
			.child(
				PageElement::new("a")
					.attr("href", "/")
					.attr("class", "cta")
					.child("Back to home"),
			)
			.into_page()
	}

	fn name() -> &'static str {
		"NotFound"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_not_found_links_home() {
		let html = NotFound.render().render_to_string();
		assert!(html.contains("Page Not Found"));
		assert!(html.contains("href=\"/\""));
	}
}
