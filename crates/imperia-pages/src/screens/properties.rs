//! Properties catalogue screen.

use crate::component::Component;
use crate::listings;
use crate::view::{IntoPage, Page, PageElement};

/// The full listings catalogue.
pub struct Properties;

impl Component for Properties {
	fn render(&self) -> Page {
		let mut grid = PageElement::new("section").attr("class", "listings-grid");
		for listing in listings::all() {
			grid = grid.child(
				PageElement::new("article")
					.attr("class", "listing-card")
					.child(
						PageElement::new("a")
							.attr("href", format!("/property/{}", listing.id))
							.child(
								PageElement::new("img")
									.attr("src", listing.main_image)
									.attr("alt", listing.title),
							)
							.child(PageElement::new("h3").child(listing.title))
							.child(
								PageElement::new("p")
									.attr("class", "project")
									.child(listing.project),
							)
							.child(
								PageElement::new("p")
									.attr("class", "price")
									.child(listing.avg_price),
							),
					),
			);
		}

		Page::fragment([
			PageElement::new("section")
				.attr("class", "props-hero")
				.child(PageElement::new("h1").child("Our Properties"))
				.into_page(),
			grid.into_page(),
		])
	}

	fn name() -> &'static str {
		"Properties"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_properties_lists_every_listing() {
		let html = Properties.render().render_to_string();
		for listing in listings::all() {
			assert!(html.contains(&format!("/property/{}", listing.id)));
		}
	}
}
