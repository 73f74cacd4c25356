//! Home screen.

use crate::component::Component;
use crate::listings;
use crate::view::{IntoPage, Page, PageElement};

/// The landing screen: hero plus featured developments.
pub struct Home;

impl Component for Home {
	fn render(&self) -> Page {
		let mut featured = PageElement::new("section").attr("class", "featured");
		for project in listings::featured() {
			featured = featured.child(
				PageElement::new("article")
					.attr("class", "featured-card")
					.child(
						PageElement::new("img")
							.attr("src", project.image)
							.attr("alt", project.title),
					)
					.child(PageElement::new("h3").child(project.title))
					.child(PageElement::new("p").child(project.description))
					.child(
						PageElement::new("p")
							.attr("class", "location")
							.child(project.location),
					),
			);
		}

		Page::fragment([
			PageElement::new("section")
				.attr("class", "hero")
				.child(PageElement::new("h1").child("Premier Real Estate in Kenya"))
				.child(PageElement::new("p").child(
					"Residential, commercial and investment properties with flexible \
					payment plans.",
				))
				.child(
					PageElement::new("a")
						.attr("href", "/properties")
						.attr("class", "cta")
						.child("Browse properties"),
				)
				.into_page(),
			featured.into_page(),
		])
	}

	fn name() -> &'static str {
		"Home"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_home_renders_featured_projects() {
		let html = Home.render().render_to_string();
		assert!(html.contains("Premier Real Estate in Kenya"));
		assert!(html.contains("EMERALD SPRINGS APARTMENT"));
		assert!(html.contains("OAK WEST RESIDENCY"));
	}
}
