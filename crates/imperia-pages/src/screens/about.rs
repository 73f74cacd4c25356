//! About screen.

use crate::component::Component;
use crate::view::{IntoPage, Page, PageElement};

/// Company background, mission and track record.
pub struct About;

impl Component for About {
	fn render(&self) -> Page {
		Page::fragment([
			PageElement::new("section")
				.attr("class", "about-hero")
				.child(PageElement::new("h1").child("About Imperia Consulting"))
				.child(PageElement::new("p").child(
					"Kenya's trusted real estate brand, delivering luxury homes and \
					high-yield property investments.",
				))
				.into_page(),
			PageElement::new("section")
				.attr("class", "mission")
				.child(PageElement::new("h2").child("Our Mission"))
				.child(PageElement::new("p").child(
					"We make property ownership attainable through flexible payment \
					plans, transparent pricing and developments in prime locations.",
				))
				.into_page(),
			PageElement::new("section")
				.attr("class", "ready-cta")
				.child(PageElement::new("h2").child("Ready to invest?"))
				.child(
					PageElement::new("a")
						.attr("href", "/contact")
						.attr("class", "cta")
						.child("Talk to our team"),
				)
				.into_page(),
		])
	}

	fn name() -> &'static str {
		"About"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_about_renders_sections() {
		let html = About.render().render_to_string();
		assert!(html.contains("About Imperia Consulting"));
		assert!(html.contains("Our Mission"));
	}
}
