//! Single-property screen.

use crate::component::Component;
use crate::listings::{self, Listing};
use crate::view::{IntoPage, Page, PageElement};

/// Detail view for one listing, resolved from `/property/{id}`.
pub struct ViewProperty {
	listing: Option<&'static Listing>,
}

impl ViewProperty {
	/// Looks up the listing for a URL id; unknown ids render a not-found
	/// state, not an error.
	pub fn for_id(id: &str) -> Self {
		Self {
			listing: listings::by_id(id),
		}
	}

	fn render_listing(listing: &Listing) -> Page {
		let mut photos = PageElement::new("div").attr("class", "photo-grid");
		for photo in listing.photos {
			photos = photos.child(
				PageElement::new("img")
					.attr("src", *photo)
					.attr("alt", listing.title)
					.attr("loading", "lazy"),
			);
		}

		let mut highlights = PageElement::new("ul").attr("class", "highlights");
		for highlight in listing.highlights {
			highlights = highlights.child(PageElement::new("li").child(*highlight));
		}

		let mut sections = vec![
			PageElement::new("section")
				.attr("class", "props-hero")
				.child(PageElement::new("h1").child(listing.title))
				.child(
					PageElement::new("p")
						.attr("class", "project")
						.child(listing.project),
				)
				.child(
					PageElement::new("p")
						.attr("class", "location")
						.child(listing.location),
				)
				.child(
					PageElement::new("p")
						.attr("class", "price")
						.child(listing.avg_price),
				)
				.into_page(),
			PageElement::new("section")
				.attr("class", "description")
				.child(PageElement::new("p").child(listing.description))
				.child(highlights)
				.into_page(),
			photos.into_page(),
		];

		if !listing.pricing_plans.is_empty() {
			let mut plans = PageElement::new("section").attr("class", "pricing-plans");
			plans = plans.child(PageElement::new("h2").child("Payment Plans"));
			for plan in listing.pricing_plans {
				let mut installments = PageElement::new("ul");
				for installment in plan.installments {
					installments = installments.child(PageElement::new("li").child(*installment));
				}
				plans = plans.child(
					PageElement::new("article")
						.attr("class", "plan")
						.child(PageElement::new("h3").child(plan.title))
						.child(
							PageElement::new("p")
								.attr("class", "price")
								.child(plan.price),
						)
						.child(installments),
				);
			}
			sections.push(plans.into_page());
		}

		Page::Fragment(sections)
	}

	fn render_missing() -> Page {
		PageElement::new("section")
			.attr("class", "not-found")
			.child(PageElement::new("h1").child("Property Not Found"))
			.child(PageElement::new("p").child(
				"The property you're looking for doesn't exist or has been moved.",
			))
			.child(
				PageElement::new("a")
					.attr("href", "/properties")
					.attr("class", "cta")
					.child("Browse all properties"),
			)
			.into_page()
	}
}

impl Component for ViewProperty {
	fn render(&self) -> Page {
		match self.listing {
			Some(listing) => Self::render_listing(listing),
			None => Self::render_missing(),
		}
	}

	fn name() -> &'static str {
		"ViewProperty"
	}
}
