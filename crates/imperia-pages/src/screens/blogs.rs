//! Blog index screen.

use imperia_content::{ImageUrlBuilder, PostSummary};

use crate::component::Component;
use crate::view::{IntoPage, Page, PageElement};

/// Number of skeleton cards in the loading placeholder.
///
/// Fixed so the server render and the client's first paint agree.
const SKELETON_CARDS: usize = 6;

/// Data state of the blog index.
pub enum BlogIndexState {
	/// Content fetch still pending; renders the skeleton grid.
	Loading,
	/// Posts fetched (a page or search results).
	Loaded {
		posts: Vec<PostSummary>,
		images: ImageUrlBuilder,
	},
	/// Content fetch failed.
	Failed,
}

/// Paginated post list with search.
pub struct BlogIndex {
	state: BlogIndexState,
}

impl BlogIndex {
	/// The deterministic first-paint state.
	pub fn loading() -> Self {
		Self {
			state: BlogIndexState::Loading,
		}
	}

	/// Index with fetched posts.
	pub fn loaded(posts: Vec<PostSummary>, images: ImageUrlBuilder) -> Self {
		Self {
			state: BlogIndexState::Loaded { posts, images },
		}
	}

	/// Index after a failed fetch.
	pub fn failed() -> Self {
		Self {
			state: BlogIndexState::Failed,
		}
	}

	fn render_posts(posts: &[PostSummary], images: &ImageUrlBuilder) -> Page {
		if posts.is_empty() {
			return PageElement::new("p")
				.attr("class", "empty")
				.child("No articles found.")
				.into_page();
		}

		let mut grid = PageElement::new("div").attr("class", "post-grid");
		for post in posts {
			let mut card = PageElement::new("a")
				.attr("href", format!("/blog/{}", post.slug.as_str()))
				.attr("class", "post-card");
			if let Some(image) = &post.main_image {
				card = card.child(
					PageElement::new("img")
						.attr("src", images.image(image).width(400).height(250).url())
						.attr("alt", post.title.clone())
						.attr("loading", "lazy"),
				);
			}
			card = card.child(PageElement::new("h3").child(post.title.clone()));
			if let Some(excerpt) = &post.excerpt {
				card = card.child(PageElement::new("p").child(excerpt.clone()));
			}
			if let Some(minutes) = post.estimated_reading_time {
				card = card.child(
					PageElement::new("span")
						.attr("class", "reading-time")
						.child(format!("{} min read", minutes)),
				);
			}
			grid = grid.child(card);
		}
		grid.into_page()
	}

	fn render_skeleton() -> Page {
		let mut grid = PageElement::new("div")
			.attr("class", "post-grid skeleton")
			.attr("aria-busy", "true");
		for _ in 0..SKELETON_CARDS {
			grid = grid.child(
				PageElement::new("div")
					.attr("class", "post-card placeholder")
					.child(Page::text("Loading…")),
			);
		}
		grid.into_page()
	}

	fn render_failed() -> Page {
		PageElement::new("p")
			.attr("class", "load-error")
			.child("We couldn't load articles right now. Please try again shortly.")
			.into_page()
	}
}

impl Component for BlogIndex {
	fn render(&self) -> Page {
		let body = match &self.state {
			BlogIndexState::Loading => Self::render_skeleton(),
			BlogIndexState::Loaded { posts, images } => Self::render_posts(posts, images),
			BlogIndexState::Failed => Self::render_failed(),
		};

		Page::fragment([
			PageElement::new("section")
				.attr("class", "blog-hero")
				.child(PageElement::new("h1").child("Real Estate Insights"))
				.child(
					PageElement::new("form")
						.attr("class", "search")
						.attr("method", "get")
						.attr("action", "/blogs")
						.child(
							PageElement::new("input")
								.attr("type", "search")
								.attr("name", "q")
								.attr("placeholder", "Search articles"),
						)
						.child(PageElement::new("button").attr("type", "submit").child("Search")),
				)
				.into_page(),
			body,
		])
	}

	fn name() -> &'static str {
		"BlogIndex"
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use imperia_content::Slug;

	fn images() -> ImageUrlBuilder {
		ImageUrlBuilder::new("r2dwso19", "production")
	}

	fn summary(slug: &str, title: &str) -> PostSummary {
		PostSummary {
			id: slug.to_string(),
			title: title.to_string(),
			slug: Slug::new(slug),
			author: None,
			main_image: None,
			categories: Vec::new(),
			published_at: None,
			excerpt: Some("Excerpt.".to_string()),
			estimated_reading_time: Some(5),
		}
	}

	#[test]
	fn test_loading_renders_fixed_skeleton() {
		let first = BlogIndex::loading().render().render_to_string();
		let second = BlogIndex::loading().render().render_to_string();
		assert_eq!(first, second);
		assert_eq!(first.matches("placeholder").count(), SKELETON_CARDS);
	}

	#[test]
	fn test_loaded_links_posts() {
		let screen = BlogIndex::loaded(
			vec![summary("market-trends-2025", "Market Trends 2025")],
			images(),
		);
		let html = screen.render().render_to_string();
		assert!(html.contains("href=\"/blog/market-trends-2025\""));
		assert!(html.contains("5 min read"));
	}

	#[test]
	fn test_loaded_empty_shows_empty_state() {
		let html = BlogIndex::loaded(Vec::new(), images()).render().render_to_string();
		assert!(html.contains("No articles found."));
	}

	#[test]
	fn test_failed_is_distinct_from_empty() {
		let html = BlogIndex::failed().render().render_to_string();
		assert!(html.contains("couldn&#x27;t load articles"));
		assert!(!html.contains("No articles found."));
	}
}
