//! Blog post detail screen.

use imperia_content::{ImageUrlBuilder, Post, PostSummary};
use imperia_meta::BlogPostMeta;

use crate::component::Component;
use crate::richtext::render_blocks;
use crate::view::{IntoPage, Page, PageElement};

/// Open Graph image dimensions for a post.
const OG_IMAGE_WIDTH: u32 = 1200;
const OG_IMAGE_HEIGHT: u32 = 630;

/// Hero image dimensions.
const HERO_WIDTH: u32 = 1200;
const HERO_HEIGHT: u32 = 600;

/// Data state of the blog post screen.
pub enum BlogPostState {
	/// Content fetch still pending; renders the article skeleton.
	Loading,
	/// Post fetched.
	Loaded {
		post: Post,
		related: Vec<PostSummary>,
		images: ImageUrlBuilder,
	},
	/// The slug has no matching post — a normal, handled outcome.
	NotFound,
	/// Content fetch failed.
	Failed,
}

/// One article, resolved from `/blog/{slug}`.
pub struct BlogPost {
	slug: String,
	state: BlogPostState,
}

impl BlogPost {
	/// The deterministic first-paint state.
	pub fn loading(slug: impl Into<String>) -> Self {
		Self {
			slug: slug.into(),
			state: BlogPostState::Loading,
		}
	}

	/// Screen for a fetched post.
	pub fn loaded(post: Post, related: Vec<PostSummary>, images: ImageUrlBuilder) -> Self {
		Self {
			slug: post.slug.as_str().to_string(),
			state: BlogPostState::Loaded {
				post,
				related,
				images,
			},
		}
	}

	/// Screen for a slug with no matching post.
	pub fn not_found(slug: impl Into<String>) -> Self {
		Self {
			slug: slug.into(),
			state: BlogPostState::NotFound,
		}
	}

	/// Screen for a failed content fetch.
	pub fn failed(slug: impl Into<String>) -> Self {
		Self {
			slug: slug.into(),
			state: BlogPostState::Failed,
		}
	}

	/// Returns the route path of this post.
	pub fn path(&self) -> String {
		format!("/blog/{}", self.slug)
	}

	/// Dynamic metadata inputs, available once the post has loaded.
	///
	/// The caller feeds this into
	/// [`MetaResolver::blog_post_record`](imperia_meta::MetaResolver::blog_post_record);
	/// the other states keep the resolver's placeholder record.
	pub fn post_meta(&self) -> Option<BlogPostMeta> {
		let BlogPostState::Loaded { post, images, .. } = &self.state else {
			return None;
		};
		Some(BlogPostMeta {
			title: post.title.clone(),
			excerpt: post.excerpt.clone(),
			categories: post
				.categories
				.iter()
				.map(|category| category.title.clone())
				.collect(),
			image_url: post.main_image.as_ref().map(|image| {
				images
					.image(image)
					.width(OG_IMAGE_WIDTH)
					.height(OG_IMAGE_HEIGHT)
					.url()
			}),
			published_at: post.published_at,
		})
	}

	fn render_skeleton() -> Page {
		PageElement::new("div")
			.attr("class", "article skeleton")
			.attr("aria-busy", "true")
			.child(PageElement::new("div").attr("class", "hero placeholder"))
			.child(
				PageElement::new("div")
					.attr("class", "article-content placeholder")
					.child(Page::text("Loading…")),
			)
			.into_page()
	}

	fn render_not_found() -> Page {
		PageElement::new("section")
			.attr("class", "not-found")
			.child(PageElement::new("h1").child("Article Not Found"))
			.child(PageElement::new("p").child(
				"The article you're looking for doesn't exist or has been moved.",
			))
			.child(
				PageElement::new("a")
					.attr("href", "/blogs")
					.attr("class", "cta")
					.child("Browse Articles"),
			)
			.into_page()
	}

	fn render_failed() -> Page {
		PageElement::new("section")
			.attr("class", "load-error")
			.child(PageElement::new("h1").child("Something Went Wrong"))
			.child(PageElement::new("p").child(
				"We encountered an error while loading this article.",
			))
			.child(
				PageElement::new("a")
					.attr("href", "/blogs")
					.attr("class", "cta")
					.child("Browse Articles"),
			)
			.into_page()
	}

	fn render_loaded(
		&self,
		post: &Post,
		related: &[PostSummary],
		images: &ImageUrlBuilder,
	) -> Page {
		let mut sections = vec![self.render_hero(post, images)];

		let mut article = PageElement::new("article").attr("class", "article-content");
		if let Some(excerpt) = &post.excerpt {
			article = article.child(
				PageElement::new("p")
					.attr("class", "excerpt")
					.child(excerpt.clone()),
			);
		}
		article = article.child(render_blocks(&post.body, images));
		if !post.tags.is_empty() {
			let mut tags = PageElement::new("ul").attr("class", "tags");
			for tag in &post.tags {
				tags = tags.child(PageElement::new("li").child(format!("#{}", tag)));
			}
			article = article.child(tags);
		}
		sections.push(article.into_page());

		sections.push(self.render_share_links(post));
		if !related.is_empty() {
			sections.push(Self::render_related(related, images));
		}
		sections.push(
			PageElement::new("nav")
				.attr("class", "article-nav")
				.child(
					PageElement::new("a")
						.attr("href", "/blogs")
						.child("All Articles"),
				)
				.into_page(),
		);

		Page::Fragment(sections)
	}

	fn render_hero(&self, post: &Post, images: &ImageUrlBuilder) -> Page {
		let mut hero = PageElement::new("section").attr("class", "article-hero");
		if let Some(image) = &post.main_image {
			hero = hero.child(
				PageElement::new("img")
					.attr(
						"src",
						images.image(image).width(HERO_WIDTH).height(HERO_HEIGHT).url(),
					)
					.attr("alt", post.title.clone()),
			);
		}

		let mut categories = PageElement::new("ul").attr("class", "categories");
		for category in &post.categories {
			categories = categories.child(PageElement::new("li").child(category.title.clone()));
		}

		let author = post
			.author
			.as_ref()
			.map(|author| author.name.clone())
			.unwrap_or_else(|| "Imperia Consulting".to_string());
		let mut byline = PageElement::new("p")
			.attr("class", "byline")
			.child(author);
		if let Some(published) = post.published_at {
			byline = byline.child(
				PageElement::new("time")
					.attr("datetime", published.to_rfc3339())
					.child(published.format("%B %-d, %Y").to_string()),
			);
		}
		byline = byline.child(
			PageElement::new("span")
				.attr("class", "reading-time")
				.child(format!(
					"{} min read",
					post.estimated_reading_time.unwrap_or(5)
				)),
		);

		hero.child(categories)
			.child(PageElement::new("h1").child(post.title.clone()))
			.child(byline)
			.into_page()
	}

	fn render_share_links(&self, post: &Post) -> Page {
		let url = format!("{}{}", imperia_meta::site::SITE_URL, self.path());
		let encoded_url = urlencoding::encode(&url).into_owned();
		let encoded_title = urlencoding::encode(&post.title).into_owned();

		PageElement::new("div")
			.attr("class", "share")
			.child(PageElement::new("h3").child("Share this article"))
			.child(share_link(
				"Twitter",
				format!(
					"https://twitter.com/intent/tweet?url={}&text={}",
					encoded_url, encoded_title
				),
			))
			.child(share_link(
				"Facebook",
				format!(
					"https://www.facebook.com/sharer/sharer.php?u={}",
					encoded_url
				),
			))
			.child(share_link(
				"LinkedIn",
				format!(
					"https://www.linkedin.com/sharing/share-offsite/?url={}",
					encoded_url
				),
			))
			.into_page()
	}

	fn render_related(related: &[PostSummary], images: &ImageUrlBuilder) -> Page {
		let mut grid = PageElement::new("div").attr("class", "post-grid");
		for post in related {
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
			grid = grid.child(card);
		}

		PageElement::new("section")
			.attr("class", "related")
			.child(PageElement::new("h2").child("Related Articles"))
			.child(grid)
			.into_page()
	}
}

impl Component for BlogPost {
	fn render(&self) -> Page {
		match &self.state {
			BlogPostState::Loading => Self::render_skeleton(),
			BlogPostState::Loaded {
				post,
				related,
				images,
			} => self.render_loaded(post, related, images),
			BlogPostState::NotFound => Self::render_not_found(),
			BlogPostState::Failed => Self::render_failed(),
		}
	}

	fn name() -> &'static str {
		"BlogPost"
	}
}

fn share_link(label: &'static str, href: String) -> Page {
	PageElement::new("a")
		.attr("href", href)
		.attr("target", "_blank")
		.attr("rel", "noopener noreferrer")
		.child(label)
		.into_page()
}
