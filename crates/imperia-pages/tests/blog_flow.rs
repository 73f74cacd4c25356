//! End-to-end blog flows: fetch, render, metadata patch.

use chrono::{TimeZone, Utc};
use imperia_content::{
	Category, ContentQuery, ImageRef, ImageUrlBuilder, MemoryContent, Post, Slug,
};
use imperia_meta::{MemoryHead, MetaResolver};
use imperia_pages::Component;
use imperia_pages::hydrate::{HydrationController, patch_route_metadata};
use imperia_pages::screens::BlogPost;

fn images() -> ImageUrlBuilder {
	ImageUrlBuilder::new("r2dwso19", "production")
}

fn market_trends_post() -> Post {
	Post {
		id: "post-market".to_string(),
		title: "Market Trends 2025".to_string(),
		slug: Slug::new("market-trends-2025"),
		author: None,
		main_image: Some(ImageRef::new("image-abc123-1200x630-jpg")),
		categories: vec![Category {
			id: "cat-invest".to_string(),
			title: "Investment".to_string(),
		}],
		body: Vec::new(),
		published_at: Some(Utc.with_ymd_and_hms(2025, 5, 20, 8, 0, 0).unwrap()),
		excerpt: Some("Where the Nairobi market is heading this year.".to_string()),
		estimated_reading_time: Some(7),
		tags: vec!["market".to_string()],
	}
}

#[tokio::test]
async fn blog_detail_success_patches_real_metadata() {
	let content = MemoryContent::with_posts(vec![market_trends_post()]);
	let resolver = MetaResolver::default();
	let controller = HydrationController::new();
	let mut head = MemoryHead::new();

	// Navigation to /blog/market-trends-2025: first paint is the loading
	// placeholder, then the fetch resolves and metadata is recomputed.
	let token = controller.begin_navigation();
	let post = content
		.post_by_slug("market-trends-2025")
		.await
		.unwrap()
		.expect("fixture post");
	let screen = BlogPost::loaded(post, Vec::new(), images());

	let html = screen.render().render_to_string();
	assert!(html.contains("<h1>Market Trends 2025</h1>"));

	let meta = screen.post_meta();
	let applied = patch_route_metadata(
		&controller,
		token,
		&resolver,
		&screen.path(),
		meta.as_ref(),
		&mut head,
	);

	assert!(applied);
	assert_eq!(head.title(), Some("Market Trends 2025 | Imperia Consulting Blog"));
	assert_eq!(head.meta_property("og:type"), Some("article"));
	assert_eq!(
		head.canonical(),
		Some("https://imperiagrouponline.com/blog/market-trends-2025")
	);
	let og_image = head.meta_property("og:image").expect("og:image set");
	assert!(og_image.contains("w=1200"));
	assert!(og_image.contains("h=630"));
}

#[tokio::test]
async fn blog_detail_not_found_keeps_generic_metadata() {
	let content = MemoryContent::new();
	let resolver = MetaResolver::default();
	let controller = HydrationController::new();
	let mut head = MemoryHead::new();

	let token = controller.begin_navigation();
	let fetched = content.post_by_slug("does-not-exist").await.unwrap();
	assert!(fetched.is_none());

	let screen = BlogPost::not_found("does-not-exist");
	let html = screen.render().render_to_string();
	assert!(html.contains("Article Not Found"));

	// No post metadata: the placeholder record stays in effect.
	let applied = patch_route_metadata(
		&controller,
		token,
		&resolver,
		"/blog/does-not-exist",
		screen.post_meta().as_ref(),
		&mut head,
	);

	assert!(applied);
	assert_eq!(head.title(), Some("Blog Post | Imperia Consulting"));
	assert_eq!(head.meta_property("og:type"), Some("article"));
}

#[tokio::test]
async fn blog_detail_fetch_failure_is_distinct_from_not_found() {
	let content = MemoryContent::failing(503);
	let err = content.post_by_slug("market-trends-2025").await.unwrap_err();

	let screen = BlogPost::failed("market-trends-2025");
	let html = screen.render().render_to_string();
	assert!(html.contains("Something Went Wrong"));
	assert!(!html.contains("Article Not Found"));
	assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn related_posts_come_from_shared_categories() {
	let mut other = market_trends_post();
	other.id = "post-other".to_string();
	other.slug = Slug::new("another-take");
	other.title = "Another Take".to_string();

	let content = MemoryContent::with_posts(vec![market_trends_post(), other]);
	let related = content
		.related_posts(&["cat-invest".to_string()], "post-market", 3)
		.await
		.unwrap();

	assert_eq!(related.len(), 1);
	assert_eq!(related[0].id, "post-other");

	let screen = BlogPost::loaded(
		content
			.post_by_slug("market-trends-2025")
			.await
			.unwrap()
			.expect("fixture post"),
		related,
		images(),
	);
	let html = screen.render().render_to_string();
	assert!(html.contains("Related Articles"));
	assert!(html.contains("href=\"/blog/another-take\""));
}
