//! In-memory implementation of [`ContentQuery`].
//!
//! Used as a fixture source in tests and for offline development; behavior
//! mirrors the HTTP client's queries (ordering, exclusion, wildcards).

use async_trait::async_trait;

use crate::error::ContentError;
use crate::query::ContentQuery;
use crate::types::{Post, PostSummary};

/// A fixed set of posts served from memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryContent {
	posts: Vec<Post>,
	/// When set, every query fails with this status; used to exercise the
	/// "failed to load" paths.
	fail_with_status: Option<u16>,
}

impl MemoryContent {
	/// Creates an empty source.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a source over the given posts.
	pub fn with_posts(posts: Vec<Post>) -> Self {
		Self {
			posts,
			fail_with_status: None,
		}
	}

	/// Makes every query fail with the given status.
	pub fn failing(status: u16) -> Self {
		Self {
			posts: Vec::new(),
			fail_with_status: Some(status),
		}
	}

	fn check(&self) -> Result<(), ContentError> {
		match self.fail_with_status {
			Some(status) => Err(ContentError::Status { status }),
			None => Ok(()),
		}
	}

	fn sorted_newest_first(&self, mut posts: Vec<PostSummary>) -> Vec<PostSummary> {
		posts.sort_by(|a, b| b.published_at.cmp(&a.published_at));
		posts
	}
}

#[async_trait]
impl ContentQuery for MemoryContent {
	async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError> {
		self.check()?;
		Ok(self
			.posts
			.iter()
			.find(|post| post.slug.as_str() == slug)
			.cloned())
	}

	async fn related_posts(
		&self,
		category_ids: &[String],
		exclude_id: &str,
		limit: usize,
	) -> Result<Vec<PostSummary>, ContentError> {
		self.check()?;
		let related = self
			.posts
			.iter()
			.filter(|post| post.id != exclude_id)
			.filter(|post| {
				post.categories
					.iter()
					.any(|category| category_ids.contains(&category.id))
			})
			.map(Post::summary)
			.collect();
		let mut related = self.sorted_newest_first(related);
		related.truncate(limit);
		Ok(related)
	}

	async fn posts_page(
		&self,
		limit: usize,
		offset: usize,
	) -> Result<Vec<PostSummary>, ContentError> {
		self.check()?;
		let all = self.posts.iter().map(Post::summary).collect();
		let sorted = self.sorted_newest_first(all);
		Ok(sorted.into_iter().skip(offset).take(limit).collect())
	}

	async fn search_posts(&self, term: &str) -> Result<Vec<PostSummary>, ContentError> {
		self.check()?;
		let needle = term.to_lowercase();
		let matches = self
			.posts
			.iter()
			.filter(|post| {
				post.title.to_lowercase().contains(&needle)
					|| crate::blocks::plain_text(&post.body)
						.to_lowercase()
						.contains(&needle)
			})
			.map(Post::summary)
			.collect();
		Ok(self.sorted_newest_first(matches))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::types::{Category, Slug};
	use chrono::{TimeZone, Utc};

	fn post(id: &str, slug: &str, title: &str, category: &str, day: u32) -> Post {
		Post {
			id: id.to_string(),
			title: title.to_string(),
			slug: Slug::new(slug),
			author: None,
			main_image: None,
			categories: vec![Category {
				id: category.to_string(),
				title: category.to_string(),
			}],
			body: Vec::new(),
			published_at: Some(Utc.with_ymd_and_hms(2025, 6, day, 12, 0, 0).unwrap()),
			excerpt: None,
			estimated_reading_time: None,
			tags: Vec::new(),
		}
	}

	fn source() -> MemoryContent {
		MemoryContent::with_posts(vec![
			post("p1", "market-trends-2025", "Market Trends 2025", "cat-invest", 1),
			post("p2", "buying-guide", "Buying Guide", "cat-invest", 2),
			post("p3", "nairobi-hotspots", "Nairobi Hotspots", "cat-areas", 3),
		])
	}

	#[tokio::test]
	async fn test_post_by_slug_found() {
		let found = source().post_by_slug("buying-guide").await.unwrap();
		assert_eq!(found.unwrap().id, "p2");
	}

	#[tokio::test]
	async fn test_post_by_slug_absent_is_none() {
		let found = source().post_by_slug("does-not-exist").await.unwrap();
		assert!(found.is_none());
	}

	#[tokio::test]
	async fn test_related_excludes_current_post() {
		let related = source()
			.related_posts(&["cat-invest".to_string()], "p1", 3)
			.await
			.unwrap();
		assert_eq!(related.len(), 1);
		assert_eq!(related[0].id, "p2");
	}

	#[tokio::test]
	async fn test_posts_page_newest_first() {
		let page = source().posts_page(2, 0).await.unwrap();
		assert_eq!(page.len(), 2);
		assert_eq!(page[0].id, "p3");
		assert_eq!(page[1].id, "p2");
	}

	#[tokio::test]
	async fn test_posts_page_offset() {
		let page = source().posts_page(2, 2).await.unwrap();
		assert_eq!(page.len(), 1);
		assert_eq!(page[0].id, "p1");
	}

	#[tokio::test]
	async fn test_search_matches_title_case_insensitive() {
		let hits = source().search_posts("market").await.unwrap();
		assert_eq!(hits.len(), 1);
		assert_eq!(hits[0].id, "p1");
	}

	#[tokio::test]
	async fn test_failing_source_returns_status_error() {
		let err = MemoryContent::failing(503)
			.post_by_slug("anything")
			.await
			.unwrap_err();
		assert!(matches!(err, ContentError::Status { status: 503 }));
	}
}
