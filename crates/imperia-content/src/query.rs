//! The read-only query surface screens consume.

use async_trait::async_trait;

use crate::error::ContentError;
use crate::types::{Post, PostSummary};

/// Read-only blog queries.
///
/// Implemented over HTTP by [`SanityClient`](crate::SanityClient) and
/// in-memory by [`MemoryContent`](crate::MemoryContent). All operations
/// treat absence as a normal outcome.
#[async_trait]
pub trait ContentQuery: Send + Sync {
	/// Fetches a single post by slug; `Ok(None)` when no post matches.
	async fn post_by_slug(&self, slug: &str) -> Result<Option<Post>, ContentError>;

	/// Fetches up to `limit` posts sharing a category with the given set,
	/// excluding the post identified by `exclude_id`.
	async fn related_posts(
		&self,
		category_ids: &[String],
		exclude_id: &str,
		limit: usize,
	) -> Result<Vec<PostSummary>, ContentError>;

	/// Fetches one page of posts, newest first.
	async fn posts_page(&self, limit: usize, offset: usize)
	-> Result<Vec<PostSummary>, ContentError>;

	/// Full-text search over titles and body text, newest first.
	async fn search_posts(&self, term: &str) -> Result<Vec<PostSummary>, ContentError>;
}
