//! Content record types, shaped after the service's document schema.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::blocks::Block;

/// A URL-safe content identifier.
///
/// The service stores slugs as `{ "current": "..." }`; this wrapper keeps
/// the wire shape while exposing the string directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
	pub current: String,
}

impl Slug {
	/// Creates a slug from a string.
	pub fn new(current: impl Into<String>) -> Self {
		Self {
			current: current.into(),
		}
	}

	/// Returns the slug value.
	pub fn as_str(&self) -> &str {
		&self.current
	}
}

/// A reference to an image asset stored by the content service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
	/// Asset reference, e.g. `image-abc123-1200x630-jpg`.
	pub asset: AssetRef,
	/// Alternative text, when the editor provided one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub alt: Option<String>,
	/// Caption rendered under inline article images.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub caption: Option<String>,
}

/// The `asset` sub-object of an image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRef {
	#[serde(rename = "_ref")]
	pub reference: String,
}

impl ImageRef {
	/// Creates a reference to the given asset id.
	pub fn new(reference: impl Into<String>) -> Self {
		Self {
			asset: AssetRef {
				reference: reference.into(),
			},
			alt: None,
			caption: None,
		}
	}
}

/// A post author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Author {
	pub name: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<ImageRef>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
}

/// A post category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
	#[serde(rename = "_id", default)]
	pub id: String,
	pub title: String,
}

/// A full blog post, as returned by the single-post query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
	#[serde(rename = "_id")]
	pub id: String,
	pub title: String,
	pub slug: Slug,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub author: Option<Author>,
	#[serde(rename = "mainImage", default, skip_serializing_if = "Option::is_none")]
	pub main_image: Option<ImageRef>,
	#[serde(default)]
	pub categories: Vec<Category>,
	#[serde(default)]
	pub body: Vec<Block>,
	#[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
	pub published_at: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub excerpt: Option<String>,
	#[serde(
		rename = "estimatedReadingTime",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub estimated_reading_time: Option<u32>,
	#[serde(default)]
	pub tags: Vec<String>,
}

/// A post as it appears in list, search and related-post results.
///
/// Same document, narrower projection: no body, no author bio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
	#[serde(rename = "_id")]
	pub id: String,
	pub title: String,
	pub slug: Slug,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub author: Option<Author>,
	#[serde(rename = "mainImage", default, skip_serializing_if = "Option::is_none")]
	pub main_image: Option<ImageRef>,
	#[serde(default)]
	pub categories: Vec<Category>,
	#[serde(rename = "publishedAt", default, skip_serializing_if = "Option::is_none")]
	pub published_at: Option<DateTime<Utc>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub excerpt: Option<String>,
	#[serde(
		rename = "estimatedReadingTime",
		default,
		skip_serializing_if = "Option::is_none"
	)]
	pub estimated_reading_time: Option<u32>,
}

impl Post {
	/// Narrows a full post to its list projection.
	pub fn summary(&self) -> PostSummary {
		PostSummary {
			id: self.id.clone(),
			title: self.title.clone(),
			slug: self.slug.clone(),
			author: self.author.clone(),
			main_image: self.main_image.clone(),
			categories: self.categories.clone(),
			published_at: self.published_at,
			excerpt: self.excerpt.clone(),
			estimated_reading_time: self.estimated_reading_time,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_post_deserializes_service_shape() {
		let json = serde_json::json!({
			"_id": "post-1",
			"title": "Market Trends 2025",
			"slug": { "current": "market-trends-2025" },
			"author": { "name": "Amina O." },
			"mainImage": { "asset": { "_ref": "image-abc123-1200x630-jpg" } },
			"categories": [{ "_id": "cat-1", "title": "Investment" }],
			"publishedAt": "2025-06-02T09:30:00Z",
			"excerpt": "Where the market is heading.",
			"estimatedReadingTime": 6,
			"body": []
		});

		let post: Post = serde_json::from_value(json).unwrap();
		assert_eq!(post.id, "post-1");
		assert_eq!(post.slug.as_str(), "market-trends-2025");
		assert_eq!(post.categories[0].title, "Investment");
		assert_eq!(post.estimated_reading_time, Some(6));
		assert!(post.tags.is_empty());
	}

	#[test]
	fn test_post_tolerates_missing_optionals() {
		let json = serde_json::json!({
			"_id": "post-2",
			"title": "Untitled",
			"slug": { "current": "untitled" }
		});
		let post: Post = serde_json::from_value(json).unwrap();
		assert!(post.author.is_none());
		assert!(post.main_image.is_none());
		assert!(post.published_at.is_none());
		assert!(post.body.is_empty());
	}

	#[test]
	fn test_summary_projection() {
		let post = Post {
			id: "post-3".to_string(),
			title: "Guide".to_string(),
			slug: Slug::new("guide"),
			author: None,
			main_image: None,
			categories: Vec::new(),
			body: Vec::new(),
			published_at: None,
			excerpt: Some("A guide.".to_string()),
			estimated_reading_time: Some(4),
			tags: vec!["guide".to_string()],
		};
		let summary = post.summary();
		assert_eq!(summary.id, "post-3");
		assert_eq!(summary.excerpt.as_deref(), Some("A guide."));
	}
}
