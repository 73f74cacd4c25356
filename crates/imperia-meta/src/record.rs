//! The canonical metadata record for a single page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::site;

/// Open Graph object type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
	/// Regular page.
	Website,
	/// Blog article.
	Article,
}

impl OgType {
	/// Returns the `og:type` attribute value.
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Website => "website",
			Self::Article => "article",
		}
	}
}

/// The canonical representation of a page's descriptive metadata.
///
/// Constructed fresh per request (server) or navigation (client) by
/// [`MetaResolver`](crate::MetaResolver), optionally merged in place once
/// asynchronous page data resolves, and discarded afterwards. Records are
/// never shared across requests.
///
/// Invariants (restored by [`MetadataRecord::normalize`]):
/// - `title` and `description` are never empty;
/// - `og_url` and `canonical_url` are absolute URLs;
/// - a blog post has `og_type == Article` and a present `published_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
	pub title: String,
	pub description: String,
	pub keywords: String,
	pub og_image: String,
	pub og_url: String,
	pub canonical_url: String,
	pub og_type: OgType,
	pub twitter_card: String,
	pub published_at: Option<DateTime<Utc>>,
	pub is_blog_post: bool,
}

impl MetadataRecord {
	/// Restores the record invariants in place.
	///
	/// Empty `title`/`description`/`keywords` fall back to the site-wide
	/// defaults; blog posts are forced to `og_type = Article` and receive
	/// `now` as `published_at` when the underlying content carried none.
	pub fn normalize(&mut self, now: DateTime<Utc>) {
		if self.title.is_empty() {
			self.title = site::DEFAULT_TITLE.to_string();
		}
		if self.description.is_empty() {
			self.description = site::DEFAULT_DESCRIPTION.to_string();
		}
		if self.keywords.is_empty() {
			self.keywords = site::DEFAULT_KEYWORDS.to_string();
		}
		if self.is_blog_post {
			self.og_type = OgType::Article;
			if self.published_at.is_none() {
				self.published_at = Some(now);
			}
		}
	}

	/// Merges the present fields of `patch` into this record.
	///
	/// Partial update, not wholesale replacement: absent fields keep their
	/// current values. Callers must re-derive the head fragment afterwards.
	pub fn merge(&mut self, patch: MetadataPatch) {
		if let Some(title) = patch.title {
			self.title = title;
		}
		if let Some(description) = patch.description {
			self.description = description;
		}
		if let Some(keywords) = patch.keywords {
			self.keywords = keywords;
		}
		if let Some(og_image) = patch.og_image {
			self.og_image = og_image;
		}
		if let Some(og_url) = patch.og_url {
			self.og_url = og_url;
		}
		if let Some(canonical_url) = patch.canonical_url {
			self.canonical_url = canonical_url;
		}
		if let Some(og_type) = patch.og_type {
			self.og_type = og_type;
		}
		if let Some(twitter_card) = patch.twitter_card {
			self.twitter_card = twitter_card;
		}
		if let Some(published_at) = patch.published_at {
			self.published_at = Some(published_at);
		}
		if let Some(is_blog_post) = patch.is_blog_post {
			self.is_blog_post = is_blog_post;
		}
	}
}

/// A partial metadata update, applied with [`MetadataRecord::merge`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetadataPatch {
	pub title: Option<String>,
	pub description: Option<String>,
	pub keywords: Option<String>,
	pub og_image: Option<String>,
	pub og_url: Option<String>,
	pub canonical_url: Option<String>,
	pub og_type: Option<OgType>,
	pub twitter_card: Option<String>,
	pub published_at: Option<DateTime<Utc>>,
	pub is_blog_post: Option<bool>,
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Site;

	fn sample() -> MetadataRecord {
		let site = Site::default();
		MetadataRecord {
			title: "Sample".to_string(),
			description: "A sample page".to_string(),
			keywords: "sample".to_string(),
			og_image: site.default_og_image(),
			og_url: site.absolute("/sample"),
			canonical_url: site.absolute("/sample"),
			og_type: OgType::Website,
			twitter_card: site::TWITTER_CARD_LARGE.to_string(),
			published_at: None,
			is_blog_post: false,
		}
	}

	#[test]
	fn test_normalize_fills_empty_fields() {
		let mut record = sample();
		record.title.clear();
		record.description.clear();
		record.normalize(Utc::now());
		assert_eq!(record.title, site::DEFAULT_TITLE);
		assert_eq!(record.description, site::DEFAULT_DESCRIPTION);
	}

	#[test]
	fn test_normalize_blog_post_invariants() {
		let mut record = sample();
		record.is_blog_post = true;
		record.og_type = OgType::Website;
		record.published_at = None;

		let now = Utc::now();
		record.normalize(now);

		assert_eq!(record.og_type, OgType::Article);
		assert_eq!(record.published_at, Some(now));
	}

	#[test]
	fn test_normalize_keeps_existing_timestamp() {
		let mut record = sample();
		record.is_blog_post = true;
		let published = "2025-01-15T08:00:00Z".parse::<DateTime<Utc>>().unwrap();
		record.published_at = Some(published);

		record.normalize(Utc::now());
		assert_eq!(record.published_at, Some(published));
	}

	#[test]
	fn test_merge_is_partial() {
		let mut record = sample();
		record.merge(MetadataPatch {
			title: Some("Patched".to_string()),
			..MetadataPatch::default()
		});
		assert_eq!(record.title, "Patched");
		assert_eq!(record.description, "A sample page");
	}

	#[test]
	fn test_merge_full_patch() {
		let mut record = sample();
		let published = "2025-03-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap();
		record.merge(MetadataPatch {
			title: Some("Post".to_string()),
			og_type: Some(OgType::Article),
			published_at: Some(published),
			is_blog_post: Some(true),
			..MetadataPatch::default()
		});
		assert!(record.is_blog_post);
		assert_eq!(record.og_type, OgType::Article);
		assert_eq!(record.published_at, Some(published));
	}
}
