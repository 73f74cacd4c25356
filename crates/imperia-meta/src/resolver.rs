//! The static route-to-metadata table and its resolver.
//!
//! Every route the application router knows — including the wildcard
//! not-found route — has an entry here; a missing entry is a configuration
//! defect caught by [`MetaResolver::verify_coverage`] at startup, not a
//! runtime fallback.

use chrono::{DateTime, Utc};

use crate::error::MetaError;
use crate::record::{MetadataRecord, OgType};
use crate::site::{
	self, DEFAULT_DESCRIPTION, DEFAULT_KEYWORDS, DEFAULT_TITLE, SITE_NAME, Site,
	TWITTER_CARD_LARGE,
};

/// How a metadata entry matches request paths.
///
/// Matching mirrors the router's own rules: an exact path, a literal prefix
/// followed by one non-empty parameter segment, or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutePattern {
	/// Matches the path exactly (trailing slash insensitive).
	Exact(&'static str),
	/// Matches `<prefix><segment>` where the segment is non-empty, e.g.
	/// `Prefix("/blog/")` matches `/blog/market-trends-2025`.
	Prefix(&'static str),
	/// Matches any path; the not-found entry.
	Wildcard,
}

impl RoutePattern {
	/// Checks whether `path` matches this pattern.
	pub fn matches(&self, path: &str) -> bool {
		let path = normalize(path);
		match self {
			Self::Exact(exact) => path == *exact,
			Self::Prefix(prefix) => path
				.strip_prefix(prefix)
				.is_some_and(|rest| !rest.is_empty()),
			Self::Wildcard => true,
		}
	}
}

/// Strips a trailing slash, keeping the root path intact.
fn normalize(path: &str) -> &str {
	if path.len() > 1 {
		path.trim_end_matches('/')
	} else {
		path
	}
}

/// Fixed per-route page metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
	pub title: &'static str,
	pub description: &'static str,
	pub keywords: &'static str,
}

/// What a route entry resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMeta {
	/// A fixed record for a static route.
	Static(PageMeta),
	/// The blog-post placeholder, replaced by [`MetaResolver::blog_post_record`]
	/// once the post content has loaded.
	BlogPost,
}

struct Entry {
	/// The router-visible pattern this entry covers, e.g. `/blog/{slug}`.
	route: &'static str,
	pattern: RoutePattern,
	meta: RouteMeta,
}

const ABOUT: PageMeta = PageMeta {
	title: "About Us | Imperia Consulting Real Estate",
	description: "Learn about Imperia Consulting, Kenya's trusted real estate brand. We deliver \
		luxury homes and high-yield property investments with flexible payment plans.",
	keywords: "about Imperia Consulting, real estate company Kenya, property developers Kenya, \
		real estate agents Nairobi",
};

const PROPERTIES: PageMeta = PageMeta {
	title: "Properties | Imperia Consulting Real Estate",
	description: "Browse our premium property listings in Kenya. Find residential, commercial, \
		and investment properties with flexible payment plans in Nairobi and beyond.",
	keywords: "properties for sale Kenya, real estate listings Kenya, houses for sale Nairobi, \
		commercial property Kenya, investment properties",
};

const CONTACT: PageMeta = PageMeta {
	title: "Contact Us | Imperia Consulting Real Estate",
	description: "Get in touch with Imperia Consulting for all your real estate needs in Kenya. \
		Contact our expert team for property consultation and investment advice.",
	keywords: "contact Imperia Consulting, real estate consultation Kenya, property advice \
		Kenya, real estate agents contact",
};

const BLOGS: PageMeta = PageMeta {
	title: "Real Estate Blog | Imperia Consulting",
	description: "Read the latest insights, tips, and news about real estate in Kenya. Expert \
		advice on property investment, market trends, and buying guides.",
	keywords: "real estate blog Kenya, property investment tips, Kenya real estate news, \
		property market trends, real estate advice",
};

const HOME: PageMeta = PageMeta {
	title: DEFAULT_TITLE,
	description: DEFAULT_DESCRIPTION,
	keywords: DEFAULT_KEYWORDS,
};

/// Dynamic metadata inputs for a loaded blog post.
///
/// Decouples the resolver from the content crate: screens build this from a
/// fetched post and hand it to [`MetaResolver::blog_post_record`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogPostMeta {
	pub title: String,
	pub excerpt: Option<String>,
	pub categories: Vec<String>,
	pub image_url: Option<String>,
	pub published_at: Option<DateTime<Utc>>,
}

/// Resolves request paths to [`MetadataRecord`] values.
///
/// Pure function of the path and the static route table; never fails and
/// never touches the DOM, so it is callable from both render entry points.
pub struct MetaResolver {
	site: Site,
	entries: Vec<Entry>,
}

impl Default for MetaResolver {
	fn default() -> Self {
		Self::new(Site::default())
	}
}

impl MetaResolver {
	/// Builds the canonical route table for the given site.
	pub fn new(site: Site) -> Self {
		let entries = vec![
			Entry {
				route: "/blog/{slug}",
				pattern: RoutePattern::Prefix("/blog/"),
				meta: RouteMeta::BlogPost,
			},
			Entry {
				route: "/about",
				pattern: RoutePattern::Exact("/about"),
				meta: RouteMeta::Static(ABOUT),
			},
			Entry {
				route: "/properties",
				pattern: RoutePattern::Exact("/properties"),
				meta: RouteMeta::Static(PROPERTIES),
			},
			Entry {
				route: "/property/{id}",
				pattern: RoutePattern::Prefix("/property/"),
				meta: RouteMeta::Static(PROPERTIES),
			},
			Entry {
				route: "/contact",
				pattern: RoutePattern::Exact("/contact"),
				meta: RouteMeta::Static(CONTACT),
			},
			Entry {
				route: "/blogs",
				pattern: RoutePattern::Exact("/blogs"),
				meta: RouteMeta::Static(BLOGS),
			},
			Entry {
				route: "/",
				pattern: RoutePattern::Exact("/"),
				meta: RouteMeta::Static(HOME),
			},
			Entry {
				route: "*",
				pattern: RoutePattern::Wildcard,
				meta: RouteMeta::Static(HOME),
			},
		];
		Self { site, entries }
	}

	/// Returns the site this resolver is rooted at.
	pub fn site(&self) -> &Site {
		&self.site
	}

	/// Resolves a request path to a schema-valid metadata record.
	///
	/// Static routes get their registered record with `og_url` and
	/// `canonical_url` rewritten to embed `path`; parameterized blog routes
	/// get the placeholder record for the first SSR pass; unmatched paths
	/// fall through to the wildcard entry and receive the site-wide default.
	pub fn resolve(&self, path: &str) -> MetadataRecord {
		let entry = self
			.entries
			.iter()
			.find(|entry| entry.pattern.matches(path));

		let mut record = match entry.map(|entry| &entry.meta) {
			Some(RouteMeta::Static(meta)) => self.static_record(path, meta),
			Some(RouteMeta::BlogPost) => self.blog_placeholder(path),
			// The wildcard entry makes this unreachable, but the resolver
			// must not fail even on a malformed table.
			None => self.static_record(path, &HOME),
		};
		record.normalize(Utc::now());
		record
	}

	/// Builds the final record for a loaded blog post.
	///
	/// `path` is the post's route (`/blog/<slug>`); `post` carries the
	/// fetched content fields.
	pub fn blog_post_record(&self, path: &str, post: &BlogPostMeta) -> MetadataRecord {
		let url = self.site.absolute(path);
		let description = post.excerpt.clone().unwrap_or_else(|| {
			format!(
				"Read about {} on {}'s real estate blog.",
				post.title, SITE_NAME
			)
		});
		let mut keywords = format!("{}, real estate Kenya, property investment", post.title);
		if !post.categories.is_empty() {
			keywords.push_str(", ");
			keywords.push_str(&post.categories.join(", "));
		}

		let mut record = MetadataRecord {
			title: format!("{} | {} Blog", post.title, SITE_NAME),
			description,
			keywords,
			og_image: post
				.image_url
				.clone()
				.unwrap_or_else(|| self.site.default_og_image()),
			og_url: url.clone(),
			canonical_url: url,
			og_type: OgType::Article,
			twitter_card: TWITTER_CARD_LARGE.to_string(),
			published_at: post.published_at,
			is_blog_post: true,
		};
		record.normalize(Utc::now());
		record
	}

	/// Verifies that every router pattern is covered by an entry.
	///
	/// Call at startup with the router's registered patterns; a missing
	/// entry is a configuration defect, not something to paper over at
	/// request time.
	pub fn verify_coverage<'a>(
		&self,
		patterns: impl IntoIterator<Item = &'a str>,
	) -> Result<(), MetaError> {
		for pattern in patterns {
			if !self.entries.iter().any(|entry| entry.route == pattern) {
				return Err(MetaError::UncoveredRoute {
					pattern: pattern.to_string(),
				});
			}
		}
		Ok(())
	}

	fn static_record(&self, path: &str, meta: &PageMeta) -> MetadataRecord {
		let url = self.site.absolute(path);
		MetadataRecord {
			title: meta.title.to_string(),
			description: meta.description.to_string(),
			keywords: meta.keywords.to_string(),
			og_image: self.site.default_og_image(),
			og_url: url.clone(),
			canonical_url: url,
			og_type: OgType::Website,
			twitter_card: TWITTER_CARD_LARGE.to_string(),
			published_at: None,
			is_blog_post: false,
		}
	}

	fn blog_placeholder(&self, path: &str) -> MetadataRecord {
		let url = self.site.absolute(path);
		MetadataRecord {
			title: format!("Blog Post | {}", SITE_NAME),
			description: "Read our latest insights on real estate in Kenya.".to_string(),
			keywords: site::DEFAULT_KEYWORDS.to_string(),
			og_image: self.site.default_og_image(),
			og_url: url.clone(),
			canonical_url: url,
			og_type: OgType::Article,
			twitter_card: TWITTER_CARD_LARGE.to_string(),
			published_at: None,
			is_blog_post: true,
		}
	}
}
