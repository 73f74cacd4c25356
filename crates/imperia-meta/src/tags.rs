//! The canonical head-tag list.
//!
//! [`head_tags`] is the single definition of the head contract: both the
//! server's string serializer ([`crate::render_head`]) and the client's
//! DOM upsert ([`crate::apply_head`]) consume the list it produces, so the
//! two environments can never drift apart.

use serde_json::json;

use crate::record::MetadataRecord;
use crate::site::{
	CONTACT_PHONE, GEO_PLACENAME, GEO_POSITION, GEO_REGION, OG_LOCALE, SITE_NAME, SITE_URL,
};

/// One head element.
#[derive(Debug, Clone, PartialEq)]
pub enum HeadTag {
	/// `<title>`.
	Title(String),
	/// `<meta name=... content=...>`.
	Meta {
		name: &'static str,
		content: String,
	},
	/// `<meta property=... content=...>` (Open Graph).
	MetaProperty {
		property: &'static str,
		content: String,
	},
	/// `<link rel="canonical" href=...>`.
	Canonical { href: String },
	/// `<script type="application/ld+json">`.
	JsonLd { payload: serde_json::Value },
}

/// The identity of a head element, used by the upsert backend.
///
/// Each key has at most one live element in the document head at any time.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum TagKey {
	Title,
	MetaName(&'static str),
	MetaProperty(&'static str),
	Canonical,
	JsonLd,
}

impl HeadTag {
	/// Returns the element identity this tag upserts into.
	pub fn key(&self) -> TagKey {
		match self {
			Self::Title(_) => TagKey::Title,
			Self::Meta { name, .. } => TagKey::MetaName(name),
			Self::MetaProperty { property, .. } => TagKey::MetaProperty(property),
			Self::Canonical { .. } => TagKey::Canonical,
			Self::JsonLd { .. } => TagKey::JsonLd,
		}
	}
}

/// Converts a metadata record into the ordered, canonical head-tag list.
///
/// Deterministic: identical records yield identical lists. The order is
/// fixed — title, basic meta, canonical link, Open Graph, Twitter card,
/// geographic tags, one JSON-LD block.
pub fn head_tags(record: &MetadataRecord) -> Vec<HeadTag> {
	let mut tags = vec![
		HeadTag::Title(record.title.clone()),
		HeadTag::Meta {
			name: "description",
			content: record.description.clone(),
		},
		HeadTag::Meta {
			name: "keywords",
			content: record.keywords.clone(),
		},
		HeadTag::Meta {
			name: "author",
			content: SITE_NAME.to_string(),
		},
		HeadTag::Meta {
			name: "robots",
			content: "index, follow".to_string(),
		},
		HeadTag::Canonical {
			href: record.canonical_url.clone(),
		},
		HeadTag::MetaProperty {
			property: "og:title",
			content: record.title.clone(),
		},
		HeadTag::MetaProperty {
			property: "og:description",
			content: record.description.clone(),
		},
		HeadTag::MetaProperty {
			property: "og:image",
			content: record.og_image.clone(),
		},
		HeadTag::MetaProperty {
			property: "og:url",
			content: record.og_url.clone(),
		},
		HeadTag::MetaProperty {
			property: "og:type",
			content: record.og_type.as_str().to_string(),
		},
		HeadTag::MetaProperty {
			property: "og:site_name",
			content: SITE_NAME.to_string(),
		},
		HeadTag::MetaProperty {
			property: "og:locale",
			content: OG_LOCALE.to_string(),
		},
		HeadTag::Meta {
			name: "twitter:card",
			content: record.twitter_card.clone(),
		},
		HeadTag::Meta {
			name: "twitter:title",
			content: record.title.clone(),
		},
		HeadTag::Meta {
			name: "twitter:description",
			content: record.description.clone(),
		},
		HeadTag::Meta {
			name: "twitter:image",
			content: record.og_image.clone(),
		},
		HeadTag::Meta {
			name: "geo.region",
			content: GEO_REGION.to_string(),
		},
		HeadTag::Meta {
			name: "geo.placename",
			content: GEO_PLACENAME.to_string(),
		},
		HeadTag::Meta {
			name: "geo.position",
			content: GEO_POSITION.to_string(),
		},
		HeadTag::Meta {
			name: "ICBM",
			content: GEO_POSITION.to_string(),
		},
	];
	tags.push(HeadTag::JsonLd {
		payload: json_ld(record),
	});
	tags
}

/// Builds the schema.org structured-data payload.
///
/// `BlogPosting` for blog posts, `RealEstateAgent` for every other page.
fn json_ld(record: &MetadataRecord) -> serde_json::Value {
	if record.is_blog_post {
		let published = record
			.published_at
			.map(|t| t.to_rfc3339())
			.unwrap_or_default();
		json!({
			"@context": "https://schema.org",
			"@type": "BlogPosting",
			"name": SITE_NAME,
			"url": SITE_URL,
			"headline": record.title,
			"description": record.description,
			"datePublished": published,
			"dateModified": published,
			"mainEntityOfPage": {
				"@type": "WebPage",
				"@id": record.og_url,
			},
		})
	} else {
		json!({
			"@context": "https://schema.org",
			"@type": "RealEstateAgent",
			"name": SITE_NAME,
			"url": SITE_URL,
			"image": record.og_image,
			"description": record.description,
			"address": {
				"@type": "PostalAddress",
				"addressLocality": "Nairobi",
				"addressCountry": "Kenya",
			},
			"contactPoint": {
				"@type": "ContactPoint",
				"telephone": CONTACT_PHONE,
				"contactType": "customer service",
			},
		})
	}
}
