//! Upsert backend for the head contract.
//!
//! The client patches the live document head element by element: create the
//! element if absent, otherwise update it in place. Wholesale removal and
//! reinsertion is never performed, so repeated application cannot flicker
//! or accumulate duplicates.
//!
//! [`HeadSink`] abstracts the document: the WASM bundle implements it over
//! `web-sys`, and [`MemoryHead`] provides an in-memory head usable from any
//! target (and from tests).

use std::collections::BTreeMap;

use crate::record::MetadataRecord;
use crate::tags::{HeadTag, head_tags};

/// A mutable document head that head tags can be upserted into.
pub trait HeadSink {
	/// Replaces the document title.
	fn set_title(&mut self, title: &str);
	/// Creates or updates the `<meta name=...>` element.
	fn upsert_meta_name(&mut self, name: &str, content: &str);
	/// Creates or updates the `<meta property=...>` element.
	fn upsert_meta_property(&mut self, property: &str, content: &str);
	/// Creates or updates the canonical `<link>` element.
	fn upsert_canonical(&mut self, href: &str);
	/// Creates or updates the JSON-LD `<script>` element's text content.
	fn upsert_json_ld(&mut self, payload: &str);
}

/// Applies a metadata record to a document head.
///
/// Consumes the same canonical tag list as the string backend, so the two
/// environments implement one contract. Idempotent: applying the same
/// record twice leaves exactly one element per tag identity.
pub fn apply_head(record: &MetadataRecord, sink: &mut dyn HeadSink) {
	for tag in head_tags(record) {
		match tag {
			HeadTag::Title(title) => sink.set_title(&title),
			HeadTag::Meta { name, content } => sink.upsert_meta_name(name, &content),
			HeadTag::MetaProperty { property, content } => {
				sink.upsert_meta_property(property, &content)
			}
			HeadTag::Canonical { href } => sink.upsert_canonical(&href),
			HeadTag::JsonLd { payload } => {
				let json = serde_json::to_string(&payload).unwrap_or_default();
				sink.upsert_json_ld(&json);
			}
		}
	}
}

/// An in-memory document head.
///
/// Each map key models one live element; upserting an existing key updates
/// the element rather than adding a sibling, mirroring the DOM backend.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryHead {
	title: Option<String>,
	named_metas: BTreeMap<String, String>,
	property_metas: BTreeMap<String, String>,
	canonical: Option<String>,
	json_ld: Option<String>,
}

impl MemoryHead {
	/// Creates an empty head.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the current title.
	pub fn title(&self) -> Option<&str> {
		self.title.as_deref()
	}

	/// Returns the content of a `<meta name=...>` element.
	pub fn meta_name(&self, name: &str) -> Option<&str> {
		self.named_metas.get(name).map(String::as_str)
	}

	/// Returns the content of a `<meta property=...>` element.
	pub fn meta_property(&self, property: &str) -> Option<&str> {
		self.property_metas.get(property).map(String::as_str)
	}

	/// Returns the canonical URL.
	pub fn canonical(&self) -> Option<&str> {
		self.canonical.as_deref()
	}

	/// Returns the JSON-LD payload text.
	pub fn json_ld(&self) -> Option<&str> {
		self.json_ld.as_deref()
	}

	/// Total number of live head elements.
	pub fn element_count(&self) -> usize {
		self.named_metas.len()
			+ self.property_metas.len()
			+ usize::from(self.title.is_some())
			+ usize::from(self.canonical.is_some())
			+ usize::from(self.json_ld.is_some())
	}
}

impl HeadSink for MemoryHead {
	fn set_title(&mut self, title: &str) {
		self.title = Some(title.to_string());
	}

	fn upsert_meta_name(&mut self, name: &str, content: &str) {
		self.named_metas
			.insert(name.to_string(), content.to_string());
	}

	fn upsert_meta_property(&mut self, property: &str, content: &str) {
		self.property_metas
			.insert(property.to_string(), content.to_string());
	}

	fn upsert_canonical(&mut self, href: &str) {
		self.canonical = Some(href.to_string());
	}

	fn upsert_json_ld(&mut self, payload: &str) {
		self.json_ld = Some(payload.to_string());
	}
}
