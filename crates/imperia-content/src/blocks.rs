//! Portable-text block model.
//!
//! The article body is a flat list of typed blocks. The set of kinds the
//! site renders is closed — heading levels, paragraphs, quotes, lists and
//! inline images, with strong and link span marks — and anything outside
//! it degrades to plain text rather than failing the render.

use serde::{Deserialize, Serialize};

use crate::types::ImageRef;

/// One body block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "_type")]
pub enum Block {
	/// A styled text block (paragraph, heading, quote, list item).
	#[serde(rename = "block")]
	Text(TextBlock),
	/// An inline image.
	#[serde(rename = "image")]
	Image(ImageRef),
	/// Any block type this site does not know; rendered as plain text.
	#[serde(other)]
	Unknown,
}

/// A text block with style, optional list membership and rich spans.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
	/// Style name from the editor: `normal`, `h1`..`h3`, `blockquote`.
	#[serde(default)]
	pub style: Option<String>,
	/// `bullet` or `number` when this block is a list item.
	#[serde(rename = "listItem", default, skip_serializing_if = "Option::is_none")]
	pub list_item: Option<String>,
	#[serde(default)]
	pub children: Vec<Span>,
	/// Definitions referenced by span marks (currently only links).
	#[serde(rename = "markDefs", default)]
	pub mark_defs: Vec<MarkDef>,
}

/// An inline text run with zero or more marks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Span {
	#[serde(default)]
	pub text: String,
	/// Either decorator names (`strong`) or mark-definition keys.
	#[serde(default)]
	pub marks: Vec<String>,
}

/// A mark definition attached to a text block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarkDef {
	#[serde(rename = "_key", default)]
	pub key: String,
	#[serde(rename = "_type", default)]
	pub kind: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub href: Option<String>,
}

/// The closed set of block kinds the renderer dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
	Heading1,
	Heading2,
	Heading3,
	Paragraph,
	Quote,
	BulletItem,
	NumberItem,
	Image,
	/// Unknown style or block type; rendered as a plain paragraph.
	Plain,
}

impl Block {
	/// Classifies this block into the closed rendering set.
	pub fn kind(&self) -> BlockKind {
		match self {
			Self::Image(_) => BlockKind::Image,
			Self::Unknown => BlockKind::Plain,
			Self::Text(text) => {
				if let Some(list) = text.list_item.as_deref() {
					return match list {
						"number" => BlockKind::NumberItem,
						_ => BlockKind::BulletItem,
					};
				}
				match text.style.as_deref() {
					Some("h1") => BlockKind::Heading1,
					Some("h2") => BlockKind::Heading2,
					Some("h3") => BlockKind::Heading3,
					Some("blockquote") => BlockKind::Quote,
					Some("normal") | None => BlockKind::Paragraph,
					Some(_) => BlockKind::Plain,
				}
			}
		}
	}
}

/// Concatenates the plain text of a body.
pub fn plain_text(blocks: &[Block]) -> String {
	let mut out = String::new();
	for block in blocks {
		if let Block::Text(text) = block {
			for span in &text.children {
				out.push_str(&span.text);
			}
			out.push(' ');
		}
	}
	out.trim_end().to_string()
}

/// Estimates reading time from the body text.
///
/// Mirrors the service-side projection (5 characters per word, 180 words
/// per minute) so a locally computed value matches a fetched one.
pub fn reading_time_minutes(blocks: &[Block]) -> u32 {
	let chars = plain_text(blocks).chars().count() as f64;
	(chars / 5.0 / 180.0).round() as u32
}
