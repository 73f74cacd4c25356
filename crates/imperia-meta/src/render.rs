//! String-serialization backend for the head contract.
//!
//! Pure and deterministic: identical records yield byte-identical output,
//! which the SSR orchestrator relies on when merging fragments into the
//! HTML template.

use std::borrow::Cow;

use crate::record::MetadataRecord;
use crate::tags::{HeadTag, head_tags};

/// Renders a metadata record to a serialized head fragment.
pub fn render_head(record: &MetadataRecord) -> String {
	render_tags(&head_tags(record))
}

/// Serializes a head-tag list in order, one element per line.
pub fn render_tags(tags: &[HeadTag]) -> String {
	let mut out = String::new();
	for tag in tags {
		match tag {
			HeadTag::Title(title) => {
				out.push_str("<title>");
				out.push_str(&html_escape(title));
				out.push_str("</title>\n");
			}
			HeadTag::Meta { name, content } => {
				out.push_str("<meta name=\"");
				out.push_str(&html_escape(name));
				out.push_str("\" content=\"");
				out.push_str(&html_escape(content));
				out.push_str("\">\n");
			}
			HeadTag::MetaProperty { property, content } => {
				out.push_str("<meta property=\"");
				out.push_str(&html_escape(property));
				out.push_str("\" content=\"");
				out.push_str(&html_escape(content));
				out.push_str("\">\n");
			}
			HeadTag::Canonical { href } => {
				out.push_str("<link rel=\"canonical\" href=\"");
				out.push_str(&html_escape(href));
				out.push_str("\">\n");
			}
			HeadTag::JsonLd { payload } => {
				out.push_str("<script type=\"application/ld+json\">");
				// to_string on a Value cannot fail.
				let json = serde_json::to_string(payload).unwrap_or_default();
				out.push_str(&escape_json_for_script(&json));
				out.push_str("</script>\n");
			}
		}
	}
	out
}

/// Escapes HTML special characters for text and attribute contexts.
pub fn html_escape(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '<', '>', '"', '\'']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'<' => escaped.push_str("&lt;"),
				'>' => escaped.push_str("&gt;"),
				'"' => escaped.push_str("&quot;"),
				'\'' => escaped.push_str("&#x27;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Escapes `</` so JSON is safe inside a `<script>` element.
///
/// HTML parsers do not understand the JavaScript string context: a literal
/// `</script>` inside the payload would close the tag early.
fn escape_json_for_script(json: &str) -> String {
	json.replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::resolver::{BlogPostMeta, MetaResolver};

	#[test]
	fn test_render_head_is_pure() {
		let record = MetaResolver::default().resolve("/about");
		assert_eq!(render_head(&record), render_head(&record));
	}

	#[test]
	fn test_render_head_contains_single_title() {
		let record = MetaResolver::default().resolve("/about");
		let fragment = render_head(&record);
		assert_eq!(fragment.matches("<title>").count(), 1);
		assert!(fragment.contains("<title>About Us | Imperia Consulting Real Estate</title>"));
	}

	#[test]
	fn test_render_head_fixed_tag_order() {
		let record = MetaResolver::default().resolve("/contact");
		let fragment = render_head(&record);

		let title = fragment.find("<title>").unwrap();
		let description = fragment.find("name=\"description\"").unwrap();
		let canonical = fragment.find("rel=\"canonical\"").unwrap();
		let og = fragment.find("property=\"og:title\"").unwrap();
		let twitter = fragment.find("name=\"twitter:card\"").unwrap();
		let geo = fragment.find("name=\"geo.region\"").unwrap();
		let json_ld = fragment.find("application/ld+json").unwrap();

		assert!(title < description);
		assert!(description < canonical);
		assert!(canonical < og);
		assert!(og < twitter);
		assert!(twitter < geo);
		assert!(geo < json_ld);
	}

	#[test]
	fn test_render_head_escapes_attribute_values() {
		let resolver = MetaResolver::default();
		let post = BlogPostMeta {
			title: "Q1 \"Outlook\" & <Trends>".to_string(),
			..BlogPostMeta::default()
		};
		let record = resolver.blog_post_record("/blog/q1-outlook", &post);
		let fragment = render_head(&record);

		assert!(fragment.contains("Q1 &quot;Outlook&quot; &amp; &lt;Trends&gt;"));
		assert!(!fragment.contains("\"Outlook\" &"));
	}

	#[test]
	fn test_json_ld_script_cannot_break_out() {
		let resolver = MetaResolver::default();
		let post = BlogPostMeta {
			title: "</script><script>alert(1)</script>".to_string(),
			..BlogPostMeta::default()
		};
		let record = resolver.blog_post_record("/blog/evil", &post);
		let fragment = render_head(&record);

		let script_start = fragment.find("<script type=\"application/ld+json\">").unwrap();
		let payload = &fragment[script_start..];
		assert!(!payload.contains("</script><script>alert"));
		assert!(payload.contains("<\\/"));
	}

	#[test]
	fn test_geo_tags_present() {
		let record = MetaResolver::default().resolve("/");
		let fragment = render_head(&record);
		assert!(fragment.contains("<meta name=\"geo.region\" content=\"KE\">"));
		assert!(fragment.contains("<meta name=\"geo.placename\" content=\"Nairobi\">"));
		assert!(fragment.contains("<meta name=\"ICBM\" content=\"1.2921;36.8219\">"));
	}
}
