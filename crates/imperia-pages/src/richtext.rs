//! Rich-text rendering for article bodies.
//!
//! Dispatches on the closed [`BlockKind`] set; consecutive list items are
//! grouped into one `<ul>`/`<ol>`. Unknown block kinds render as plain
//! paragraphs so an unexpected document never fails the page.

use imperia_content::{Block, BlockKind, ImageUrlBuilder, MarkDef, Span, TextBlock};

use crate::view::{IntoPage, Page, PageElement};

/// Width requested for inline article images.
const INLINE_IMAGE_WIDTH: u32 = 800;

/// Renders an article body to a view tree.
pub fn render_blocks(blocks: &[Block], images: &ImageUrlBuilder) -> Page {
	let mut out: Vec<Page> = Vec::new();
	let mut list: Option<(BlockKind, PageElement)> = None;

	for block in blocks {
		let kind = block.kind();

		// Close the open list when the run of items ends.
		if let Some((open_kind, _)) = &list {
			let continues = matches!(kind, BlockKind::BulletItem | BlockKind::NumberItem)
				&& kind == *open_kind;
			if !continues && let Some((_, element)) = list.take() {
				out.push(element.into_page());
			}
		}

		match (kind, block) {
			(BlockKind::BulletItem | BlockKind::NumberItem, Block::Text(text)) => {
				let item = PageElement::new("li").child(render_spans(text));
				list = Some(match list.take() {
					Some((open_kind, element)) => (open_kind, element.child(item)),
					None => {
						let tag = if kind == BlockKind::NumberItem { "ol" } else { "ul" };
						(kind, PageElement::new(tag).child(item))
					}
				});
			}
			(BlockKind::Heading1, Block::Text(text)) => {
				out.push(PageElement::new("h1").child(render_spans(text)).into_page());
			}
			(BlockKind::Heading2, Block::Text(text)) => {
				out.push(PageElement::new("h2").child(render_spans(text)).into_page());
			}
			(BlockKind::Heading3, Block::Text(text)) => {
				out.push(PageElement::new("h3").child(render_spans(text)).into_page());
			}
			(BlockKind::Quote, Block::Text(text)) => {
				out.push(
					PageElement::new("blockquote")
						.child(render_spans(text))
						.into_page(),
				);
			}
			(BlockKind::Paragraph, Block::Text(text)) => {
				out.push(PageElement::new("p").child(render_spans(text)).into_page());
			}
			(BlockKind::Image, Block::Image(image)) => {
				let mut figure = PageElement::new("figure").child(
					PageElement::new("img")
						.attr("src", images.image(image).width(INLINE_IMAGE_WIDTH).url())
						.attr(
							"alt",
							image.alt.clone().unwrap_or_else(|| "Blog image".to_string()),
						)
						.attr("loading", "lazy"),
				);
				if let Some(caption) = &image.caption {
					figure = figure.child(
						PageElement::new("figcaption").child(caption.clone()),
					);
				}
				out.push(figure.into_page());
			}
			// Plain fallback: unknown styles and unknown block types.
			(_, Block::Text(text)) => {
				out.push(PageElement::new("p").child(render_spans(text)).into_page());
			}
			(_, _) => {}
		}
	}

	if let Some((_, element)) = list {
		out.push(element.into_page());
	}

	Page::Fragment(out)
}

/// Renders the spans of a text block, applying strong and link marks.
fn render_spans(block: &TextBlock) -> Page {
	let children = block
		.children
		.iter()
		.map(|span| render_span(span, &block.mark_defs))
		.collect();
	Page::Fragment(children)
}

fn render_span(span: &Span, mark_defs: &[MarkDef]) -> Page {
	let mut view = Page::text(span.text.clone());
	for mark in &span.marks {
		view = match mark.as_str() {
			"strong" => PageElement::new("strong").child(view).into_page(),
			"em" => PageElement::new("em").child(view).into_page(),
			key => match link_href(key, mark_defs) {
				Some(href) => PageElement::new("a")
					.attr("href", href.to_string())
					.attr("target", "_blank")
					.attr("rel", "noopener noreferrer")
					.child(view)
					.into_page(),
				// Unknown decorator: keep the text unwrapped.
				None => view,
			},
		};
	}
	view
}

fn link_href<'a>(key: &str, mark_defs: &'a [MarkDef]) -> Option<&'a str> {
	mark_defs
		.iter()
		.find(|def| def.key == key && def.kind == "link")
		.and_then(|def| def.href.as_deref())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn images() -> ImageUrlBuilder {
		ImageUrlBuilder::new("r2dwso19", "production")
	}

	fn text(style: Option<&str>, list: Option<&str>, spans: Vec<Span>) -> Block {
		Block::Text(TextBlock {
			style: style.map(str::to_string),
			list_item: list.map(str::to_string),
			children: spans,
			mark_defs: Vec::new(),
		})
	}

	fn span(text: &str) -> Span {
		Span {
			text: text.to_string(),
			marks: Vec::new(),
		}
	}

	#[test]
	fn test_renders_each_text_kind() {
		let blocks = vec![
			text(Some("h1"), None, vec![span("Title")]),
			text(Some("h2"), None, vec![span("Section")]),
			text(Some("h3"), None, vec![span("Subsection")]),
			text(Some("blockquote"), None, vec![span("Quoted")]),
			text(Some("normal"), None, vec![span("Body")]),
		];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("<h1>Title</h1>"));
		assert!(html.contains("<h2>Section</h2>"));
		assert!(html.contains("<h3>Subsection</h3>"));
		assert!(html.contains("<blockquote>Quoted</blockquote>"));
		assert!(html.contains("<p>Body</p>"));
	}

	#[test]
	fn test_groups_consecutive_list_items() {
		let blocks = vec![
			text(None, Some("bullet"), vec![span("one")]),
			text(None, Some("bullet"), vec![span("two")]),
			text(None, None, vec![span("after")]),
		];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("<ul><li>one</li><li>two</li></ul>"));
		assert!(html.contains("<p>after</p>"));
	}

	#[test]
	fn test_numbered_list_uses_ol() {
		let blocks = vec![
			text(None, Some("number"), vec![span("first")]),
			text(None, Some("number"), vec![span("second")]),
		];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("<ol><li>first</li><li>second</li></ol>"));
	}

	#[test]
	fn test_strong_mark() {
		let blocks = vec![text(
			None,
			None,
			vec![Span {
				text: "bold".to_string(),
				marks: vec!["strong".to_string()],
			}],
		)];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("<p><strong>bold</strong></p>"));
	}

	#[test]
	fn test_link_mark_resolves_mark_def() {
		let blocks = vec![Block::Text(TextBlock {
			style: None,
			list_item: None,
			children: vec![Span {
				text: "read more".to_string(),
				marks: vec!["lk1".to_string()],
			}],
			mark_defs: vec![MarkDef {
				key: "lk1".to_string(),
				kind: "link".to_string(),
				href: Some("https://example.com".to_string()),
			}],
		})];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("href=\"https://example.com\""));
		assert!(html.contains("rel=\"noopener noreferrer\""));
	}

	#[test]
	fn test_unknown_style_renders_paragraph() {
		let blocks = vec![text(Some("h6"), None, vec![span("odd")])];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("<p>odd</p>"));
	}

	#[test]
	fn test_unknown_block_type_renders_nothing_but_does_not_fail() {
		let blocks = vec![Block::Unknown, text(None, None, vec![span("still here")])];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("still here"));
	}

	#[test]
	fn test_image_block_with_caption() {
		let mut image = imperia_content::ImageRef::new("image-abc123-800x600-jpg");
		image.caption = Some("Skyline".to_string());
		let blocks = vec![Block::Image(image)];
		let html = render_blocks(&blocks, &images()).render_to_string();
		assert!(html.contains("<figure>"));
		assert!(html.contains("w=800"));
		assert!(html.contains("<figcaption>Skyline</figcaption>"));
	}
}
