//! Application chrome shared by every screen.

use crate::view::{IntoPage, Page, PageElement};

/// Navigation entries shown in the header.
const NAV_LINKS: &[(&str, &str)] = &[
	("/", "Home"),
	("/about", "About"),
	("/properties", "Properties"),
	("/blogs", "Blog"),
	("/contact", "Contact"),
];

/// Wraps screen content in the shared header/footer chrome.
///
/// `current_path` highlights the active navigation entry so server and
/// client renders of the same path agree on the markup.
pub fn app_layout(current_path: &str, content: Page) -> Page {
	Page::fragment([
		announcement(),
		header(current_path),
		PageElement::new("main").attr("id", "content").child(content).into_page(),
		footer(),
	])
}

fn announcement() -> Page {
	PageElement::new("div")
		.attr("class", "announcement")
		.child("Flexible payment plans of up to 30 months on all developments")
		.into_page()
}

fn header(current_path: &str) -> Page {
	let mut nav = PageElement::new("nav").attr("class", "site-nav");
	for (href, label) in NAV_LINKS {
		let mut link = PageElement::new("a").attr("href", *href).child(*label);
		if is_active(current_path, href) {
			link = link.attr("aria-current", "page");
		}
		nav = nav.child(link);
	}

	PageElement::new("header")
		.attr("class", "site-header")
		.child(
			PageElement::new("a")
				.attr("href", "/")
				.attr("class", "brand")
				.child("Imperia Consulting"),
		)
		.child(nav)
		.into_page()
}

fn footer() -> Page {
	PageElement::new("footer")
		.attr("class", "site-footer")
		.child(
			PageElement::new("p").child("Imperia Consulting — Premier Real Estate in Kenya"),
		)
		.child(
			PageElement::new("p")
				.attr("class", "footer-contact")
				.child("Westlands, Nairobi · +254 116 071 190"),
		)
		.into_page()
}

fn is_active(current_path: &str, href: &str) -> bool {
	if href == "/" {
		return current_path == "/";
	}
	current_path == href || current_path.starts_with(&format!("{}/", href))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_layout_wraps_content() {
		let html = app_layout("/", Page::text("inner")).render_to_string();
		assert!(html.contains("<header"));
		assert!(html.contains("inner"));
		assert!(html.contains("<footer"));
	}

	#[test]
	fn test_active_link_marked() {
		let html = app_layout("/about", Page::empty()).render_to_string();
		assert!(html.contains("<a href=\"/about\" aria-current=\"page\">About</a>"));
	}

	#[test]
	fn test_nested_path_marks_section_active() {
		assert!(is_active("/blogs", "/blogs"));
		assert!(!is_active("/property/oak-1-bedroom", "/properties"));
		assert!(is_active("/", "/"));
		assert!(!is_active("/about", "/"));
	}
}
