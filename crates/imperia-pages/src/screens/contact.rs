//! Contact screen and the lead-capture form model.

use crate::component::Component;
use crate::view::{IntoPage, Page, PageElement};

/// Contact screen with the lead-capture form.
pub struct Contact;

impl Component for Contact {
	fn render(&self) -> Page {
		Page::fragment([
			PageElement::new("section")
				.attr("class", "contact-hero")
				.child(PageElement::new("h1").child("Contact Us"))
				.child(PageElement::new("p").child(
					"Get in touch for property consultation and investment advice.",
				))
				.into_page(),
			lead_form(),
		])
	}

	fn name() -> &'static str {
		"Contact"
	}
}

fn lead_form() -> Page {
	PageElement::new("form")
		.attr("class", "lead-form")
		.attr("method", "post")
		.attr("action", "/contact")
		.child(labeled_input("name", "Full name", "text"))
		.child(labeled_input("email", "Email address", "email"))
		.child(labeled_input("phone", "Phone number", "tel"))
		.child(
			PageElement::new("label")
				.attr("for", "message")
				.child("How can we help?")
				.child(
					PageElement::new("textarea")
						.attr("id", "message")
						.attr("name", "message")
						.attr("rows", "5"),
				),
		)
		.child(
			PageElement::new("button")
				.attr("type", "submit")
				.attr("class", "cta")
				.child("Send message"),
		)
		.into_page()
}

fn labeled_input(name: &'static str, label: &'static str, kind: &'static str) -> Page {
	PageElement::new("label")
		.attr("for", name)
		.child(label)
		.child(
			PageElement::new("input")
				.attr("id", name)
				.attr("name", name)
				.attr("type", kind),
		)
		.into_page()
}

/// A submitted lead-capture form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
	pub name: String,
	pub email: String,
	pub phone: String,
	pub message: String,
}

/// A field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
	pub field: &'static str,
	pub message: &'static str,
}

impl LeadForm {
	/// Validates the submission, collecting every failure.
	pub fn validate(&self) -> Result<(), Vec<FieldError>> {
		let mut errors = Vec::new();
		if self.name.trim().is_empty() {
			errors.push(FieldError {
				field: "name",
				message: "Please tell us your name",
			});
		}
		if !is_plausible_email(&self.email) {
			errors.push(FieldError {
				field: "email",
				message: "Please enter a valid email address",
			});
		}
		if self.message.trim().is_empty() {
			errors.push(FieldError {
				field: "message",
				message: "Please include a short message",
			});
		}
		if errors.is_empty() { Ok(()) } else { Err(errors) }
	}
}

/// Minimal shape check: one `@` with a dotted domain part.
fn is_plausible_email(email: &str) -> bool {
	let Some((local, domain)) = email.split_once('@') else {
		return false;
	};
	!local.is_empty()
		&& domain.contains('.')
		&& !domain.starts_with('.')
		&& !domain.ends_with('.')
}
