//! The static HTML template contract.
//!
//! The template must contain exactly one default `<title>…</title>`,
//! exactly one `</head>`, and exactly one body outlet marker. Violations
//! are fatal at startup — the orchestrator's merge step assumes the
//! markers exist and appear once.

/// The body outlet marker the orchestrator replaces with rendered markup.
pub const BODY_OUTLET: &str = "<!--ssr-outlet-->";

/// Template contract violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
	#[error("template has no default <title> element")]
	MissingTitle,
	#[error("template has {count} <title> elements, expected exactly one")]
	MultipleTitles { count: usize },
	#[error("template has no closing </head> tag")]
	MissingHeadClose,
	#[error("template has {count} closing </head> tags, expected exactly one")]
	MultipleHeadClose { count: usize },
	#[error("template has no body outlet marker `{BODY_OUTLET}`")]
	MissingOutlet,
	#[error("template has {count} body outlet markers, expected exactly one")]
	MultipleOutlets { count: usize },
}

/// A validated HTML template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
	html: String,
}

impl Template {
	/// Validates the marker contract and wraps the template.
	pub fn parse(html: impl Into<String>) -> Result<Self, TemplateError> {
		let html = html.into();

		let titles = html.matches("<title>").count();
		match titles {
			0 => return Err(TemplateError::MissingTitle),
			1 => {
				if !html.contains("</title>") {
					return Err(TemplateError::MissingTitle);
				}
			}
			count => return Err(TemplateError::MultipleTitles { count }),
		}

		let head_closes = html.matches("</head>").count();
		match head_closes {
			0 => return Err(TemplateError::MissingHeadClose),
			1 => {}
			count => return Err(TemplateError::MultipleHeadClose { count }),
		}

		let outlets = html.matches(BODY_OUTLET).count();
		match outlets {
			0 => return Err(TemplateError::MissingOutlet),
			1 => {}
			count => return Err(TemplateError::MultipleOutlets { count }),
		}

		Ok(Self { html })
	}

	/// The template shipped with the binary.
	pub fn builtin() -> Result<Self, TemplateError> {
		Self::parse(include_str!("../templates/index.html"))
	}

	/// Returns the raw template HTML.
	pub fn html(&self) -> &str {
		&self.html
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	const VALID: &str = "<!DOCTYPE html><html><head><title>Default</title></head>\
		<body><div id=\"root\"><!--ssr-outlet--></div></body></html>";

	#[test]
	fn test_valid_template_parses() {
		assert!(Template::parse(VALID).is_ok());
	}

	#[test]
	fn test_builtin_template_is_valid() {
		assert!(Template::builtin().is_ok());
	}

	#[rstest]
	#[case(VALID.replace("<title>Default</title>", ""), TemplateError::MissingTitle)]
	#[case(
		VALID.replace("</head>", "<title>Second</title></head>"),
		TemplateError::MultipleTitles { count: 2 }
	)]
	#[case(VALID.replace("</head>", ""), TemplateError::MissingHeadClose)]
	#[case(VALID.replace("<!--ssr-outlet-->", ""), TemplateError::MissingOutlet)]
	#[case(
		VALID.replace("</body>", "<!--ssr-outlet--></body>"),
		TemplateError::MultipleOutlets { count: 2 }
	)]
	fn test_contract_violations(#[case] html: String, #[case] expected: TemplateError) {
		assert_eq!(Template::parse(html).unwrap_err(), expected);
	}
}
