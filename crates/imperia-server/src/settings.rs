//! Environment-driven settings.
//!
//! Every setting has a production default; `IMPERIA_*` environment
//! variables override them. Parsing happens once at startup and a bad
//! value is a fatal [`ServerError::Settings`], not something discovered
//! mid-request.

use std::net::SocketAddr;
use std::path::PathBuf;

use imperia_content::ContentConfig;
use imperia_meta::site::SITE_URL;

use crate::error::ServerError;

/// Default listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5173";

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Public base URL embedded in canonical and Open Graph URLs.
	pub base_url: String,
	/// Address the HTTP server binds to.
	pub bind_addr: SocketAddr,
	/// Optional template file; the built-in template is used when absent.
	pub template_path: Option<PathBuf>,
	/// Content service connection settings.
	pub content: ContentConfig,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			base_url: SITE_URL.to_string(),
			// The literal is a valid socket address.
			bind_addr: DEFAULT_BIND_ADDR.parse().unwrap_or_else(|_| {
				SocketAddr::from(([127, 0, 0, 1], 5173))
			}),
			template_path: None,
			content: ContentConfig::default(),
		}
	}
}

impl Settings {
	/// Loads settings from the environment over the defaults.
	pub fn from_env() -> Result<Self, ServerError> {
		let mut settings = Self::default();

		if let Ok(base_url) = std::env::var("IMPERIA_BASE_URL") {
			settings.base_url = base_url;
		}
		if let Ok(bind_addr) = std::env::var("IMPERIA_BIND_ADDR") {
			settings.bind_addr =
				bind_addr
					.parse()
					.map_err(|_| ServerError::Settings {
						name: "IMPERIA_BIND_ADDR",
						reason: format!("`{}` is not a socket address", bind_addr),
					})?;
		}
		if let Ok(path) = std::env::var("IMPERIA_TEMPLATE_PATH") {
			settings.template_path = Some(PathBuf::from(path));
		}
		if let Ok(project_id) = std::env::var("IMPERIA_CONTENT_PROJECT") {
			settings.content.project_id = project_id;
		}
		if let Ok(dataset) = std::env::var("IMPERIA_CONTENT_DATASET") {
			settings.content.dataset = dataset;
		}
		if let Ok(api_version) = std::env::var("IMPERIA_CONTENT_API_VERSION") {
			settings.content.api_version = api_version;
		}
		if let Ok(use_cdn) = std::env::var("IMPERIA_CONTENT_USE_CDN") {
			settings.content.use_cdn =
				use_cdn
					.parse()
					.map_err(|_| ServerError::Settings {
						name: "IMPERIA_CONTENT_USE_CDN",
						reason: format!("`{}` is not a boolean", use_cdn),
					})?;
		}

		settings.validate()?;
		Ok(settings)
	}

	/// Rejects obviously broken values.
	pub fn validate(&self) -> Result<(), ServerError> {
		if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
			return Err(ServerError::Settings {
				name: "IMPERIA_BASE_URL",
				reason: format!("`{}` is not an absolute http(s) URL", self.base_url),
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_are_valid() {
		let settings = Settings::default();
		assert!(settings.validate().is_ok());
		assert_eq!(settings.base_url, "https://imperiagrouponline.com");
		assert_eq!(settings.bind_addr.port(), 5173);
	}

	#[test]
	fn test_relative_base_url_rejected() {
		let settings = Settings {
			base_url: "imperiagrouponline.com".to_string(),
			..Settings::default()
		};
		let err = settings.validate().unwrap_err();
		assert!(matches!(
			err,
			ServerError::Settings {
				name: "IMPERIA_BASE_URL",
				..
			}
		));
	}
}
