//! Site-wide constants and the configurable base URL.
//!
//! The business-identity constants (name, locale, geo tags, contact phone)
//! are fixed; only the base URL varies between environments.

/// Public business name, used in titles, `og:site_name` and JSON-LD.
pub const SITE_NAME: &str = "Imperia Consulting";

/// Production base URL; the default when no override is configured.
pub const SITE_URL: &str = "https://imperiagrouponline.com";

/// Site-wide default title.
pub const DEFAULT_TITLE: &str = "Imperia Consulting | Premier Real Estate in Kenya";

/// Site-wide default description.
pub const DEFAULT_DESCRIPTION: &str = "Discover premium real estate opportunities in Kenya with \
	Imperia Consulting. We specialize in residential, commercial, and investment properties.";

/// Site-wide default keywords.
pub const DEFAULT_KEYWORDS: &str = "real estate Kenya, property Kenya, Nairobi property, buy \
	house Kenya, Imperia Consulting, real estate agents Kenya";

/// Path of the default Open Graph image, relative to the base URL.
pub const DEFAULT_OG_IMAGE_PATH: &str = "/ilogo.svg";

/// Open Graph locale.
pub const OG_LOCALE: &str = "en_KE";

/// Default Twitter card type.
pub const TWITTER_CARD_LARGE: &str = "summary_large_image";

/// Geographic region meta value.
pub const GEO_REGION: &str = "KE";

/// Geographic placename meta value.
pub const GEO_PLACENAME: &str = "Nairobi";

/// Nairobi GPS coordinates, used for both `geo.position` and `ICBM`.
pub const GEO_POSITION: &str = "1.2921;36.8219";

/// Customer-service phone number for the JSON-LD contact point.
pub const CONTACT_PHONE: &str = "+254116071190";

/// The site identity plus its environment-dependent base URL.
///
/// `base_url` is stored without a trailing slash so [`Site::absolute`] can
/// join paths unambiguously.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
	base_url: String,
}

impl Default for Site {
	fn default() -> Self {
		Self::new(SITE_URL)
	}
}

impl Site {
	/// Creates a site rooted at the given base URL.
	pub fn new(base_url: impl Into<String>) -> Self {
		let mut base_url = base_url.into();
		while base_url.ends_with('/') {
			base_url.pop();
		}
		Self { base_url }
	}

	/// Returns the base URL without a trailing slash.
	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Makes a site-rooted path absolute.
	///
	/// Paths that are already absolute URLs are returned unchanged.
	pub fn absolute(&self, path: &str) -> String {
		if path.starts_with("http://") || path.starts_with("https://") {
			return path.to_string();
		}
		if path.starts_with('/') {
			format!("{}{}", self.base_url, path)
		} else {
			format!("{}/{}", self.base_url, path)
		}
	}

	/// Returns the absolute URL of the default Open Graph image.
	pub fn default_og_image(&self) -> String {
		self.absolute(DEFAULT_OG_IMAGE_PATH)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_site_default_base_url() {
		let site = Site::default();
		assert_eq!(site.base_url(), "https://imperiagrouponline.com");
	}

	#[test]
	fn test_site_trims_trailing_slash() {
		let site = Site::new("http://localhost:5173/");
		assert_eq!(site.base_url(), "http://localhost:5173");
	}

	#[test]
	fn test_absolute_joins_rooted_path() {
		let site = Site::default();
		assert_eq!(
			site.absolute("/about"),
			"https://imperiagrouponline.com/about"
		);
	}

	#[test]
	fn test_absolute_passes_through_full_url() {
		let site = Site::default();
		assert_eq!(
			site.absolute("https://cdn.example.com/a.jpg"),
			"https://cdn.example.com/a.jpg"
		);
	}

	#[test]
	fn test_default_og_image() {
		let site = Site::default();
		assert_eq!(
			site.default_og_image(),
			"https://imperiagrouponline.com/ilogo.svg"
		);
	}
}
